use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Insert,
    IntoActiveModel, QueryFilter, QuerySelect, TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_uuid_v7},
        inventory::{
            entities::InventoryItem,
            merge::{QuantityChange, apply_delta},
            ports::InventoryRepository,
            value_objects::{InventoryUpsert, QuantityAdjustment, UpsertOutcome},
        },
    },
    entity::user_inventory::{ActiveModel, Column, Entity},
};

fn internal(context: &'static str) -> impl Fn(sea_orm::DbErr) -> CoreError {
    move |e| {
        error!("{}: {}", context, e);
        CoreError::InternalServerError
    }
}

/// One `INSERT ... ON CONFLICT DO UPDATE` on the unique
/// (user, ingredient, location) index. The stored unit is kept and the
/// stored expiration only changes when the caller supplied one.
fn upsert_statement(
    upsert: &InventoryUpsert,
    new_id: Uuid,
    now: DateTime<FixedOffset>,
) -> Insert<ActiveModel> {
    let active_model = ActiveModel {
        id: Set(new_id),
        user_id: Set(upsert.user_id),
        ingredient_id: Set(upsert.ingredient_id),
        quantity: Set(upsert.quantity),
        unit: Set(upsert.unit.clone()),
        storage_location: Set(upsert.storage_location.as_str().to_string()),
        expiration_date: Set(upsert.creation_expiration().map(|date| date.fixed_offset())),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let mut on_conflict =
        OnConflict::columns([Column::UserId, Column::IngredientId, Column::StorageLocation]);
    on_conflict
        .value(
            Column::Quantity,
            Expr::cust("user_inventory.quantity + EXCLUDED.quantity"),
        )
        .update_column(Column::UpdatedAt);
    if upsert.explicit_expiration.is_some() {
        on_conflict.update_column(Column::ExpirationDate);
    }

    Entity::insert(active_model).on_conflict(on_conflict.to_owned())
}

#[derive(Debug, Clone)]
pub struct PostgresInventoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl InventoryRepository for PostgresInventoryRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<InventoryItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(internal("Failed to list inventory"))?
            .iter()
            .map(InventoryItem::from)
            .collect();

        Ok(items)
    }

    async fn get_by_id(&self, item_id: Uuid, user_id: Uuid) -> Result<Option<InventoryItem>, CoreError> {
        let item = Entity::find_by_id(item_id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(internal("Failed to get inventory item"))?;

        Ok(item.map(InventoryItem::from))
    }

    async fn upsert(&self, upsert: InventoryUpsert) -> Result<UpsertOutcome, CoreError> {
        let new_id = generate_uuid_v7();

        let stored = upsert_statement(&upsert, new_id, Utc::now().fixed_offset())
            .exec_with_returning(&self.db)
            .await
            .map_err(internal("Failed to upsert inventory item"))?;

        Ok(UpsertOutcome {
            merged: stored.id != new_id,
            item: InventoryItem::from(stored),
        })
    }

    async fn apply_quantity_delta(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        delta: f64,
    ) -> Result<Option<QuantityAdjustment>, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(internal("Failed to start inventory transaction"))?;

        let Some(current) = Entity::find_by_id(item_id)
            .filter(Column::UserId.eq(user_id))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(internal("Failed to lock inventory item"))?
        else {
            return Ok(None);
        };

        let adjustment = match apply_delta(current.quantity, delta) {
            QuantityChange::Set(quantity) => {
                let mut active_model = current.into_active_model();
                active_model.quantity = Set(quantity);
                active_model.updated_at = Set(Utc::now().fixed_offset());
                let updated = active_model
                    .update(&txn)
                    .await
                    .map_err(internal("Failed to update inventory quantity"))?;
                QuantityAdjustment::Updated {
                    item: InventoryItem::from(updated),
                }
            }
            QuantityChange::Remove => {
                Entity::delete_by_id(item_id)
                    .exec(&txn)
                    .await
                    .map_err(internal("Failed to delete inventory item"))?;
                QuantityAdjustment::Removed { item_id }
            }
        };

        txn.commit()
            .await
            .map_err(internal("Failed to commit inventory transaction"))?;

        Ok(Some(adjustment))
    }

    async fn update_item(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
        let updated = Entity::update(ActiveModel {
            id: Set(item.id),
            user_id: Set(item.user_id),
            ingredient_id: Set(item.ingredient_id),
            quantity: Set(item.quantity),
            unit: Set(item.unit),
            storage_location: Set(item.storage_location.as_str().to_string()),
            expiration_date: Set(item.expiration_date.map(|date| date.fixed_offset())),
            created_at: Set(item.created_at.fixed_offset()),
            updated_at: Set(item.updated_at.fixed_offset()),
        })
        .filter(Column::UserId.eq(item.user_id))
        .exec(&self.db)
        .await
        .map_err(internal("Failed to update inventory item"))?;

        Ok(InventoryItem::from(updated))
    }

    async fn delete_item(&self, item_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(internal("Failed to delete inventory item"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::domain::inventory::entities::StorageLocation;

    fn upsert(explicit_expiration: Option<DateTime<Utc>>) -> InventoryUpsert {
        InventoryUpsert {
            user_id: Uuid::new_v4(),
            ingredient_id: Uuid::new_v4(),
            quantity: 2.0,
            unit: "cup".to_string(),
            storage_location: StorageLocation::Pantry,
            explicit_expiration,
            default_expiration: Some(Utc::now() + Duration::days(30)),
        }
    }

    fn sql(upsert: &InventoryUpsert) -> String {
        upsert_statement(upsert, Uuid::new_v4(), Utc::now().fixed_offset())
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn merge_adds_quantity_on_the_location_triple() {
        let sql = sql(&upsert(None));

        assert!(sql.contains(
            r#"ON CONFLICT ("user_id", "ingredient_id", "storage_location") DO UPDATE"#
        ));
        assert!(sql.contains(r#""quantity" = user_inventory.quantity + EXCLUDED.quantity"#));
        assert!(sql.contains(r#""updated_at" = "excluded"."updated_at""#));
        assert!(!sql.contains(r#""unit" = "excluded"."unit""#));
    }

    #[test]
    fn stored_expiration_survives_without_an_explicit_one() {
        let sql = sql(&upsert(None));

        assert!(!sql.contains(r#""expiration_date" = "excluded"."expiration_date""#));
    }

    #[test]
    fn explicit_expiration_overrides_the_stored_one() {
        let sql = sql(&upsert(Some(Utc::now() + Duration::days(3))));

        assert!(sql.contains(r#""expiration_date" = "excluded"."expiration_date""#));
    }
}
