use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::PantryStaple, ports::PantryRepository},
    },
    entity::pantry_staples::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresPantryRepository {
    pub db: DatabaseConnection,
}

impl PostgresPantryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PantryRepository for PostgresPantryRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PantryStaple>, CoreError> {
        let staples = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list pantry staples: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(PantryStaple::from)
            .collect();

        Ok(staples)
    }

    async fn set_in_stock(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
        in_stock: bool,
    ) -> Result<PantryStaple, CoreError> {
        let staple = PantryStaple::new(user_id, ingredient_id, in_stock);

        let stored = Entity::insert(ActiveModel {
            id: Set(staple.id),
            user_id: Set(staple.user_id),
            ingredient_id: Set(staple.ingredient_id),
            in_stock: Set(staple.in_stock),
            updated_at: Set(staple.updated_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::columns([Column::UserId, Column::IngredientId])
                .update_columns([Column::InStock, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to upsert pantry staple: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(PantryStaple::from(stored))
    }
}
