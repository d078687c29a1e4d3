use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        shopping::{entities::ShoppingList, ports::ShoppingListRepository},
    },
    entity::shopping_lists::{ActiveModel, Column, Entity},
    infrastructure::shopping::mappers::items_to_json,
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingListRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ShoppingListRepository for PostgresShoppingListRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ShoppingList>, CoreError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list shopping lists: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(ShoppingList::try_from)
            .collect()
    }

    async fn get_active(&self, user_id: Uuid) -> Result<Option<ShoppingList>, CoreError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get active shopping list: {}", e);
                CoreError::InternalServerError
            })?
            .map(ShoppingList::try_from)
            .transpose()
    }

    async fn get_by_id(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ShoppingList>, CoreError> {
        Entity::find_by_id(list_id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list: {}", e);
                CoreError::InternalServerError
            })?
            .map(ShoppingList::try_from)
            .transpose()
    }

    async fn create_active(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let items = items_to_json(&list.items)?;

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::UserId.eq(list.user_id))
            .filter(Column::IsActive.eq(true))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to deactivate shopping lists: {}", e);
                CoreError::InternalServerError
            })?;

        let stored = Entity::insert(ActiveModel {
            id: Set(list.id),
            user_id: Set(list.user_id),
            name: Set(list.name),
            items: Set(items),
            is_active: Set(true),
            created_at: Set(list.created_at.fixed_offset()),
            updated_at: Set(list.updated_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(|e| {
            error!("Failed to insert shopping list: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit shopping list creation: {}", e);
            CoreError::InternalServerError
        })?;

        ShoppingList::try_from(stored)
    }

    async fn save_items(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let items = items_to_json(&list.items)?;

        let updated = Entity::update_many()
            .col_expr(Column::Items, Expr::value(items))
            .col_expr(Column::UpdatedAt, Expr::value(list.updated_at.fixed_offset()))
            .filter(Column::Id.eq(list.id))
            .filter(Column::UserId.eq(list.user_id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save shopping list items: {}", e);
                CoreError::InternalServerError
            })?;

        updated
            .into_iter()
            .next()
            .ok_or(CoreError::NotFound)
            .and_then(ShoppingList::try_from)
    }
}
