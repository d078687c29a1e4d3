use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{Recipe, SavedRecipe},
            ports::RecipeRepository,
        },
    },
    entity::{recipes, saved_recipes},
    infrastructure::recipe::mappers::encode,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn save_for_user(&self, recipe: Recipe) -> Result<SavedRecipe, CoreError> {
        let saved = SavedRecipe::new(recipe);
        let content = &saved.recipe.content;

        let recipe_model = recipes::ActiveModel {
            id: Set(saved.recipe.id),
            user_id: Set(saved.recipe.user_id),
            name: Set(content.name.clone()),
            description: Set(content.description.clone()),
            hero_emoji: Set(content.hero_emoji.clone()),
            ingredients: Set(encode(&content.ingredients, "ingredients")?),
            steps: Set(encode(&content.steps, "steps")?),
            total_time: Set(content.total_time),
            active_time: Set(content.active_time),
            difficulty: Set(content.difficulty.as_str().to_string()),
            cuisine_type: Set(content.cuisine_type.clone()),
            meal_type: Set(content.meal_type.as_str().to_string()),
            is_one_pot: Set(content.is_one_pot),
            is_vegetarian: Set(content.is_vegetarian),
            is_vegan: Set(content.is_vegan),
            equipment: Set(content.equipment.clone()),
            nutrition: Set(encode(&content.nutrition, "nutrition")?),
            servings: Set(content.servings),
            created_at: Set(saved.recipe.created_at.fixed_offset()),
        };

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let stored_recipe = recipes::Entity::insert(recipe_model)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to insert recipe: {}", e);
                CoreError::InternalServerError
            })?;

        let stored_link = saved_recipes::Entity::insert(saved_recipes::ActiveModel {
            id: Set(saved.id),
            user_id: Set(saved.user_id),
            recipe_id: Set(stored_recipe.id),
            saved_at: Set(saved.saved_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(|e| {
            error!("Failed to insert saved recipe: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit saved recipe: {}", e);
            CoreError::InternalServerError
        })?;

        SavedRecipe::try_from((stored_link, stored_recipe))
    }

    async fn list_saved(&self, user_id: Uuid) -> Result<Vec<SavedRecipe>, CoreError> {
        let rows = saved_recipes::Entity::find()
            .find_also_related(recipes::Entity)
            .filter(saved_recipes::Column::UserId.eq(user_id))
            .order_by_desc(saved_recipes::Column::SavedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list saved recipes: {}", e);
                CoreError::InternalServerError
            })?;

        rows.into_iter()
            .filter_map(|(saved, recipe)| {
                if recipe.is_none() {
                    error!("Saved recipe {} has no recipe row", saved.id);
                }
                recipe.map(|recipe| SavedRecipe::try_from((saved, recipe)))
            })
            .collect()
    }

    async fn delete_saved(&self, user_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let unlinked = saved_recipes::Entity::delete_many()
            .filter(saved_recipes::Column::UserId.eq(user_id))
            .filter(saved_recipes::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete saved recipe: {}", e);
                CoreError::InternalServerError
            })?;

        if unlinked.rows_affected == 0 {
            return Ok(false);
        }

        recipes::Entity::delete_many()
            .filter(recipes::Column::Id.eq(recipe_id))
            .filter(recipes::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit recipe deletion: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(true)
    }

    async fn recent_recipe_names(&self, user_id: Uuid, limit: u64) -> Result<Vec<String>, CoreError> {
        recipes::Entity::find()
            .select_only()
            .column(recipes::Column::Name)
            .filter(recipes::Column::UserId.eq(user_id))
            .order_by_desc(recipes::Column::CreatedAt)
            .limit(limit)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recent recipe names: {}", e);
                CoreError::InternalServerError
            })
    }
}
