use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{entities::Ingredient, ports::IngredientRepository},
    },
    entity::ingredients::{ActiveModel, Column, Entity},
};

/// `%query%` with LIKE wildcards in the query escaped.
fn contains_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn search(&self, query: Option<String>, limit: u64) -> Result<Vec<Ingredient>, CoreError> {
        let mut select = Entity::find();

        if let Some(query) = query {
            let query = query.to_lowercase();
            select = select.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(Column::Name))).like(contains_pattern(&query)))
                    .add(Expr::cust_with_values("$1 = ANY(aliases)", [query])),
            );
        }

        let ingredients = select
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect();

        Ok(ingredients)
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredient.map(Ingredient::from))
    }

    async fn get_by_ids(&self, ingredient_ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ingredients = Entity::find()
            .filter(Column::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredients by ids: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect();

        Ok(ingredients)
    }

    async fn find_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.trim().to_lowercase()))
            .order_by_asc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find ingredient by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredient.map(Ingredient::from))
    }

    async fn find_by_fdc_id(&self, fdc_id: i32) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find()
            .filter(Column::UsdaFdcId.eq(fdc_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find ingredient by fdc id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredient.map(Ingredient::from))
    }

    async fn create(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let active_model = ActiveModel {
            id: Set(ingredient.id),
            name: Set(ingredient.name),
            category: Set(ingredient.category.as_str().to_string()),
            aliases: Set(ingredient.aliases),
            common_units: Set(ingredient.common_units),
            emoji: Set(ingredient.emoji),
            shelf_life_days: Set(ingredient.shelf_life_days),
            usda_fdc_id: Set(ingredient.usda_fdc_id),
            description: Set(ingredient.description),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(created))
    }
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(contains_pattern("rice"), "%rice%");
        assert_eq!(contains_pattern("100%_juice"), "%100\\%\\_juice%");
    }
}
