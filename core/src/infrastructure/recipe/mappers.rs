use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::entities::{Difficulty, GeneratedRecipe, MealType, Recipe, SavedRecipe},
    },
    entity::{recipes, saved_recipes},
};

fn decode<T: DeserializeOwned>(value: JsonValue, field: &str) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(|e| {
        error!("Failed to decode recipe {}: {}", field, e);
        CoreError::InternalServerError
    })
}

pub fn encode<T: serde::Serialize>(value: &T, field: &str) -> Result<JsonValue, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to encode recipe {}: {}", field, e);
        CoreError::InternalServerError
    })
}

impl TryFrom<recipes::Model> for Recipe {
    type Error = CoreError;

    fn try_from(model: recipes::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            content: GeneratedRecipe {
                name: model.name,
                description: model.description,
                hero_emoji: model.hero_emoji,
                ingredients: decode(model.ingredients, "ingredients")?,
                steps: decode(model.steps, "steps")?,
                total_time: model.total_time,
                active_time: model.active_time,
                difficulty: Difficulty::from(model.difficulty.as_str()),
                cuisine_type: model.cuisine_type,
                meal_type: MealType::from(model.meal_type.as_str()),
                is_one_pot: model.is_one_pot,
                is_vegetarian: model.is_vegetarian,
                is_vegan: model.is_vegan,
                equipment: model.equipment,
                nutrition: decode(model.nutrition, "nutrition")?,
                servings: model.servings,
                match_percentage: None,
                missing_ingredients: None,
            },
            created_at: model.created_at.to_utc(),
        })
    }
}

impl TryFrom<(saved_recipes::Model, recipes::Model)> for SavedRecipe {
    type Error = CoreError;

    fn try_from((saved, recipe): (saved_recipes::Model, recipes::Model)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: saved.id,
            user_id: saved.user_id,
            saved_at: saved.saved_at.to_utc(),
            recipe: Recipe::try_from(recipe)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn maps_stored_recipe_without_match_annotations() {
        let model = recipes::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Shakshuka".to_string(),
            description: "Eggs poached in tomato".to_string(),
            hero_emoji: "🍳".to_string(),
            ingredients: serde_json::json!([
                { "name": "eggs", "quantity": 4, "unit": "piece" },
                { "name": "feta", "quantity": 50, "unit": "g", "optional": true }
            ]),
            steps: serde_json::json!([{ "stepNumber": 1, "instruction": "Simmer the sauce" }]),
            total_time: 25,
            active_time: 10,
            difficulty: "INTERMEDIATE".to_string(),
            cuisine_type: "Middle Eastern".to_string(),
            meal_type: "BREAKFAST".to_string(),
            is_one_pot: true,
            is_vegetarian: true,
            is_vegan: false,
            equipment: vec!["skillet".to_string()],
            nutrition: serde_json::json!({ "calories": 320.0 }),
            servings: 2,
            created_at: Utc::now().fixed_offset(),
        };

        let recipe = Recipe::try_from(model).unwrap();

        assert_eq!(recipe.content.ingredients.len(), 2);
        assert!(recipe.content.ingredients[1].optional);
        assert_eq!(recipe.content.steps[0].step_number, 1);
        assert_eq!(recipe.content.difficulty, Difficulty::Intermediate);
        assert_eq!(recipe.content.meal_type, MealType::Breakfast);
        assert_eq!(recipe.content.nutrition.calories, Some(320.0));
        assert!(recipe.content.match_percentage.is_none());
    }
}
