use hungry_owl_core::domain::{
    ingredient::entities::IngredientCategory, shopping::value_objects::NewShoppingItem,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateShoppingListValidator {
    /// Defaults to "Shopping List".
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddShoppingItemValidator {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "quantity must be positive"))]
    pub quantity: f64,

    #[validate(length(min = 1, max = 32, message = "unit is required"))]
    pub unit: String,

    #[serde(default)]
    pub category: IngredientCategory,

    #[serde(default)]
    pub recipe_id: Option<Uuid>,

    /// Catalog ingredient the item was picked from.
    #[serde(default)]
    pub ingredient_id: Option<Uuid>,

    #[serde(default)]
    pub emoji: Option<String>,
}

impl From<AddShoppingItemValidator> for NewShoppingItem {
    fn from(payload: AddShoppingItemValidator) -> Self {
        Self {
            name: payload.name.trim().to_string(),
            quantity: payload.quantity,
            unit: payload.unit,
            category: payload.category,
            recipe_id: payload.recipe_id,
            ingredient_id: payload.ingredient_id,
            emoji: payload.emoji,
        }
    }
}
