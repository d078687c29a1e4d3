use hungry_owl_core::domain::recipe::{
    entities::{GeneratedRecipe, MealType},
    value_objects::GenerateRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn default_max_time() -> i32 {
    GenerateRecipesInput::default().max_time
}

fn named(recipe: &GeneratedRecipe) -> Result<(), ValidationError> {
    if recipe.name.trim().is_empty() {
        return Err(ValidationError::new("name").with_message("recipe name is required".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipesValidator {
    /// Minutes.
    #[serde(default = "default_max_time")]
    #[validate(range(min = 1, max = 480, message = "max_time must be between 1 and 480"))]
    pub max_time: i32,

    #[serde(default)]
    pub prioritize_expiring: bool,

    #[serde(default)]
    pub one_pot_only: bool,

    #[serde(default)]
    pub willing_to_shop: bool,

    #[serde(default)]
    pub meal_type: Option<MealType>,

    #[serde(default)]
    #[validate(length(max = 50, message = "cuisine_type is too long"))]
    pub cuisine_type: Option<String>,
}

impl From<GenerateRecipesValidator> for GenerateRecipesInput {
    fn from(payload: GenerateRecipesValidator) -> Self {
        Self {
            max_time: payload.max_time,
            prioritize_expiring: payload.prioritize_expiring,
            one_pot_only: payload.one_pot_only,
            willing_to_shop: payload.willing_to_shop,
            meal_type: payload.meal_type,
            cuisine_type: payload
                .cuisine_type
                .filter(|cuisine| !cuisine.trim().is_empty()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRecipeValidator {
    #[validate(custom(function = "named"))]
    pub recipe: GeneratedRecipe,
}
