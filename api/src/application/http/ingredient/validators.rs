use hungry_owl_core::domain::ingredient::{
    entities::IngredientCategory,
    value_objects::{CreateCustomIngredientInput, ImportIngredientInput},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchIngredientsQuery {
    /// Name fragment or exact alias; omit to browse.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: IngredientCategory,

    #[serde(default)]
    #[validate(length(max = 16, message = "emoji is too long"))]
    pub emoji: Option<String>,
}

impl From<CreateIngredientValidator> for CreateCustomIngredientInput {
    fn from(payload: CreateIngredientValidator) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            category: payload.category,
            emoji: payload.emoji,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ImportIngredientValidator {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub category: IngredientCategory,

    #[serde(default)]
    pub common_units: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 16, message = "emoji is too long"))]
    pub emoji: Option<String>,

    /// USDA FoodData Central id.
    #[serde(default)]
    #[validate(range(min = 1, message = "fdc_id must be positive"))]
    pub fdc_id: Option<i32>,
}

impl From<ImportIngredientValidator> for ImportIngredientInput {
    fn from(payload: ImportIngredientValidator) -> Self {
        Self {
            name: payload.name,
            category: payload.category,
            common_units: payload.common_units,
            emoji: payload.emoji,
            fdc_id: payload.fdc_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let payload: CreateIngredientValidator =
            serde_json::from_str(r#"{"name":"","category":"PRODUCE"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn category_defaults_when_omitted() {
        let payload: CreateIngredientValidator =
            serde_json::from_str(r#"{"name":"Sumac"}"#).unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.category, IngredientCategory::default());
    }

    #[test]
    fn import_rejects_non_positive_fdc_id() {
        let payload: ImportIngredientValidator =
            serde_json::from_str(r#"{"name":"Kale","category":"PRODUCE","fdc_id":0}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
