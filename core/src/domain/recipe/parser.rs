use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::GeneratedRecipe};

static RECIPE_ARRAY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").ok());

/// Pull the recipe array out of a model reply.
///
/// Models wrap JSON in prose or code fences, so everything from the first
/// `[` to the last `]` is taken as the payload.
pub fn parse_recipes(raw: &str) -> Result<Vec<GeneratedRecipe>, CoreError> {
    let payload = RECIPE_ARRAY
        .as_ref()
        .and_then(|pattern| pattern.find(raw))
        .ok_or_else(|| {
            tracing::error!("no JSON array found in model response");
            CoreError::ExternalServiceError("No JSON array found in response".to_string())
        })?
        .as_str();

    serde_json::from_str::<Vec<GeneratedRecipe>>(payload).map_err(|e| {
        tracing::error!("failed to parse recipes from model response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse recipes: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_array_pattern_compiles() {
        assert!(RECIPE_ARRAY.is_some());
    }

    #[test]
    fn extracts_array_wrapped_in_prose() {
        let raw = "Here you go!\n```json\n[{\"name\": \"Fried Rice\", \"ingredients\": [{\"name\": \"Rice\"}]}]\n```\nEnjoy.";

        let recipes = parse_recipes(raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Fried Rice");
        assert_eq!(recipes[0].ingredients[0].name, "Rice");
    }

    #[test]
    fn nested_arrays_stay_intact() {
        let raw = r#"[{"name": "A", "equipment": ["pan", "spatula"]}, {"name": "B"}]"#;

        let recipes = parse_recipes(raw).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].equipment, vec!["pan", "spatula"]);
    }

    #[test]
    fn missing_array_is_an_external_failure() {
        let err = parse_recipes("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[test]
    fn malformed_json_is_an_external_failure() {
        let err = parse_recipes("[{\"name\": }]").unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
