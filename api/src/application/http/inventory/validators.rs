use chrono::{DateTime, Utc};
use hungry_owl_core::domain::inventory::{
    entities::StorageLocation, value_objects::AddToInventoryInput,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Present-but-null becomes `Some(None)`; a missing field stays `None`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("must be a finite number".into()))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToInventoryValidator {
    pub ingredient_id: Uuid,

    #[validate(range(exclusive_min = 0.0, message = "quantity must be positive"))]
    pub quantity: f64,

    #[validate(length(min = 1, max = 32, message = "unit is required"))]
    pub unit: String,

    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,

    /// Defaults to `FRIDGE`.
    #[serde(default)]
    pub storage_location: Option<StorageLocation>,
}

impl From<AddToInventoryValidator> for AddToInventoryInput {
    fn from(payload: AddToInventoryValidator) -> Self {
        Self {
            ingredient_id: payload.ingredient_id,
            quantity: payload.quantity,
            unit: payload.unit,
            expiration_date: payload.expiration_date,
            storage_location: payload.storage_location,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryItemValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 32, message = "unit must not be empty"))]
    pub unit: Option<String>,

    /// Send `null` to clear the expiration date.
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub expiration_date: Option<Option<DateTime<Utc>>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdjustQuantityValidator {
    /// Signed change; the item is removed once its quantity reaches zero.
    #[validate(custom(function = "finite"))]
    pub delta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        let payload: AddToInventoryValidator = serde_json::from_value(serde_json::json!({
            "ingredient_id": Uuid::new_v4(),
            "quantity": 0.0,
            "unit": "piece",
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn add_defaults_optional_fields() {
        let payload: AddToInventoryValidator = serde_json::from_value(serde_json::json!({
            "ingredient_id": Uuid::new_v4(),
            "quantity": 2.5,
            "unit": "lb",
        }))
        .unwrap();
        assert!(payload.validate().is_ok());

        let input = AddToInventoryInput::from(payload);
        assert!(input.storage_location.is_none());
        assert!(input.expiration_date.is_none());
    }

    #[test]
    fn update_distinguishes_null_from_missing_expiration() {
        let missing: UpdateInventoryItemValidator = serde_json::from_str(r#"{"unit":"oz"}"#).unwrap();
        assert_eq!(missing.expiration_date, None);

        let cleared: UpdateInventoryItemValidator =
            serde_json::from_str(r#"{"expiration_date":null}"#).unwrap();
        assert_eq!(cleared.expiration_date, Some(None));

        let set: UpdateInventoryItemValidator =
            serde_json::from_str(r#"{"expiration_date":"2026-10-20T00:00:00Z"}"#).unwrap();
        assert!(matches!(set.expiration_date, Some(Some(_))));
    }

    #[test]
    fn update_rejects_empty_unit() {
        let payload = UpdateInventoryItemValidator {
            unit: Some(String::new()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
