use serde_json::Value as JsonValue;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        shopping::entities::{ShoppingItem, ShoppingList},
    },
    entity::shopping_lists,
};

impl TryFrom<shopping_lists::Model> for ShoppingList {
    type Error = CoreError;

    fn try_from(model: shopping_lists::Model) -> Result<Self, Self::Error> {
        let items: Vec<ShoppingItem> = serde_json::from_value(model.items).map_err(|e| {
            error!("Failed to decode items of shopping list {}: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            items,
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

pub fn items_to_json(items: &[ShoppingItem]) -> Result<JsonValue, CoreError> {
    serde_json::to_value(items).map_err(|e| {
        error!("Failed to encode shopping items: {}", e);
        CoreError::InternalServerError
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn model(items: JsonValue) -> shopping_lists::Model {
        let now = Utc::now().fixed_offset();
        shopping_lists::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Weekly".to_string(),
            items,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn decodes_items_with_missing_optional_fields() {
        let item_id = Uuid::new_v4();
        let list = ShoppingList::try_from(model(serde_json::json!([
            { "id": item_id, "name": "Milk", "quantity": 1.0, "unit": "gallon" }
        ])))
        .unwrap();

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, item_id);
        assert!(!list.items[0].checked);
        assert!(list.items[0].ingredient_id.is_none());
    }

    #[test]
    fn rejects_malformed_items() {
        let result = ShoppingList::try_from(model(serde_json::json!({ "not": "a list" })));
        assert_eq!(result.unwrap_err(), CoreError::InternalServerError);
    }
}
