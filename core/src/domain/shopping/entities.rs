use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
    ingredient::entities::IngredientCategory,
    shopping::value_objects::NewShoppingItem,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub category: IngredientCategory,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<Uuid>,
    /// Set when the item was picked from the ingredient catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// A named list; at most one list per user is active.
///
/// Items live inside the list row, so every item operation rewrites the
/// whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub items: Vec<ShoppingItem>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(user_id: Uuid, name: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            user_id,
            name,
            items: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        let (now, _) = generate_timestamp();
        self.updated_at = now;
    }

    pub fn item(&self, item_id: Uuid) -> Result<&ShoppingItem, CoreError> {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or(CoreError::NotFound)
    }

    pub fn add_item(&mut self, input: NewShoppingItem) -> Result<&ShoppingItem, CoreError> {
        if !(input.quantity.is_finite() && input.quantity > 0.0) {
            return Err(CoreError::InvalidQuantity);
        }

        self.items.push(ShoppingItem {
            id: generate_uuid_v7(),
            name: input.name,
            quantity: input.quantity,
            unit: input.unit,
            category: input.category,
            checked: false,
            recipe_id: input.recipe_id,
            ingredient_id: input.ingredient_id,
            emoji: input.emoji,
        });
        self.touch();

        self.items.last().ok_or(CoreError::InternalServerError)
    }

    pub fn toggle_item(&mut self, item_id: Uuid) -> Result<(), CoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(CoreError::NotFound)?;
        item.checked = !item.checked;
        self.touch();
        Ok(())
    }

    pub fn check_item(&mut self, item_id: Uuid) -> Result<(), CoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(CoreError::NotFound)?;
        item.checked = true;
        self.touch();
        Ok(())
    }

    pub fn remove_item(&mut self, item_id: Uuid) -> Result<(), CoreError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        if self.items.len() == before {
            return Err(CoreError::NotFound);
        }
        self.touch();
        Ok(())
    }

    /// Returns how many items were dropped.
    pub fn clear_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        self.touch();
        before - self.items.len()
    }

    /// Unchecked items, one `- {qty} {unit} {name}` line each.
    pub fn export_text(&self) -> String {
        self.items
            .iter()
            .filter(|item| !item.checked)
            .map(|item| format!("- {} {} {}", item.quantity, item.unit, item.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
