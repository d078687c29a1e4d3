use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    ingredient::entities::IngredientCategory,
    inventory::value_objects::InventoryEntry,
    shopping::entities::ShoppingList,
};

pub const DEFAULT_LIST_NAME: &str = "Shopping List";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: IngredientCategory,
    pub recipe_id: Option<Uuid>,
    pub ingredient_id: Option<Uuid>,
    pub emoji: Option<String>,
}

/// The list after the purchase plus the inventory row that received it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseOutcome {
    pub list: ShoppingList,
    pub inventory: InventoryEntry,
}
