use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    ingredient::entities::Ingredient,
    inventory::entities::{FreshnessStatus, InventoryItem, StorageLocation},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddToInventoryInput {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub expiration_date: Option<DateTime<Utc>>,
    pub storage_location: Option<StorageLocation>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateInventoryItemInput {
    pub item_id: Uuid,
    pub unit: Option<String>,
    /// `Some(None)` clears the expiration.
    pub expiration_date: Option<Option<DateTime<Utc>>>,
}

#[derive(Debug, Clone)]
pub struct AdjustQuantityInput {
    pub item_id: Uuid,
    pub delta: f64,
}

/// A validated merge request keyed on (user, ingredient, storage location).
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryUpsert {
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub storage_location: StorageLocation,
    /// Expiration supplied by the caller; overrides a stored one on merge.
    pub explicit_expiration: Option<DateTime<Utc>>,
    /// Shelf-life based expiration, only used when a new row is created.
    pub default_expiration: Option<DateTime<Utc>>,
}

impl InventoryUpsert {
    pub fn creation_expiration(&self) -> Option<DateTime<Utc>> {
        self.explicit_expiration.or(self.default_expiration)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpsertOutcome {
    pub item: InventoryItem,
    /// True when an existing row absorbed the quantity.
    pub merged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuantityAdjustment {
    Updated { item: InventoryItem },
    Removed { item_id: Uuid },
}

/// An inventory row joined with its ingredient and derived freshness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryEntry {
    pub item: InventoryItem,
    pub ingredient: Ingredient,
    pub status: FreshnessStatus,
}

impl InventoryEntry {
    pub fn new(item: InventoryItem, ingredient: Ingredient, now: DateTime<Utc>) -> Self {
        let status = item.status_at(now);
        Self {
            item,
            ingredient,
            status,
        }
    }
}
