use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    inventory::freshness::classify,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageLocation {
    #[default]
    Fridge,
    Freezer,
    Pantry,
}

impl StorageLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageLocation::Fridge => "FRIDGE",
            StorageLocation::Freezer => "FREEZER",
            StorageLocation::Pantry => "PANTRY",
        }
    }
}

impl From<&str> for StorageLocation {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "FREEZER" => StorageLocation::Freezer,
            "PANTRY" => StorageLocation::Pantry,
            _ => StorageLocation::Fridge,
        }
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreshnessStatus {
    Fresh,
    UseSoon,
    Expiring,
    Expired,
}

impl FreshnessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "FRESH",
            FreshnessStatus::UseSoon => "USE_SOON",
            FreshnessStatus::Expiring => "EXPIRING",
            FreshnessStatus::Expired => "EXPIRED",
        }
    }

    /// Items worth cooking with first.
    pub fn needs_attention(&self) -> bool {
        matches!(self, FreshnessStatus::UseSoon | FreshnessStatus::Expiring)
    }
}

/// One row per (user, ingredient, storage location).
///
/// Freshness is not stored: it is derived from `expiration_date` whenever
/// the item is read, see [`InventoryItem::status_at`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub storage_location: StorageLocation,
    pub expiration_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct InventoryItemConfig {
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub storage_location: StorageLocation,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn new(config: InventoryItemConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            user_id: config.user_id,
            ingredient_id: config.ingredient_id,
            quantity: config.quantity,
            unit: config.unit,
            storage_location: config.storage_location,
            expiration_date: config.expiration_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> FreshnessStatus {
        classify(self.expiration_date, now)
    }

    pub fn update(&mut self, unit: Option<String>, expiration_date: Option<Option<DateTime<Utc>>>) {
        let (now, _) = generate_timestamp();

        if let Some(unit) = unit {
            self.unit = unit;
        }
        if let Some(expiration_date) = expiration_date {
            self.expiration_date = expiration_date;
        }
        self.updated_at = now;
    }
}
