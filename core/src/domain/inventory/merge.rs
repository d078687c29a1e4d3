use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::{
        entities::{InventoryItem, InventoryItemConfig},
        value_objects::InventoryUpsert,
    },
};

pub fn validate_quantity(quantity: f64) -> Result<f64, CoreError> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(quantity)
    } else {
        Err(CoreError::InvalidQuantity)
    }
}

/// `now + shelf_life_days`, or nothing when the ingredient has no shelf life.
pub fn default_expiration(shelf_life_days: Option<i32>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    shelf_life_days.map(|days| now + Duration::days(i64::from(days)))
}

/// Apply an upsert to the row currently stored for its triple.
///
/// Quantities add up. A merge keeps the stored expiration unless the caller
/// supplied one; the shelf-life default only applies to new rows.
pub fn merge_into(
    existing: Option<InventoryItem>,
    upsert: &InventoryUpsert,
    now: DateTime<Utc>,
) -> InventoryItem {
    match existing {
        Some(mut item) => {
            item.quantity += upsert.quantity;
            if let Some(expiration) = upsert.explicit_expiration {
                item.expiration_date = Some(expiration);
            }
            item.updated_at = now;
            item
        }
        None => InventoryItem::new(InventoryItemConfig {
            user_id: upsert.user_id,
            ingredient_id: upsert.ingredient_id,
            quantity: upsert.quantity,
            unit: upsert.unit.clone(),
            storage_location: upsert.storage_location,
            expiration_date: upsert.creation_expiration(),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityChange {
    Set(f64),
    Remove,
}

/// The row goes away once the quantity would drop to zero or below.
pub fn apply_delta(current: f64, delta: f64) -> QuantityChange {
    let next = current + delta;
    if next <= 0.0 {
        QuantityChange::Remove
    } else {
        QuantityChange::Set(next)
    }
}
