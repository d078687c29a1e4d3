use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    inventory::value_objects::InventoryEntry, pantry::entities::PantryStapleEntry,
    recipe::entities::MealType,
};

/// Number of saved recipe names passed along so suggestions do not repeat.
pub const RECENT_RECIPES_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesInput {
    /// Minutes; must be positive.
    pub max_time: i32,
    pub prioritize_expiring: bool,
    pub one_pot_only: bool,
    pub willing_to_shop: bool,
    pub meal_type: Option<MealType>,
    pub cuisine_type: Option<String>,
}

impl Default for GenerateRecipesInput {
    fn default() -> Self {
        Self {
            max_time: 30,
            prioritize_expiring: false,
            one_pot_only: false,
            willing_to_shop: false,
            meal_type: None,
            cuisine_type: None,
        }
    }
}

/// Hex prefix of a SHA-256 over the sorted `name:quantity:unit` inventory
/// lines and the sorted names of in-stock staples.
///
/// Any change to what the user holds produces a different digest.
pub fn inventory_digest(inventory: &[InventoryEntry], staples: &[PantryStapleEntry]) -> String {
    let mut lines: Vec<String> = inventory
        .iter()
        .map(|entry| {
            format!(
                "{}:{}:{}",
                entry.ingredient.name.to_lowercase(),
                entry.item.quantity,
                entry.item.unit
            )
        })
        .collect();
    lines.sort();

    let mut stocked: Vec<String> = staples
        .iter()
        .filter(|entry| entry.staple.in_stock)
        .map(|entry| entry.ingredient.name.to_lowercase())
        .collect();
    stocked.sort();

    let mut hasher = Sha256::new();
    hasher.update(lines.join("\n").as_bytes());
    hasher.update(b"\0");
    hasher.update(stocked.join("\n").as_bytes());
    let hash = hasher.finalize();
    hex::encode(&hash[..8])
}

pub fn recipes_cache_key(user_id: Uuid, input: &GenerateRecipesInput, digest: &str) -> String {
    format!(
        "recipes:{}:{}:{}:{}:{}:{}:{}:{}",
        user_id,
        input.max_time,
        input.one_pot_only,
        input.willing_to_shop,
        input.meal_type.map(|m| m.as_str()).unwrap_or("any"),
        input
            .cuisine_type
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "any".to_string()),
        input.prioritize_expiring,
        digest
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        ingredient::entities::{Ingredient, IngredientCategory, IngredientConfig},
        inventory::entities::{InventoryItem, InventoryItemConfig, StorageLocation},
        pantry::entities::PantryStaple,
    };

    fn entry(name: &str, quantity: f64) -> InventoryEntry {
        let ingredient = Ingredient::new(IngredientConfig {
            name: name.to_string(),
            category: IngredientCategory::Other,
            aliases: Vec::new(),
            common_units: Vec::new(),
            emoji: None,
            shelf_life_days: None,
            usda_fdc_id: None,
            description: None,
        });
        let item = InventoryItem::new(InventoryItemConfig {
            user_id: Uuid::nil(),
            ingredient_id: ingredient.id,
            quantity,
            unit: "piece".to_string(),
            storage_location: StorageLocation::Fridge,
            expiration_date: None,
        });
        InventoryEntry::new(item, ingredient, Utc::now())
    }

    fn staple(name: &str, in_stock: bool) -> PantryStapleEntry {
        let ingredient = entry(name, 1.0).ingredient;
        PantryStapleEntry {
            staple: PantryStaple::new(Uuid::nil(), ingredient.id, in_stock),
            ingredient,
        }
    }

    #[test]
    fn digest_follows_in_stock_staples() {
        let inventory = [entry("Rice", 1.0)];
        let stocked = inventory_digest(&inventory, &[staple("Salt", true)]);
        let out_of_stock = inventory_digest(&inventory, &[staple("Salt", false)]);

        assert_ne!(stocked, out_of_stock);
        assert_eq!(out_of_stock, inventory_digest(&inventory, &[]));
        assert_eq!(
            inventory_digest(&inventory, &[staple("Salt", true), staple("Cumin", true)]),
            inventory_digest(&inventory, &[staple("cumin", true), staple("SALT", true)])
        );
    }

    #[test]
    fn digest_ignores_order_but_not_quantities() {
        let a = inventory_digest(&[entry("Rice", 1.0), entry("Egg", 6.0)], &[]);
        let b = inventory_digest(&[entry("Egg", 6.0), entry("Rice", 1.0)], &[]);
        let c = inventory_digest(&[entry("Egg", 5.0), entry("Rice", 1.0)], &[]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn cache_key_covers_every_option() {
        let input = GenerateRecipesInput {
            max_time: 45,
            prioritize_expiring: true,
            one_pot_only: true,
            willing_to_shop: false,
            meal_type: Some(MealType::Breakfast),
            cuisine_type: Some("Thai".to_string()),
        };

        let key = recipes_cache_key(Uuid::nil(), &input, "abcd");
        assert_eq!(
            key,
            "recipes:00000000-0000-0000-0000-000000000000:45:true:false:BREAKFAST:thai:true:abcd"
        );

        let other = recipes_cache_key(
            Uuid::nil(),
            &GenerateRecipesInput {
                cuisine_type: None,
                ..input
            },
            "abcd",
        );
        assert!(other.ends_with(":BREAKFAST:any:true:abcd"));
    }
}
