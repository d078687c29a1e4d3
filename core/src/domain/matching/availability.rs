use std::collections::BTreeSet;

use crate::domain::{
    inventory::value_objects::InventoryEntry, matching::names_overlap,
    pantry::entities::PantryStapleEntry,
};

/// Lower-cased names of everything a user currently has.
///
/// Built fresh for each scoring or recommendation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    names: BTreeSet<String>,
}

impl AvailabilityIndex {
    /// Inventory ingredients plus the pantry staples marked in stock.
    pub fn build(inventory: &[InventoryEntry], staples: &[PantryStapleEntry]) -> Self {
        let inventory_names = inventory.iter().map(|entry| entry.ingredient.name.as_str());
        let staple_names = staples
            .iter()
            .filter(|entry| entry.staple.in_stock)
            .map(|entry| entry.ingredient.name.as_str());

        Self::from_names(inventory_names.chain(staple_names))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().to_lowercase())
            // An empty name would be contained in every ingredient name.
            .filter(|name| !name.trim().is_empty())
            .collect();

        Self { names }
    }

    /// True when some available name overlaps `wanted` (already lower-cased).
    pub fn covers(&self, wanted: &str) -> bool {
        self.names.iter().any(|available| names_overlap(available, wanted))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        ingredient::entities::{Ingredient, IngredientCategory, IngredientConfig},
        inventory::entities::{InventoryItem, InventoryItemConfig, StorageLocation},
        pantry::entities::PantryStaple,
    };

    fn ingredient(name: &str) -> Ingredient {
        Ingredient::new(IngredientConfig {
            name: name.to_string(),
            category: IngredientCategory::Other,
            aliases: Vec::new(),
            common_units: Vec::new(),
            emoji: None,
            shelf_life_days: None,
            usda_fdc_id: None,
            description: None,
        })
    }

    fn entry(name: &str) -> InventoryEntry {
        let ingredient = ingredient(name);
        let item = InventoryItem::new(InventoryItemConfig {
            user_id: Uuid::nil(),
            ingredient_id: ingredient.id,
            quantity: 1.0,
            unit: "piece".to_string(),
            storage_location: StorageLocation::Fridge,
            expiration_date: None,
        });
        InventoryEntry::new(item, ingredient, Utc::now())
    }

    fn staple(name: &str, in_stock: bool) -> PantryStapleEntry {
        let ingredient = ingredient(name);
        PantryStapleEntry {
            staple: PantryStaple::new(Uuid::nil(), ingredient.id, in_stock),
            ingredient,
        }
    }

    #[test]
    fn unions_inventory_and_in_stock_staples() {
        let index = AvailabilityIndex::build(
            &[entry("Chicken Breast"), entry("Rice")],
            &[staple("Salt", true), staple("Olive Oil", false)],
        );

        let names: Vec<&str> = index.iter().collect();
        assert_eq!(names, vec!["chicken breast", "rice", "salt"]);
        assert!(!index.contains("olive oil"));
    }

    #[test]
    fn deduplicates_case_variants() {
        let index = AvailabilityIndex::from_names(["Rice", "rice", "RICE"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn only_case_folds() {
        let index = AvailabilityIndex::from_names(["Tomatoes"]);
        assert!(index.contains("tomatoes"));
        assert!(!index.contains("tomato"));
        // Containment still lets the singular form match.
        assert!(index.covers("tomato"));
    }

    #[test]
    fn blank_names_are_dropped() {
        let index = AvailabilityIndex::from_names(["", "  "]);
        assert!(index.is_empty());
        assert!(!index.covers("anything"));
    }
}
