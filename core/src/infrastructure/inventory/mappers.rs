use crate::{
    domain::inventory::entities::{InventoryItem, StorageLocation},
    entity::user_inventory,
};

impl From<&user_inventory::Model> for InventoryItem {
    fn from(model: &user_inventory::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            ingredient_id: model.ingredient_id,
            quantity: model.quantity,
            unit: model.unit.clone(),
            storage_location: StorageLocation::from(model.storage_location.as_str()),
            expiration_date: model.expiration_date.map(|date| date.to_utc()),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<user_inventory::Model> for InventoryItem {
    fn from(model: user_inventory::Model) -> Self {
        Self::from(&model)
    }
}
