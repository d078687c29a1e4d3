use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    inventory::{
        entities::InventoryItem,
        value_objects::{
            AddToInventoryInput, AdjustQuantityInput, InventoryEntry, InventoryUpsert,
            QuantityAdjustment, UpdateInventoryItemInput, UpsertOutcome,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait InventoryService: Send + Sync {
    /// Items ordered by expiration (undated last), then ingredient name.
    fn list_inventory(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<InventoryEntry>, CoreError>> + Send;

    fn add_to_inventory(
        &self,
        identity: Identity,
        input: AddToInventoryInput,
    ) -> impl Future<Output = Result<InventoryEntry, CoreError>> + Send;

    fn update_inventory_item(
        &self,
        identity: Identity,
        input: UpdateInventoryItemInput,
    ) -> impl Future<Output = Result<InventoryEntry, CoreError>> + Send;

    fn adjust_quantity(
        &self,
        identity: Identity,
        input: AdjustQuantityInput,
    ) -> impl Future<Output = Result<QuantityAdjustment, CoreError>> + Send;

    fn remove_from_inventory(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Items that are `USE_SOON` or `EXPIRING` right now.
    fn expiring_items(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<InventoryEntry>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait InventoryRepository: Send + Sync {
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<InventoryItem>, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<InventoryItem>, CoreError>> + Send;

    /// Insert-or-increment as one atomic step for the upsert's triple.
    fn upsert(
        &self,
        upsert: InventoryUpsert,
    ) -> impl Future<Output = Result<UpsertOutcome, CoreError>> + Send;

    /// Atomically apply a signed delta; `None` when the item is not the user's.
    fn apply_quantity_delta(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        delta: f64,
    ) -> impl Future<Output = Result<Option<QuantityAdjustment>, CoreError>> + Send;

    fn update_item(
        &self,
        item: InventoryItem,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    /// Returns false when nothing matched.
    fn delete_item(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
