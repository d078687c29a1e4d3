use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    shopping::{
        entities::ShoppingList,
        value_objects::{NewShoppingItem, PurchaseOutcome},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListService: Send + Sync {
    fn list_shopping_lists(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn active_shopping_list(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    /// The new list becomes the only active one.
    fn create_shopping_list(
        &self,
        identity: Identity,
        name: Option<String>,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn add_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item: NewShoppingItem,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn toggle_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn remove_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn clear_checked(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    /// Move the item into the fridge inventory and check it off.
    fn mark_purchased(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<PurchaseOutcome, CoreError>> + Send;

    fn export_text(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListRepository: Send + Sync {
    /// Newest first.
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn get_active(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    fn get_by_id(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    /// Deactivate the user's other lists and insert this one.
    fn create_active(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn save_items(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;
}
