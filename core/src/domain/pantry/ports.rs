use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    pantry::entities::{PantryStaple, PantryStapleEntry},
};

#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn list_pantry_staples(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<PantryStapleEntry>, CoreError>> + Send;

    fn toggle_pantry_staple(
        &self,
        identity: Identity,
        ingredient_id: Uuid,
        in_stock: bool,
    ) -> impl Future<Output = Result<PantryStapleEntry, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PantryRepository: Send + Sync {
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryStaple>, CoreError>> + Send;

    /// Insert or update the flag for (user, ingredient).
    fn set_in_stock(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
        in_stock: bool,
    ) -> impl Future<Output = Result<PantryStaple, CoreError>> + Send;
}
