use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::{Identity, IdentityClaims},
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserProfile},
        value_objects::{UpdateProfileInput, UserWithProfile},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    /// Get or create the local user behind a verified token.
    fn resolve_identity(
        &self,
        claims: IdentityClaims,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;

    fn get_me(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<UserWithProfile, CoreError>> + Send;

    fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn complete_onboarding(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_external_id(
        &self,
        external_id: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Insert the user, or return the row already stored for its external id.
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn set_onboarding_complete(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn upsert_profile(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
