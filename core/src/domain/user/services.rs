use tracing::instrument;

use crate::domain::{
    authentication::value_objects::{Identity, IdentityClaims},
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientRepository,
    inventory::ports::InventoryRepository,
    pantry::ports::PantryRepository,
    recipe::ports::{LLMClient, RecipeCache, RecipeRepository},
    shopping::ports::ShoppingListRepository,
    user::{
        entities::{User, UserProfile},
        ports::{UserRepository, UserService},
        value_objects::{UpdateProfileInput, UserWithProfile},
    },
};

impl<I, INV, P, U, S, R, LLM, C> UserService for Service<I, INV, P, U, S, R, LLM, C>
where
    I: IngredientRepository,
    INV: InventoryRepository,
    P: PantryRepository,
    U: UserRepository,
    S: ShoppingListRepository,
    R: RecipeRepository,
    LLM: LLMClient,
    C: RecipeCache,
{
    #[instrument(skip(self, claims), fields(external_id = %claims.sub))]
    async fn resolve_identity(&self, claims: IdentityClaims) -> Result<Identity, CoreError> {
        if claims.sub.trim().is_empty() {
            return Err(CoreError::Unauthorized);
        }

        if let Some(user) = self
            .user_repository
            .get_by_external_id(claims.sub.clone())
            .await?
        {
            return Ok(Identity::new(user.id, user.external_id));
        }

        let user = self
            .user_repository
            .create_user(User::from_claims(&claims))
            .await?;
        tracing::info!(user_id = %user.id, "created user for new identity");

        Ok(Identity::new(user.id, user.external_id))
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn get_me(&self, identity: Identity) -> Result<UserWithProfile, CoreError> {
        let user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;
        let profile = self.user_repository.get_profile(identity.id()).await?;

        Ok(UserWithProfile { user, profile })
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<UserProfile, CoreError> {
        if let Some(household_size) = input.household_size
            && household_size < 1
        {
            return Err(CoreError::Invalid(
                "household size must be at least 1".to_string(),
            ));
        }

        let mut profile = self
            .user_repository
            .get_profile(identity.id())
            .await?
            .unwrap_or_else(|| UserProfile::empty(identity.id()));
        profile.update(input);

        self.user_repository.upsert_profile(profile).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn complete_onboarding(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .set_onboarding_complete(identity.id())
            .await
    }
}
