use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientRepository,
    inventory::ports::InventoryRepository,
    matching::{
        availability::AvailabilityIndex,
        ports::RecommendationService,
        recommendations::{Recommendations, recommend},
    },
    pantry::ports::PantryRepository,
    recipe::ports::{LLMClient, RecipeCache, RecipeRepository},
    shopping::ports::ShoppingListRepository,
    user::ports::UserRepository,
};

impl<I, INV, P, U, S, R, LLM, C> Service<I, INV, P, U, S, R, LLM, C>
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
    pub(crate) async fn availability_index(
        &self,
        user_id: Uuid,
    ) -> Result<AvailabilityIndex, CoreError> {
        let inventory = self.inventory_entries(user_id).await?;
        let staples = self.pantry_entries(user_id).await?;

        Ok(AvailabilityIndex::build(&inventory, &staples))
    }
}

impl<I, INV, P, U, S, R, LLM, C> RecommendationService for Service<I, INV, P, U, S, R, LLM, C>
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
    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn recommended_ingredients(
        &self,
        identity: Identity,
    ) -> Result<Recommendations, CoreError> {
        let availability = self.availability_index(identity.id()).await?;
        let skill_level = self
            .user_repository
            .get_profile(identity.id())
            .await?
            .map(|profile| profile.skill_level)
            .unwrap_or_default();

        Ok(recommend(
            &self.settings.staples_catalog,
            &availability,
            skill_level,
        ))
    }
}
