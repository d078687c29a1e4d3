use std::collections::HashMap;

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{entities::Ingredient, ports::IngredientRepository},
    inventory::ports::InventoryRepository,
    pantry::{
        entities::PantryStapleEntry,
        ports::{PantryRepository, PantryService},
    },
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
    /// Staples joined with their ingredients, ordered by ingredient name.
    pub(crate) async fn pantry_entries(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PantryStapleEntry>, CoreError> {
        let staples = self.pantry_repository.list_by_user(user_id).await?;
        let ids: Vec<Uuid> = staples.iter().map(|staple| staple.ingredient_id).collect();

        let ingredients: HashMap<Uuid, Ingredient> = self
            .ingredient_repository
            .get_by_ids(ids)
            .await?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();

        let mut entries: Vec<PantryStapleEntry> = staples
            .into_iter()
            .filter_map(|staple| {
                ingredients
                    .get(&staple.ingredient_id)
                    .cloned()
                    .map(|ingredient| PantryStapleEntry { staple, ingredient })
            })
            .collect();
        entries.sort_by(|a, b| a.ingredient.name.cmp(&b.ingredient.name));

        Ok(entries)
    }
}

impl<I, INV, P, U, S, R, LLM, C> PantryService for Service<I, INV, P, U, S, R, LLM, C>
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
    async fn list_pantry_staples(
        &self,
        identity: Identity,
    ) -> Result<Vec<PantryStapleEntry>, CoreError> {
        self.pantry_entries(identity.id()).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn toggle_pantry_staple(
        &self,
        identity: Identity,
        ingredient_id: Uuid,
        in_stock: bool,
    ) -> Result<PantryStapleEntry, CoreError> {
        let ingredient = self
            .ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let staple = self
            .pantry_repository
            .set_in_stock(identity.id(), ingredient_id, in_stock)
            .await?;

        Ok(PantryStapleEntry { staple, ingredient })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::fakes::{identity, ingredient, test_service},
        ingredient::entities::IngredientCategory,
    };

    #[tokio::test]
    async fn toggling_upserts_one_row_per_ingredient() {
        let service = test_service();
        let user = identity();
        let oil = service
            .ingredient_repository
            .insert(ingredient("Olive Oil", IngredientCategory::Pantry));

        service.toggle_pantry_staple(user.clone(), oil.id, true).await.unwrap();
        let entry = service.toggle_pantry_staple(user.clone(), oil.id, false).await.unwrap();
        assert!(!entry.staple.in_stock);
        assert_eq!(entry.ingredient.name, "Olive Oil");

        let staples = service.list_pantry_staples(user).await.unwrap();
        assert_eq!(staples.len(), 1);
        assert!(!staples[0].staple.in_stock);
    }

    #[tokio::test]
    async fn unknown_ingredient_is_not_found() {
        let service = test_service();

        let err = service
            .toggle_pantry_staple(identity(), Uuid::new_v4(), true)
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }
}
