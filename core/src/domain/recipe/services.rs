use std::cmp::Reverse;

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientRepository,
    inventory::{ports::InventoryRepository, value_objects::InventoryEntry},
    matching::{availability::AvailabilityIndex, scorer::score},
    pantry::ports::PantryRepository,
    recipe::{
        entities::{GeneratedRecipe, Recipe, SavedRecipe},
        parser::parse_recipes,
        ports::{LLMClient, RecipeCache, RecipeRepository, RecipeService},
        prompt::{PromptContext, build_recipe_prompt},
        value_objects::{
            GenerateRecipesInput, RECENT_RECIPES_LIMIT, inventory_digest, recipes_cache_key,
        },
    },
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
    /// A failing or corrupt cache behaves like an empty one.
    async fn cached_recipes(&self, key: &str) -> Option<Vec<GeneratedRecipe>> {
        let raw = match self.recipe_cache.get(key.to_string()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "recipe cache miss");
                return None;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "recipe cache read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(recipes) => {
                tracing::debug!(key, "recipe cache hit");
                Some(recipes)
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable cached recipes");
                None
            }
        }
    }

    async fn cache_recipes(&self, key: String, recipes: &[GeneratedRecipe]) {
        let value = match serde_json::to_string(recipes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize recipes for cache");
                return;
            }
        };

        if let Err(e) = self
            .recipe_cache
            .set(key, value, self.settings.recipe_cache_ttl)
            .await
        {
            tracing::warn!(error = %e, "recipe cache write failed");
        }
    }
}

/// Score every recipe against `availability` and order best match first.
///
/// The sort is stable, so equal matches keep the model's order.
pub fn rank_recipes(recipes: &mut [GeneratedRecipe], availability: &AvailabilityIndex) {
    for recipe in recipes.iter_mut() {
        let result = score(&recipe.ingredients, availability);
        recipe.annotate(result);
    }
    recipes.sort_by_key(|recipe| Reverse(recipe.match_percentage.unwrap_or(0)));
}

impl<I, INV, P, U, S, R, LLM, C> RecipeService for Service<I, INV, P, U, S, R, LLM, C>
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
    #[instrument(skip(self, input), fields(user_id = %identity.id(), max_time = input.max_time))]
    async fn generate_recipes(
        &self,
        identity: Identity,
        input: GenerateRecipesInput,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        if input.max_time <= 0 {
            return Err(CoreError::Invalid(
                "max_time must be a positive number of minutes".to_string(),
            ));
        }

        let user_id = identity.id();
        let inventory = self.inventory_entries(user_id).await?;
        let staples = self.pantry_entries(user_id).await?;

        let key = recipes_cache_key(user_id, &input, &inventory_digest(&inventory, &staples));
        if let Some(recipes) = self.cached_recipes(&key).await {
            return Ok(recipes);
        }

        let profile = self.user_repository.get_profile(user_id).await?;
        let recent_recipes = self
            .recipe_repository
            .recent_recipe_names(user_id, RECENT_RECIPES_LIMIT)
            .await?;
        let expiring: Vec<InventoryEntry> = inventory
            .iter()
            .filter(|entry| entry.status.needs_attention())
            .cloned()
            .collect();

        let prompt = build_recipe_prompt(&PromptContext {
            inventory: &inventory,
            staples: &staples,
            expiring: &expiring,
            profile: profile.as_ref(),
            recent_recipes: &recent_recipes,
            options: &input,
        });

        let raw = self.llm_client.generate_with_text(prompt).await?;
        let mut recipes = parse_recipes(&raw)?;

        let availability = AvailabilityIndex::build(&inventory, &staples);
        rank_recipes(&mut recipes, &availability);

        self.cache_recipes(key, &recipes).await;

        Ok(recipes)
    }

    #[instrument(skip(self, recipe), fields(user_id = %identity.id(), name = %recipe.name))]
    async fn save_recipe(
        &self,
        identity: Identity,
        recipe: GeneratedRecipe,
    ) -> Result<SavedRecipe, CoreError> {
        if recipe.name.trim().is_empty() {
            return Err(CoreError::Invalid("recipe name is required".to_string()));
        }

        self.recipe_repository
            .save_for_user(Recipe::new(identity.id(), recipe))
            .await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn list_saved_recipes(&self, identity: Identity) -> Result<Vec<SavedRecipe>, CoreError> {
        self.recipe_repository.list_saved(identity.id()).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn delete_saved_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        if self
            .recipe_repository
            .delete_saved(identity.id(), recipe_id)
            .await?
        {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::domain::{
        common::{
            fakes::{TestService, identity, ingredient, test_service},
            services::DEFAULT_RECIPE_CACHE_TTL,
        },
        ingredient::entities::IngredientCategory,
        inventory::{ports::InventoryService, value_objects::AddToInventoryInput},
        pantry::ports::PantryService,
    };

    const REPLY: &str = r#"Sure! Here are your recipes:
[
  {"name": "Broccoli Stir Fry", "ingredients": [
    {"name": "Broccoli", "quantity": 1, "unit": "head"},
    {"name": "Soy Sauce", "quantity": 2, "unit": "tbsp"}
  ]},
  {"name": "Chicken Rice", "ingredients": [
    {"name": "Chicken", "quantity": 1, "unit": "lb"},
    {"name": "Rice", "quantity": 1, "unit": "cup"},
    {"name": "Scallion", "quantity": 1, "unit": "piece", "optional": true}
  ]},
  {"name": "Salted Rice", "ingredients": [
    {"name": "Rice", "quantity": 1, "unit": "cup"},
    {"name": "Salt", "quantity": 1, "unit": "tsp"}
  ]}
]"#;

    async fn stocked_service() -> (TestService, Identity) {
        let service = test_service();
        let user = identity();

        for name in ["Chicken Breast", "Rice", "Soy Sauce"] {
            let ingredient = service
                .ingredient_repository
                .insert(ingredient(name, IngredientCategory::Other));
            service
                .add_to_inventory(
                    user.clone(),
                    AddToInventoryInput {
                        ingredient_id: ingredient.id,
                        quantity: 1.0,
                        unit: "piece".to_string(),
                        expiration_date: None,
                        storage_location: None,
                    },
                )
                .await
                .unwrap();
        }

        let salt = service
            .ingredient_repository
            .insert(ingredient("Salt", IngredientCategory::Pantry));
        service
            .toggle_pantry_staple(user.clone(), salt.id, true)
            .await
            .unwrap();

        service.llm_client.set_reply(REPLY);
        (service, user)
    }

    #[tokio::test]
    async fn recipes_are_scored_and_ranked() {
        let (service, user) = stocked_service().await;

        let recipes = service
            .generate_recipes(user, GenerateRecipesInput::default())
            .await
            .unwrap();

        let ranked: Vec<(&str, Option<u8>)> = recipes
            .iter()
            .map(|r| (r.name.as_str(), r.match_percentage))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("Chicken Rice", Some(100)),
                ("Salted Rice", Some(100)),
                ("Broccoli Stir Fry", Some(50)),
            ]
        );
        assert_eq!(
            recipes[2].missing_ingredients,
            Some(vec!["broccoli".to_string()])
        );
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let (service, user) = stocked_service().await;

        let first = service
            .generate_recipes(user.clone(), GenerateRecipesInput::default())
            .await
            .unwrap();
        let second = service
            .generate_recipes(user, GenerateRecipesInput::default())
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(service.llm_client.calls(), 1);
        assert_eq!(
            *service.recipe_cache.ttls.lock().unwrap(),
            vec![DEFAULT_RECIPE_CACHE_TTL]
        );
    }

    #[tokio::test]
    async fn staple_toggle_rescores_instead_of_hitting_cache() {
        let (service, user) = stocked_service().await;

        service
            .generate_recipes(user.clone(), GenerateRecipesInput::default())
            .await
            .unwrap();

        let salt = service
            .list_pantry_staples(user.clone())
            .await
            .unwrap()
            .into_iter()
            .find(|entry| entry.ingredient.name == "Salt")
            .unwrap();
        service
            .toggle_pantry_staple(user.clone(), salt.ingredient.id, false)
            .await
            .unwrap();

        let recipes = service
            .generate_recipes(user, GenerateRecipesInput::default())
            .await
            .unwrap();

        assert_eq!(service.llm_client.calls(), 2);
        let salted = recipes
            .iter()
            .find(|recipe| recipe.name == "Salted Rice")
            .unwrap();
        assert_eq!(salted.match_percentage, Some(50));
        assert_eq!(salted.missing_ingredients, Some(vec!["salt".to_string()]));
    }

    #[tokio::test]
    async fn different_options_miss_the_cache() {
        let (service, user) = stocked_service().await;

        service
            .generate_recipes(user.clone(), GenerateRecipesInput::default())
            .await
            .unwrap();
        service
            .generate_recipes(
                user,
                GenerateRecipesInput {
                    one_pot_only: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(service.llm_client.calls(), 2);
        let prompts = service.llm_client.prompts.lock().unwrap();
        assert!(prompts[1].contains("ONE POT MEALS ONLY"));
        assert!(prompts[0].contains("Rice (1 piece)"));
        assert!(prompts[0].contains("PANTRY STAPLES: Salt"));
    }

    #[tokio::test]
    async fn broken_cache_does_not_change_results() {
        let (service, user) = stocked_service().await;
        service.recipe_cache.broken.store(true, Ordering::SeqCst);

        let recipes = service
            .generate_recipes(user, GenerateRecipesInput::default())
            .await
            .unwrap();

        assert_eq!(recipes.len(), 3);
        assert_eq!(service.recipe_cache.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_positive_time_is_invalid() {
        let (service, user) = stocked_service().await;

        let err = service
            .generate_recipes(
                user,
                GenerateRecipesInput {
                    max_time: 0,
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
        assert_eq!(service.llm_client.calls(), 0);
    }

    #[tokio::test]
    async fn unusable_reply_is_an_external_failure() {
        let (service, user) = stocked_service().await;
        service.llm_client.set_reply("I'd rather not.");

        let err = service
            .generate_recipes(user, GenerateRecipesInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
        assert!(service.recipe_cache.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn saved_recipes_round_trip_for_their_owner() {
        let service = test_service();
        let user = identity();

        let mut recipe = GeneratedRecipe {
            name: "Omelette".to_string(),
            ..Default::default()
        };
        recipe.match_percentage = Some(80);
        let saved = service.save_recipe(user.clone(), recipe).await.unwrap();
        assert_eq!(saved.recipe.content.match_percentage, None);

        service
            .save_recipe(
                user.clone(),
                GeneratedRecipe {
                    name: "Pancakes".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let names: Vec<String> = service
            .list_saved_recipes(user.clone())
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.recipe.content.name)
            .collect();
        assert_eq!(names, vec!["Pancakes", "Omelette"]);

        assert_eq!(
            service
                .delete_saved_recipe(identity(), saved.recipe.id)
                .await
                .unwrap_err(),
            CoreError::NotFound
        );
        service
            .delete_saved_recipe(user.clone(), saved.recipe.id)
            .await
            .unwrap();
        assert_eq!(service.list_saved_recipes(user).await.unwrap().len(), 1);
    }

    #[test]
    fn equal_matches_keep_model_order() {
        let mut recipes = vec![
            GeneratedRecipe {
                name: "first".to_string(),
                ..Default::default()
            },
            GeneratedRecipe {
                name: "second".to_string(),
                ..Default::default()
            },
        ];

        rank_recipes(&mut recipes, &AvailabilityIndex::default());

        assert_eq!(recipes[0].name, "first");
        assert_eq!(recipes[0].match_percentage, Some(100));
        assert_eq!(recipes[1].name, "second");
    }
}
