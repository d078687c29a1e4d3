use std::{sync::Arc, time::Duration};

use crate::domain::{
    ingredient::{emoji::EmojiCatalog, ports::IngredientRepository},
    inventory::ports::InventoryRepository,
    matching::recommendations::StaplesCatalog,
    pantry::ports::PantryRepository,
    recipe::ports::{LLMClient, RecipeCache, RecipeRepository},
    shopping::ports::ShoppingListRepository,
    user::ports::UserRepository,
};

pub const DEFAULT_RECIPE_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Static configuration injected into the service.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub staples_catalog: StaplesCatalog,
    pub emoji_catalog: EmojiCatalog,
    pub recipe_cache_ttl: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            staples_catalog: StaplesCatalog::default(),
            emoji_catalog: EmojiCatalog::default(),
            recipe_cache_ttl: DEFAULT_RECIPE_CACHE_TTL,
        }
    }
}

pub struct Service<I, INV, P, U, S, R, LLM, C>
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
    pub(crate) ingredient_repository: Arc<I>,
    pub(crate) inventory_repository: Arc<INV>,
    pub(crate) pantry_repository: Arc<P>,
    pub(crate) user_repository: Arc<U>,
    pub(crate) shopping_list_repository: Arc<S>,
    pub(crate) recipe_repository: Arc<R>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) recipe_cache: Arc<C>,
    pub(crate) settings: Arc<ServiceSettings>,
}

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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ingredient_repository: I,
        inventory_repository: INV,
        pantry_repository: P,
        user_repository: U,
        shopping_list_repository: S,
        recipe_repository: R,
        llm_client: LLM,
        recipe_cache: C,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            ingredient_repository: Arc::new(ingredient_repository),
            inventory_repository: Arc::new(inventory_repository),
            pantry_repository: Arc::new(pantry_repository),
            user_repository: Arc::new(user_repository),
            shopping_list_repository: Arc::new(shopping_list_repository),
            recipe_repository: Arc::new(recipe_repository),
            llm_client: Arc::new(llm_client),
            recipe_cache: Arc::new(recipe_cache),
            settings: Arc::new(settings),
        }
    }
}

impl<I, INV, P, U, S, R, LLM, C> Clone for Service<I, INV, P, U, S, R, LLM, C>
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
    fn clone(&self) -> Self {
        Self {
            ingredient_repository: Arc::clone(&self.ingredient_repository),
            inventory_repository: Arc::clone(&self.inventory_repository),
            pantry_repository: Arc::clone(&self.pantry_repository),
            user_repository: Arc::clone(&self.user_repository),
            shopping_list_repository: Arc::clone(&self.shopping_list_repository),
            recipe_repository: Arc::clone(&self.recipe_repository),
            llm_client: Arc::clone(&self.llm_client),
            recipe_cache: Arc::clone(&self.recipe_cache),
            settings: Arc::clone(&self.settings),
        }
    }
}
