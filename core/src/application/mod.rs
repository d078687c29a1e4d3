use std::time::Duration;

use tracing::info;

use crate::{
    domain::common::{
        HungryOwlConfig,
        services::{Service, ServiceSettings},
    },
    infrastructure::{
        cache::{InMemoryRecipeCache, RecipeCacheBackend, RedisRecipeCache},
        db::postgres::{Postgres, PostgresConfig},
        ingredient::PostgresIngredientRepository,
        inventory::PostgresInventoryRepository,
        llm::AnthropicLLMClient,
        pantry::PostgresPantryRepository,
        recipe::PostgresRecipeRepository,
        shopping::PostgresShoppingListRepository,
        user::PostgresUserRepository,
    },
};

pub type HungryOwlService = Service<
    PostgresIngredientRepository,
    PostgresInventoryRepository,
    PostgresPantryRepository,
    PostgresUserRepository,
    PostgresShoppingListRepository,
    PostgresRecipeRepository,
    AnthropicLLMClient,
    RecipeCacheBackend,
>;

pub async fn create_service(config: HungryOwlConfig) -> Result<HungryOwlService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let recipe_cache = match config.cache.url.as_deref() {
        Some(url) => RecipeCacheBackend::Redis(RedisRecipeCache::connect(url).await?),
        None => {
            info!("no cache url configured, using in-memory recipe cache");
            RecipeCacheBackend::Memory(InMemoryRecipeCache::new(config.cache.max_entries))
        }
    };

    let llm_client = AnthropicLLMClient::new(
        config.llm.anthropic_api_key,
        config.llm.anthropic_model,
        config.llm.max_tokens,
    );

    let settings = ServiceSettings {
        recipe_cache_ttl: Duration::from_secs(config.cache.ttl_seconds),
        ..ServiceSettings::default()
    };

    Ok(Service::new(
        PostgresIngredientRepository::new(postgres.get_db()),
        PostgresInventoryRepository::new(postgres.get_db()),
        PostgresPantryRepository::new(postgres.get_db()),
        PostgresUserRepository::new(postgres.get_db()),
        PostgresShoppingListRepository::new(postgres.get_db()),
        PostgresRecipeRepository::new(postgres.get_db()),
        llm_client,
        recipe_cache,
        settings,
    ))
}
