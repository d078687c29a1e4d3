use std::time::Duration;

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::RecipeCache};

pub mod memory;
pub mod redis;

pub use memory::InMemoryRecipeCache;
pub use redis::RedisRecipeCache;

/// Cache chosen at startup: Redis when a URL is configured, otherwise an
/// in-process LRU.
#[derive(Clone)]
pub enum RecipeCacheBackend {
    Redis(RedisRecipeCache),
    Memory(InMemoryRecipeCache),
}

impl RecipeCache for RecipeCacheBackend {
    async fn get(&self, key: String) -> Result<Option<String>, CoreError> {
        match self {
            RecipeCacheBackend::Redis(cache) => cache.get(key).await,
            RecipeCacheBackend::Memory(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: String, value: String, ttl: Duration) -> Result<(), CoreError> {
        match self {
            RecipeCacheBackend::Redis(cache) => cache.set(key, value, ttl).await,
            RecipeCacheBackend::Memory(cache) => cache.set(key, value, ttl).await,
        }
    }
}
