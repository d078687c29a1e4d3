use std::time::Duration;

use redis::{AsyncCommands, aio::ConnectionManager};
use tracing::{error, info};

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::RecipeCache};

const KEY_PREFIX: &str = "hungry-owl:";

#[derive(Clone)]
pub struct RedisRecipeCache {
    manager: ConnectionManager,
}

impl RedisRecipeCache {
    pub async fn connect(url: &str) -> Result<Self, anyhow::Error> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        info!("connected to redis recipe cache");

        Ok(Self { manager })
    }

    fn build_key(key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }
}

impl RecipeCache for RedisRecipeCache {
    async fn get(&self, key: String) -> Result<Option<String>, CoreError> {
        let mut conn = self.manager.clone();

        conn.get(Self::build_key(&key)).await.map_err(|e| {
            error!("Redis GET operation failed: {}", e);
            CoreError::CacheError(e.to_string())
        })
    }

    async fn set(&self, key: String, value: String, ttl: Duration) -> Result<(), CoreError> {
        let mut conn = self.manager.clone();

        // SETEX rejects a zero expiry.
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(Self::build_key(&key), value, ttl_secs)
            .await
            .map_err(|e| {
                error!("Redis SET operation failed: {}", e);
                CoreError::CacheError(e.to_string())
            })
    }
}
