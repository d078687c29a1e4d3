use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod fakes;

#[derive(Clone, Debug)]
pub struct HungryOwlConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub cache: CacheConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub max_tokens: u32,
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Redis connection string; an in-process cache is used when absent.
    pub url: Option<String>,
    pub ttl_seconds: u64,
    pub max_entries: usize,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
