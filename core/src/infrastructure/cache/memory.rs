use std::{
    num::NonZeroUsize,
    sync::Arc,
    time::{Duration, Instant},
};

use lru::LruCache;
use tokio::sync::Mutex;

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::RecipeCache};

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Process-local LRU with per-entry expiry. Expired entries are dropped
/// lazily on read.
#[derive(Clone)]
pub struct InMemoryRecipeCache {
    store: Arc<Mutex<LruCache<String, CacheEntry>>>,
}

impl InMemoryRecipeCache {
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(DEFAULT_CAPACITY);

        Self {
            store: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub async fn entry_count(&self) -> usize {
        self.store.lock().await.len()
    }
}

impl RecipeCache for InMemoryRecipeCache {
    async fn get(&self, key: String) -> Result<Option<String>, CoreError> {
        let mut store = self.store.lock().await;

        match store.get(&key) {
            Some(entry) if entry.is_expired() => {
                store.pop(&key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: String, value: String, ttl: Duration) -> Result<(), CoreError> {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.store.lock().await.push(key, entry);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_value_before_expiry() {
        let cache = InMemoryRecipeCache::new(10);
        cache
            .set("k".to_string(), "v".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.get("k".to_string()).await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn expired_entries_read_as_missing_and_are_evicted() {
        let cache = InMemoryRecipeCache::new(10);
        cache
            .set("k".to_string(), "v".to_string(), Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(cache.get("k".to_string()).await.unwrap(), None);
        assert_eq!(cache.entry_count().await, 0);
    }

    #[tokio::test]
    async fn least_recently_used_entry_is_evicted_at_capacity() {
        let cache = InMemoryRecipeCache::new(2);
        let ttl = Duration::from_secs(60);
        cache.set("a".to_string(), "1".to_string(), ttl).await.unwrap();
        cache.set("b".to_string(), "2".to_string(), ttl).await.unwrap();
        cache.get("a".to_string()).await.unwrap();
        cache.set("c".to_string(), "3".to_string(), ttl).await.unwrap();

        assert!(cache.get("b".to_string()).await.unwrap().is_none());
        assert_eq!(cache.get("a".to_string()).await.unwrap().as_deref(), Some("1"));
        assert_eq!(cache.get("c".to_string()).await.unwrap().as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn zero_capacity_falls_back_to_default() {
        let cache = InMemoryRecipeCache::new(0);
        cache
            .set("k".to_string(), "v".to_string(), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.entry_count().await, 1);
    }
}
