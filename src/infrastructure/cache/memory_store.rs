use super::store::{CacheError, CacheStore, CachedResponse};
use async_trait::async_trait;
use moka::{future::Cache, Expiry};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default number of responses kept in memory.
pub const DEFAULT_MEMORY_CAPACITY: u64 = 1_000;

#[derive(Debug)]
struct Entry {
    response: CachedResponse,
    ttl: Duration,
}

/// Expires each entry after the TTL it was stored with.
struct PerEntryTtl;

impl Expiry<String, Arc<Entry>> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Arc<Entry>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Arc<Entry>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-process cache store used when no Redis server is configured.
pub struct MemoryCacheStore {
    cache: Cache<String, Arc<Entry>>,
}

impl MemoryCacheStore {
    pub fn new(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache }
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY)
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, CacheError> {
        Ok(self.cache.get(key).await.map(|entry| entry.response.clone()))
    }

    async fn set(
        &self,
        key: &str,
        value: &CachedResponse,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        self.cache
            .insert(
                key.to_string(),
                Arc::new(Entry {
                    response: value.clone(),
                    ttl,
                }),
            )
            .await;
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
