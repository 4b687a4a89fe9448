pub mod memory_store;
pub mod middleware;
pub mod redis_store;
pub mod store;

pub use memory_store::MemoryCacheStore;
pub use middleware::{cache_middleware, ResponseCache};
pub use redis_store::RedisCacheStore;
pub use store::{CacheError, CacheStore, CachedResponse};

use std::time::Duration;

/// Search results change rarely: 30 days.
pub const SEARCH_CACHE_TTL: Duration = Duration::from_secs(3600 * 24 * 30);

/// Feeds are refreshed hourly.
pub const FEED_CACHE_TTL: Duration = Duration::from_secs(3600);
