use super::store::{CacheError, CacheStore, CachedResponse};
use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Retries of the initial connect (backoff 200ms).
const CONNECT_RETRIES: usize = 1;

/// Upper bound for connecting and for each command. A stalled Redis turns
/// into `CacheError::Unavailable` and the request is served uncached.
pub const DEFAULT_REDIS_TIMEOUT: Duration = Duration::from_millis(500);

/// Redis-backed cache store.
///
/// The connection is opened on first use. A failed attempt leaves the cell
/// empty so the next request tries again; `ConnectionManager` handles
/// reconnects after that.
pub struct RedisCacheStore {
    client: redis::Client,
    connection: OnceCell<ConnectionManager>,
    timeout: Duration,
}

impl fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCacheStore")
            .field("connected", &self.connection.initialized())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RedisCacheStore {
    /// Validate the connection string. Does not touch the network.
    pub fn new(redis_url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(redis_url).map_err(|e| CacheError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
            timeout: DEFAULT_REDIS_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        self.connection
            .get_or_try_init(|| async {
                tracing::info!("Connecting to Redis");
                self.bounded(async {
                    ConnectionManager::new_with_backoff(
                        self.client.clone(),
                        2,
                        100,
                        CONNECT_RETRIES,
                    )
                    .await
                    .map_err(|e| CacheError::Unavailable(e.to_string()))
                })
                .await
            })
            .await
            .cloned()
    }

    /// Run a Redis operation, failing with `Unavailable` once `timeout` passes.
    async fn bounded<T, F>(&self, operation: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        tokio::time::timeout(self.timeout, operation)
            .await
            .map_err(|_| {
                CacheError::Unavailable(format!(
                    "redis timed out after {}ms",
                    self.timeout.as_millis()
                ))
            })?
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, CacheError> {
        let mut conn = self.connection().await?;

        let value: Option<String> = self
            .bounded(async {
                conn.get::<_, Option<String>>(key)
                    .await
                    .map_err(|e| CacheError::Unavailable(e.to_string()))
            })
            .await?;

        value
            .map(|raw| {
                serde_json::from_str::<CachedResponse>(&raw)
                    .map_err(|e| CacheError::Corrupt(e.to_string()))
            })
            .transpose()
    }

    async fn set(
        &self,
        key: &str,
        value: &CachedResponse,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value).map_err(|e| CacheError::Corrupt(e.to_string()))?;
        let mut conn = self.connection().await?;

        self.bounded(async {
            conn.set_ex::<_, _, ()>(key, raw, ttl.as_secs())
                .await
                .map_err(|e| CacheError::Unavailable(e.to_string()))
        })
        .await
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;

        self.bounded(async {
            redis::cmd("PING")
                .query_async::<_, String>(&mut conn)
                .await
                .map(|_| ())
                .map_err(|e| CacheError::Unavailable(e.to_string()))
        })
        .await
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
