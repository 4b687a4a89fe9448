use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache store unavailable: {0}")]
    Unavailable(String),
    #[error("cache entry corrupt: {0}")]
    Corrupt(String),
}

/// A complete HTTP response as stored in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// Base64 encoded body
    pub body: String,
}

impl CachedResponse {
    pub fn new(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Self {
        let headers = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        Self {
            status: status.as_u16(),
            headers,
            body: STANDARD.encode(body),
        }
    }

    pub fn body_bytes(&self) -> Result<Vec<u8>, CacheError> {
        STANDARD
            .decode(self.body.as_bytes())
            .map_err(|e| CacheError::Corrupt(e.to_string()))
    }

    /// Rebuild the stored response verbatim.
    pub fn into_response(self) -> Result<Response, CacheError> {
        let body = self.body_bytes()?;
        let status =
            StatusCode::from_u16(self.status).map_err(|e| CacheError::Corrupt(e.to_string()))?;

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;

        for (name, value) in self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CacheError::Corrupt(e.to_string()))?;
            let value =
                HeaderValue::from_str(&value).map_err(|e| CacheError::Corrupt(e.to_string()))?;
            response.headers_mut().append(name, value);
        }

        Ok(response)
    }
}

/// Storage backend for cached responses.
///
/// Implementations must tolerate concurrent use; racing writes to the same key
/// may resolve either way.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, CacheError>;

    async fn set(&self, key: &str, value: &CachedResponse, ttl: Duration)
        -> Result<(), CacheError>;

    /// Check that the store can be reached.
    async fn ping(&self) -> Result<(), CacheError>;

    /// Short backend name for logs and health output
    fn name(&self) -> &'static str;
}
