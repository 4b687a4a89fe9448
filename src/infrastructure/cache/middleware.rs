use super::store::{CacheStore, CachedResponse};
use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;

const KEY_PREFIX: &str = "route:";

/// Route-level response cache.
///
/// Built per route group with its own TTL and handed to
/// [`cache_middleware`] as state.
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Path plus raw query string, as sent. Reordered queries are different keys.
    pub fn cache_key(uri: &Uri) -> String {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("{}{}", KEY_PREFIX, path_and_query)
    }
}

/// Replay cached responses, or run the handler and store what it returns.
///
/// Only successful responses are stored. Store failures are logged and the
/// request is served uncached.
pub async fn cache_middleware(
    State(cache): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = ResponseCache::cache_key(request.uri());

    match cache.store.get(&key).await {
        Ok(Some(cached)) => match cached.into_response() {
            Ok(response) => {
                tracing::debug!(key = %key, store = cache.store.name(), "Cache hit");
                return response;
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding unreadable cache entry");
            }
        },
        Ok(None) => {
            tracing::debug!(key = %key, store = cache.store.name(), "Cache miss");
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Cache lookup failed, serving uncached");
        }
    }

    let response = next.run(request).await;
    if !response.status().is_success() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(key = %key, error = %e, "Failed to read response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let cached = CachedResponse::new(parts.status, &parts.headers, &bytes);
    match cache.store.set(&key, &cached, cache.ttl).await {
        Ok(()) => {
            tracing::debug!(key = %key, ttl_secs = cache.ttl.as_secs(), "Response cached");
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to store response in cache");
        }
    }

    Response::from_parts(parts, Body::from(bytes))
}
