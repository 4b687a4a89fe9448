use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::cache::CacheStore;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State(cache_store): State<Option<Arc<dyn CacheStore>>>,
) -> impl IntoResponse {
    let Some(store) = cache_store else {
        return (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "cache": "disabled"
            })),
        );
    };

    match store.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "cache": "connected",
                "store": store.name()
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, store = store.name(), "Cache store not reachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "cache": "disconnected",
                    "store": store.name()
                })),
            )
        }
    }
}
