pub mod request_id;
pub mod security_headers;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};
pub use security_headers::security_headers_middleware;

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::controllers::{
    audio_proxy::AudioProxyController, csp_report, feed::FeedController, health, index,
    search::SearchController,
};
use crate::infrastructure::cache::{
    cache_middleware, CacheStore, ResponseCache, FEED_CACHE_TTL, SEARCH_CACHE_TTL,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::views::ViewRenderer;

const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";

/// Everything the router needs, built once in `main` (or by the tests).
#[derive(Clone)]
pub struct AppDependencies {
    pub views: Arc<ViewRenderer>,
    pub feed_controller: Arc<FeedController>,
    pub search_controller: Arc<SearchController>,
    pub audio_proxy_controller: Arc<AudioProxyController>,
    /// `None` when the response cache is disabled.
    pub cache_store: Option<Arc<dyn CacheStore>>,
    pub static_dir: PathBuf,
}

/// Build the application router with all routes and middleware
pub fn build_router(deps: AppDependencies) -> Router {
    // Feed routes (cached for an hour)
    let feed_routes = with_response_cache(
        Router::new()
            .route("/:version/feed", get(FeedController::show))
            .with_state(deps.feed_controller.clone()),
        &deps.cache_store,
        FEED_CACHE_TTL,
    );

    // Search routes (cached for 30 days)
    let search_routes = with_response_cache(
        Router::new()
            .route("/:version/search", get(SearchController::show))
            .with_state(deps.search_controller.clone()),
        &deps.cache_store,
        SEARCH_CACHE_TTL,
    );

    let index_routes = Router::new()
        .route("/", get(index::redirect_to_default_version))
        .route("/:version", get(index::show))
        .route("/:version/", get(index::show))
        .with_state(deps.views.clone());

    let audio_routes = Router::new()
        .route("/audioproxy", get(AudioProxyController::stream))
        .route("/audioproxy/", get(AudioProxyController::stream))
        .with_state(deps.audio_proxy_controller.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(deps.cache_store.clone());

    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
        .service(ServeDir::new(&deps.static_dir));

    Router::new()
        .route("/report-violation", post(csp_report::report_violation))
        .merge(index_routes)
        .merge(feed_routes)
        .merge(search_routes)
        .merge(audio_routes)
        .merge(health_routes)
        .nest_service("/static", static_files)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

fn with_response_cache(
    routes: Router,
    cache_store: &Option<Arc<dyn CacheStore>>,
    ttl: Duration,
) -> Router {
    match cache_store {
        Some(store) => routes.route_layer(middleware::from_fn_with_state(
            ResponseCache::new(store.clone(), ttl),
            cache_middleware,
        )),
        None => routes,
    }
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: &Config,
    deps: AppDependencies,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(deps);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
