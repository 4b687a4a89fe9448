use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podcast_feeds::controllers::{
    audio_proxy::AudioProxyController, feed::FeedController, search::SearchController,
};
use podcast_feeds::domain::{feed::FeedService, search::SearchService};
use podcast_feeds::infrastructure::cache::{CacheStore, MemoryCacheStore, RedisCacheStore};
use podcast_feeds::infrastructure::config::{Config, LogFormat};
use podcast_feeds::infrastructure::http::{start_http_server, AppDependencies};
use podcast_feeds::infrastructure::repositories::{
    build_http_client, build_streaming_client, HttpFeedRepository, ItunesSearchRepository,
};
use podcast_feeds::infrastructure::views::ViewRenderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = %config.environment,
        "Starting podcast-feeds on {}:{}",
        config.host,
        config.port
    );

    let http_client = build_http_client(config.http_timeout())?;
    let streaming_client = build_streaming_client(config.http_timeout())?;

    let cache_store = build_cache_store(&config)?;

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject http client)
    tracing::info!("Instantiating repositories...");
    let feed_repo = Arc::new(HttpFeedRepository::new(http_client.clone()));
    let search_repo = Arc::new(ItunesSearchRepository::new(
        config.search_api_url.clone(),
        http_client,
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let feed_service = Arc::new(FeedService::new(feed_repo));
    let search_service = Arc::new(SearchService::new(search_repo));

    // 3. Compile templates
    let views = Arc::new(ViewRenderer::new()?);
    tracing::info!("Templates compiled");

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let deps = AppDependencies {
        feed_controller: Arc::new(FeedController::new(feed_service, views.clone())),
        search_controller: Arc::new(SearchController::new(search_service, views.clone())),
        audio_proxy_controller: Arc::new(AudioProxyController::new(streaming_client)),
        views,
        cache_store,
        static_dir: config.static_dir.clone(),
    };

    // Start HTTP server with all routes
    start_http_server(&config, deps).await?;

    Ok(())
}

fn build_cache_store(
    config: &Config,
) -> Result<Option<Arc<dyn CacheStore>>, Box<dyn std::error::Error>> {
    if !config.cache_enabled {
        tracing::info!("Response cache disabled");
        return Ok(None);
    }

    let store: Arc<dyn CacheStore> = match &config.redis_url {
        Some(redis_url) => {
            tracing::info!("Using Redis response cache");
            Arc::new(RedisCacheStore::new(redis_url)?)
        }
        None => {
            tracing::warn!("REDIS_SERVER not set, falling back to in-memory response cache");
            Arc::new(MemoryCacheStore::default())
        }
    };

    Ok(Some(store))
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "podcast_feeds=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
