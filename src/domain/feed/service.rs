use super::error::FeedServiceError;
use super::model::{FeedRequest, FeedView};
use super::normalizer::normalize;
use crate::infrastructure::repositories::FeedRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct FeedService {
    feed_repo: Arc<dyn FeedRepository>,
}

impl FeedService {
    pub fn new(feed_repo: Arc<dyn FeedRepository>) -> Self {
        Self { feed_repo }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    /// Fetch the requested feed and build its normalized view.
    ///
    /// Errors carry the upstream message unchanged.
    async fn load_feed(&self, request: &FeedRequest) -> Result<FeedView, FeedServiceError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn load_feed(&self, request: &FeedRequest) -> Result<FeedView, FeedServiceError> {
        if request.url.is_empty() {
            return Err(FeedServiceError::Invalid(super::INVALID_RSS_URL.to_string()));
        }

        tracing::info!(
            url = %request.url,
            version = %request.version,
            "Fetching feed"
        );

        let parsed = self.feed_repo.fetch(&request.url).await.map_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "Feed fetch failed");
            FeedServiceError::Dependency(e.to_string())
        })?;

        tracing::debug!(
            url = %request.url,
            items = parsed.items.len(),
            "Feed parsed"
        );

        Ok(normalize(parsed, request.view_params()))
    }
}
