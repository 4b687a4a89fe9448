use super::error::SearchServiceError;
use super::model::{SearchRequest, SearchResult};
use super::INVALID_SEARCH_TERM;
use crate::infrastructure::repositories::SearchRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SearchService {
    search_repo: Arc<dyn SearchRepository>,
}

impl SearchService {
    pub fn new(search_repo: Arc<dyn SearchRepository>) -> Self {
        Self { search_repo }
    }
}

#[async_trait]
pub trait SearchServiceApi: Send + Sync {
    /// Query the podcast directory for `request.term`.
    ///
    /// The result carries the original term and the request's layout.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchServiceError>;
}

#[async_trait]
impl SearchServiceApi for SearchService {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchServiceError> {
        let term = request.term.trim();
        if term.is_empty() {
            return Err(SearchServiceError::Invalid(INVALID_SEARCH_TERM.to_string()));
        }

        tracing::info!(term = %term, version = %request.version, "Searching podcasts");

        let listing = self.search_repo.search(term).await.map_err(|e| {
            tracing::warn!(term = %term, error = %e, "Search failed");
            SearchServiceError::Dependency(e)
        })?;

        Ok(SearchResult {
            term: request.term.clone(),
            layout: request.version.clone(),
            result_count: listing.result_count,
            results: listing.results,
        })
    }
}
