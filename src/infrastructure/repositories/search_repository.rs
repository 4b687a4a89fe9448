use crate::domain::search::{SearchHit, SearchListing};
use async_trait::async_trait;
use serde::Deserialize;

/// Podcast directory lookup.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Search podcasts by free-text term.
    ///
    /// # Errors
    /// Returns the upstream error message if the directory cannot be reached
    /// or answers with something unexpected.
    async fn search(&self, term: &str) -> Result<SearchListing, String>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItunesSearchResponse {
    result_count: u32,
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// iTunes Search API client (`/search?media=podcast`).
pub struct ItunesSearchRepository {
    base_url: String,
    http_client: reqwest::Client,
}

impl ItunesSearchRepository {
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchRepository for ItunesSearchRepository {
    async fn search(&self, term: &str) -> Result<SearchListing, String> {
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("media", "podcast"), ("entity", "podcast"), ("term", term)])
            .send()
            .await
            .map_err(|e| format!("Search request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!(
                "Search service responded with status {}",
                response.status().as_u16()
            ));
        }

        let body = response
            .json::<ItunesSearchResponse>()
            .await
            .map_err(|e| format!("Failed to parse search results: {}", e))?;

        Ok(SearchListing {
            result_count: body.result_count,
            results: body.results,
        })
    }
}
