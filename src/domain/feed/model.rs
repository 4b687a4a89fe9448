use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Size used when the request does not name one.
pub const DEFAULT_SIZE: &str = "full";

/// A media attachment of a feed item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enclosure {
    pub url: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
}

/// Enclosure sequences are shared between `enclosures` and `media:content`.
pub type Enclosures = Arc<Vec<Enclosure>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedItem {
    pub guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosures: Option<Enclosures>,
    #[serde(rename = "media:content", skip_serializing_if = "Option::is_none")]
    pub media_content: Option<Enclosures>,
}

/// Feed as produced by the fetcher, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFeed {
    pub meta: FeedMeta,
    pub items: Vec<FeedItem>,
}

/// Normalized, template-ready feed. Also the body of `?json=1` responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedView {
    pub meta: FeedMeta,
    pub items: Vec<FeedItem>,
    pub url: String,
    pub size: String,
    pub title: String,
    pub layout: String,
}

/// Display parameters attached by the normalizer.
#[derive(Debug, Clone)]
pub struct FeedViewParams {
    pub size: Option<String>,
    pub url: String,
    pub layout: String,
}

/// One inbound `GET /:version/feed` request, after the URL decode guard.
#[derive(Debug, Clone)]
pub struct FeedRequest {
    pub url: String,
    pub size: Option<String>,
    pub debug: bool,
    pub json: bool,
    pub version: String,
}

impl FeedRequest {
    pub fn view_params(&self) -> FeedViewParams {
        FeedViewParams {
            size: self.size.clone(),
            url: self.url.clone(),
            layout: self.version.clone(),
        }
    }
}
