use crate::domain::feed::{Enclosure, FeedItem, FeedMeta, ParsedFeed};
use async_trait::async_trait;
use feed_rs::model::{Entry, Link, MediaContent, MediaObject};
use html2text::from_read;
use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Request(String),
    #[error("Bad status code {0}")]
    Status(u16),
    #[error("Not a feed: {0}")]
    Parse(String),
}

/// Retrieves and parses a feed document.
///
/// Implementations return the feed as the parser sees it; normalization for
/// display happens in the domain layer.
#[async_trait]
pub trait FeedRepository: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ParsedFeed, FetchError>;
}

/// Fetches feeds over HTTP and parses them with `feed-rs` (RSS 0.9x/1.0/2.0,
/// Atom, JSON Feed).
pub struct HttpFeedRepository {
    http_client: reqwest::Client,
}

impl HttpFeedRepository {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl FeedRepository for HttpFeedRepository {
    async fn fetch(&self, url: &str) -> Result<ParsedFeed, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        parse_feed(&body)
    }
}

/// Parse a raw feed document into the shape the pipeline works with.
pub fn parse_feed(body: &[u8]) -> Result<ParsedFeed, FetchError> {
    let feed = feed_rs::parser::parse(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let meta = FeedMeta {
        title: feed
            .title
            .map(|t| decode_html_entities(&t.content).to_string())
            .unwrap_or_default(),
        description: feed
            .description
            .map(|d| decode_html_entities(&d.content).to_string()),
        link: feed.links.first().map(|l| l.href.clone()),
        image: feed.logo.or(feed.icon).map(|image| image.uri),
        author: feed.authors.first().map(|a| a.name.clone()),
        language: feed.language,
    };

    let items = feed.entries.into_iter().map(map_entry).collect();

    Ok(ParsedFeed { meta, items })
}

fn map_entry(entry: Entry) -> FeedItem {
    let link = entry
        .links
        .iter()
        .find(|l| !is_enclosure_link(l))
        .map(|l| l.href.clone());

    let description = entry
        .summary
        .as_ref()
        .map(|s| s.content.clone())
        .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()));
    let summary_text = description.as_deref().map(html_to_text);

    // Every attachment the parser found, plus Atom enclosure links.
    let mut enclosures: Vec<Enclosure> = entry
        .media
        .iter()
        .flat_map(|m| m.content.iter())
        .filter_map(media_enclosure)
        .collect();
    enclosures.extend(
        entry
            .links
            .iter()
            .filter(|l| is_enclosure_link(l))
            .map(|l| Enclosure {
                url: l.href.clone(),
                media_type: l.media_type.clone(),
                length: l.length,
            }),
    );

    // Only media objects with Media RSS metadata count as `media:content`.
    let media_content: Vec<Enclosure> = entry
        .media
        .iter()
        .filter(|m| has_media_rss_metadata(m))
        .flat_map(|m| m.content.iter())
        .filter_map(media_enclosure)
        .collect();

    let image = entry
        .media
        .iter()
        .flat_map(|m| m.thumbnails.iter())
        .map(|t| t.image.uri.clone())
        .next();

    let duration = entry
        .media
        .iter()
        .find_map(|m| m.duration.or_else(|| m.content.iter().find_map(|c| c.duration)))
        .map(|d| d.as_secs());

    FeedItem {
        guid: entry.id,
        title: entry
            .title
            .map(|t| decode_html_entities(&t.content).to_string()),
        link,
        description,
        summary_text,
        pub_date: entry.published.or(entry.updated),
        author: entry.authors.first().map(|a| a.name.clone()),
        image,
        duration,
        enclosures: Some(Arc::new(enclosures)),
        media_content: if media_content.is_empty() {
            None
        } else {
            Some(Arc::new(media_content))
        },
    }
}

fn is_enclosure_link(link: &Link) -> bool {
    link.rel.as_deref() == Some("enclosure")
}

fn has_media_rss_metadata(media: &MediaObject) -> bool {
    media.title.is_some() || media.description.is_some() || !media.thumbnails.is_empty()
}

fn media_enclosure(content: &MediaContent) -> Option<Enclosure> {
    let url = content.url.as_ref()?;
    Some(Enclosure {
        url: url.to_string(),
        media_type: content.content_type.as_ref().map(|m| m.to_string()),
        length: content.size,
    })
}

/// Plain-text rendition of an HTML description, whitespace collapsed.
fn html_to_text(html: &str) -> String {
    let plain_text = from_read(html.as_bytes(), usize::MAX);
    WHITESPACE.replace_all(&plain_text, " ").trim().to_string()
}
