pub mod feed_repository;
pub mod search_repository;

pub use feed_repository::{parse_feed, FeedRepository, FetchError, HttpFeedRepository};
pub use search_repository::{ItunesSearchRepository, SearchRepository};

use std::time::Duration;

const USER_AGENT: &str = concat!("podcast-feeds/", env!("CARGO_PKG_VERSION"));

/// Outbound client for feeds and search: whole-request deadline, gzip.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
}

/// Outbound client for the audio proxy.
///
/// Only connecting is bounded: bodies stream for as long as the listener
/// keeps reading. No content decoding, so byte ranges pass through untouched.
pub fn build_streaming_client(connect_timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .gzip(false)
        .user_agent(USER_AGENT)
        .build()
}
