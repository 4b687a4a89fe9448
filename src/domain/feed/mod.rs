pub mod error;
pub mod model;
pub mod normalizer;
pub mod service;
pub mod url_guard;

pub use error::FeedServiceError;
pub use model::{
    Enclosure, Enclosures, FeedItem, FeedMeta, FeedRequest, FeedView, FeedViewParams, ParsedFeed,
    DEFAULT_SIZE,
};
pub use normalizer::normalize;
pub use service::{FeedService, FeedServiceApi};
pub use url_guard::decode_feed_url;

/// Message shown when the feed route is called without a `url`.
pub const INVALID_RSS_URL: &str = "Invalid RSS URL";
