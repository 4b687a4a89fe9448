pub mod error;
pub mod model;
pub mod service;

pub use error::SearchServiceError;
pub use model::{SearchHit, SearchListing, SearchRequest, SearchResult};
pub use service::{SearchService, SearchServiceApi};

/// Message shown when the search term is missing or blank.
pub const INVALID_SEARCH_TERM: &str = "Invalid search term";
