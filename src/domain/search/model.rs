use serde::{Deserialize, Serialize};

/// One podcast returned by the search directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_view_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url100: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url600: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_genre_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u32>,
}

/// Raw answer of the search directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchListing {
    pub result_count: u32,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub term: String,
    pub debug: bool,
    pub version: String,
}

/// Template data for the `search` and `search-debug` views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub term: String,
    pub layout: String,
    pub result_count: u32,
    pub results: Vec<SearchHit>,
}
