use serde::Serialize;

/// Data for the `error` template.
///
/// Built whenever a feed or search request cannot be served; always rendered
/// with status 400.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorView {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub layout: String,
}

impl ErrorView {
    pub fn new(message: impl Into<String>, layout: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            url: None,
            layout: layout.into(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
