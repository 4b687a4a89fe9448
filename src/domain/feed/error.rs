/// Errors surfaced by the feed pipeline.
///
/// Display is the bare upstream message: it is shown to the user as-is in the
/// error view.
#[derive(Debug, thiserror::Error)]
pub enum FeedServiceError {
    #[error("{0}")]
    Dependency(String),
    #[error("{0}")]
    Invalid(String),
}
