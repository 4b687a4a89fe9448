#[derive(Debug, thiserror::Error)]
pub enum SearchServiceError {
    #[error("{0}")]
    Dependency(String),
    #[error("{0}")]
    Invalid(String),
}
