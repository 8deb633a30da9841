use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),

    #[error("Duplicate route pattern: {0}")]
    DuplicateRoute(String),

    #[error("Root navigation link must use exact matching: {0}")]
    RootLinkRequiresExactMatch(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
