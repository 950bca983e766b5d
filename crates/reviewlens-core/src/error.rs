//! Error types for ReviewLens

/// Result type alias using ReviewLens's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ReviewLens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Batch validation errors (no usable rows, missing required field)
    #[error("batch error: {0}")]
    Batch(String),

    /// Lexicon snapshot errors (corrupt or malformed snapshot; fatal at startup)
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Upload-history store errors (non-fatal to classification)
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new batch validation error
    pub fn batch(msg: impl Into<String>) -> Self {
        Self::Batch(msg.into())
    }

    /// Create a new snapshot error
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// Create a new persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
