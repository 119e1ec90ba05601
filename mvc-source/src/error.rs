/// Error types for loading the collisions dataset
use thiserror::Error;

/// Main error type for loader and normalizer operations.
///
/// Every variant aborts the interaction that triggered the load; nothing is
/// retried or partially rendered.
#[derive(Error, Debug)]
pub enum CollisionError {
    /// Network failure or non-success response from the remote source
    #[error("Collision source unavailable: {0}")]
    SourceUnavailable(String),

    /// An expected column is absent from the fetched header
    #[error("Schema mismatch: expected column `{column}` is missing")]
    SchemaMismatch { column: String },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for CollisionError {
    fn from(e: reqwest::Error) -> Self {
        CollisionError::SourceUnavailable(e.to_string())
    }
}

/// Type alias for Results using CollisionError
pub type Result<T> = std::result::Result<T, CollisionError>;
