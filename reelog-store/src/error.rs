//! Error types for the local store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// Malformed stored JSON is deliberately NOT represented here: typed readers
/// degrade to `None` or an empty collection instead of failing, so only
/// database-level problems surface as errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization error while writing a value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
