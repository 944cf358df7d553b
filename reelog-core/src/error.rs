//! Error types for the dashboard core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations.
///
/// "Remote unavailable" never appears here: the remote client absorbs it and
/// the engine falls back to local data. The only hard failures are a missing
/// user identity and the local database itself.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No active user session. A user-facing precondition failure: the
    /// operation was aborted before any store mutation.
    #[error("no active user session")]
    NoCredential,

    /// Local store failure.
    #[error("store error: {0}")]
    Store(#[from] reelog_store::StoreError),
}
