//! Session store error types.

use thiserror::Error;

/// Errors that can occur during session operations.
///
/// Rejected credentials and edits without a session are not errors; see the
/// individual operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The credential verifier failed.
    #[error("Auth error: {0}")]
    Auth(#[from] auth::AuthError),

    /// The backing slot store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] local_storage::StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
