//! Authentication error types.

use thiserror::Error;

/// Errors a credential verifier can report.
///
/// A rejected login is not an error; verifiers return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The credential backend could not be reached.
    #[error("Credential backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
