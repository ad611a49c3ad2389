//! CLI error types.

use session_store::SessionError;

use crate::config::{ConfigError, StorageBackend};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Session store failure.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Configuration failure.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The command needs a signed-in user.
    #[error("Authentication required: run `workerconnect login` first")]
    AuthenticationRequired,

    /// Credentials did not match any account.
    #[error("Invalid username, password or role")]
    LoginRejected,

    /// Worker-only fields were supplied for a customer.
    #[error("Only worker profiles have these fields: {}", .0.join(", "))]
    WorkerOnlyFields(Vec<&'static str>),

    /// Storage backend not built for this platform.
    #[error("Storage backend `{0}` is not available on this platform")]
    UnsupportedBackend(StorageBackend),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
