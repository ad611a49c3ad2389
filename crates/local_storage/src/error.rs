//! Storage error types

use thiserror::Error;

/// Errors that can occur during slot operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Slot name cannot be used as a storage key
    #[error("Invalid slot name: {0:?}")]
    InvalidSlot(String),

    /// Filesystem error
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Keychain access error
    #[error("Keychain error: {0}")]
    Keychain(String),

    /// Lock poisoned by a panicking writer
    #[error("Storage lock poisoned: {0}")]
    Poisoned(String),
}

impl StorageError {
    /// Creates an IO error for the given path
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
