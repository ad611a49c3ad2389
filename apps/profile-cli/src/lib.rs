//! WorkerConnect profile CLI
//!
//! The page layer over the session store: it gathers input, calls the
//! session operations and renders the signed-in user.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pages;

use auth::StaticCredentialVerifier;
use local_storage::{FileSlotStore, SlotStore};
use session_store::{SessionStore, SlotSessionStorage};

use crate::config::{AppConfig, StorageBackend};
use crate::error::CliResult;

/// Session store as wired by the binary.
pub type AppSession =
    SessionStore<StaticCredentialVerifier, SlotSessionStorage<Box<dyn SlotStore>>>;

/// Opens the session against the configured storage backend.
pub fn open_session(config: &AppConfig) -> CliResult<AppSession> {
    let slots = create_slot_store(config)?;
    Ok(SessionStore::open(
        StaticCredentialVerifier::demo(),
        SlotSessionStorage::new(slots),
    ))
}

fn create_slot_store(config: &AppConfig) -> CliResult<Box<dyn SlotStore>> {
    match config.storage {
        StorageBackend::File => Ok(Box::new(FileSlotStore::new(&config.data_dir))),
        StorageBackend::Keyring => keyring_slot_store(),
    }
}

#[cfg(any(target_os = "windows", target_os = "linux"))]
fn keyring_slot_store() -> CliResult<Box<dyn SlotStore>> {
    Ok(Box::new(local_storage::create_keyring_store()))
}

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
fn keyring_slot_store() -> CliResult<Box<dyn SlotStore>> {
    Err(crate::error::CliError::UnsupportedBackend(
        StorageBackend::Keyring,
    ))
}

/// Initializes tracing with the given log level, writing to stderr.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use entities::UserRole;

    use super::*;

    #[test]
    fn test_file_session_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let mut session = open_session(&config).unwrap();
        assert!(session.login("admin", auth::DEMO_SECRET, UserRole::Customer).unwrap());

        let reopened = open_session(&config).unwrap();
        assert_eq!(reopened.user().map(|u| u.email.as_str()), Some("admin"));
    }
}
