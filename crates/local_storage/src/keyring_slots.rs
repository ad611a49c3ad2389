//! Keyring-backed slot store for Windows and Linux
//!
//! Each slot is one credential entry under the store's service name, with the
//! slot name as the entry's user. Values must fit the platform's secret size
//! limit, which a serialized profile does.

use keyring::Entry;

use crate::{validate_slot_name, SlotStore, StorageError, StorageResult, KEYCHAIN_SERVICE};

/// Slot store backed by the OS credential store
#[derive(Debug, Clone)]
pub struct KeyringSlotStore {
    service: String,
}

impl KeyringSlotStore {
    /// Creates a store under the default service name
    pub fn new() -> Self {
        Self::with_service(KEYCHAIN_SERVICE)
    }

    /// Creates a store under a custom service name
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Returns the service name entries are stored under
    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, slot: &str) -> StorageResult<Entry> {
        validate_slot_name(slot)?;
        Entry::new(&self.service, slot).map_err(|e| {
            StorageError::Keychain(format!("Failed to open entry for slot {slot}: {e}"))
        })
    }
}

impl Default for KeyringSlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStore for KeyringSlotStore {
    fn get(&self, slot: &str) -> StorageResult<Option<String>> {
        match self.entry(slot)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StorageError::Keychain(e.to_string())),
        }
    }

    fn set(&self, slot: &str, value: &str) -> StorageResult<()> {
        self.entry(slot)?
            .set_password(value)
            .map_err(|e| StorageError::Keychain(e.to_string()))?;

        tracing::debug!(slot, service = %self.service, "Wrote keyring slot");
        Ok(())
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        match self.entry(slot)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {
                tracing::debug!(slot, service = %self.service, "Removed keyring slot");
                Ok(())
            }
            Err(e) => Err(StorageError::Keychain(e.to_string())),
        }
    }
}

/// Creates the default keyring-backed slot store
pub fn create_keyring_store() -> KeyringSlotStore {
    KeyringSlotStore::new()
}
