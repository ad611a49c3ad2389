//! Named client-side storage slots for WorkerConnect
//!
//! A slot is a single named string value that survives process restarts,
//! the way a browser's local storage entry does. Backends:
//! - `MemorySlotStore` for tests and throwaway sessions
//! - `FileSlotStore` for one file per slot under a data directory
//! - `KeyringSlotStore` for the OS credential store (Windows and Linux)

mod error;
mod file;

#[cfg(any(target_os = "windows", target_os = "linux"))]
mod keyring_slots;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub use error::*;
pub use file::*;

#[cfg(any(target_os = "windows", target_os = "linux"))]
pub use keyring_slots::*;

/// Slot that holds the signed-in user
pub const SESSION_SLOT: &str = "workerConnect_user";

/// Service name for keychain storage
pub const KEYCHAIN_SERVICE: &str = "com.workerconnect.profile";

/// Trait for slot storage access
pub trait SlotStore: Send + Sync {
    /// Gets the value of a slot
    fn get(&self, slot: &str) -> StorageResult<Option<String>>;

    /// Overwrites the value of a slot
    fn set(&self, slot: &str, value: &str) -> StorageResult<()>;

    /// Removes a slot. Removing a missing slot is not an error.
    fn remove(&self, slot: &str) -> StorageResult<()>;

    /// Checks if a slot exists
    fn exists(&self, slot: &str) -> StorageResult<bool> {
        Ok(self.get(slot)?.is_some())
    }
}

impl<T: SlotStore + ?Sized> SlotStore for Box<T> {
    fn get(&self, slot: &str) -> StorageResult<Option<String>> {
        (**self).get(slot)
    }

    fn set(&self, slot: &str, value: &str) -> StorageResult<()> {
        (**self).set(slot, value)
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        (**self).remove(slot)
    }
}

impl<T: SlotStore + ?Sized> SlotStore for Arc<T> {
    fn get(&self, slot: &str) -> StorageResult<Option<String>> {
        (**self).get(slot)
    }

    fn set(&self, slot: &str, value: &str) -> StorageResult<()> {
        (**self).set(slot, value)
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        (**self).remove(slot)
    }
}

/// Rejects slot names that cannot double as a file name
pub fn validate_slot_name(slot: &str) -> StorageResult<()> {
    let invalid = slot.is_empty()
        || slot == "."
        || slot.contains("..")
        || slot.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StorageError::InvalidSlot(slot.to_string()));
    }
    Ok(())
}

/// In-memory slot store for testing
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Creates a new in-memory slot store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-populated slots
    pub fn with_slots(slots: HashMap<String, String>) -> Self {
        Self {
            slots: RwLock::new(slots),
        }
    }
}

impl SlotStore for MemorySlotStore {
    fn get(&self, slot: &str) -> StorageResult<Option<String>> {
        validate_slot_name(slot)?;
        let slots = self
            .slots
            .read()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> StorageResult<()> {
        validate_slot_name(slot)?;
        let mut slots = self
            .slots
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        validate_slot_name(slot)?;
        let mut slots = self
            .slots
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        slots.remove(slot);
        Ok(())
    }
}
