//! File-backed slot store: one file per slot under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{validate_slot_name, SlotStore, StorageError, StorageResult};

const SLOT_EXTENSION: &str = "json";

/// Slot store that keeps each slot in `<root>/<slot>.json`
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    root: PathBuf,
}

impl FileSlotStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default data directory, `<data_local_dir>/workerconnect`
    pub fn default_root() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("workerconnect"))
    }

    /// Returns the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file that backs a slot
    pub fn slot_path(&self, slot: &str) -> StorageResult<PathBuf> {
        validate_slot_name(slot)?;
        Ok(self.root.join(format!("{slot}.{SLOT_EXTENSION}")))
    }
}

impl SlotStore for FileSlotStore {
    fn get(&self, slot: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(slot)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }

    fn set(&self, slot: &str, value: &str) -> StorageResult<()> {
        let path = self.slot_path(slot)?;
        fs::create_dir_all(&self.root).map_err(|e| StorageError::io(&self.root, e))?;

        // Write next to the target and rename so readers never see half a record
        let staging = path.with_extension(format!("{SLOT_EXTENSION}.tmp"));
        fs::write(&staging, value).map_err(|e| StorageError::io(&staging, e))?;
        fs::rename(&staging, &path).map_err(|e| StorageError::io(&path, e))?;

        tracing::debug!(slot, path = %path.display(), "Wrote slot");
        Ok(())
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        let path = self.slot_path(slot)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(slot, path = %path.display(), "Removed slot");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()), // Already removed
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }
}
