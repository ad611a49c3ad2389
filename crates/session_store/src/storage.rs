//! Typed persistence for the signed-in user.

use entities::User;
use local_storage::{SlotStore, SESSION_SLOT};

use crate::SessionResult;

/// Where the session store keeps the current user between runs.
pub trait SessionStorage {
    /// Reads the persisted user, if any.
    fn load(&self) -> SessionResult<Option<User>>;

    /// Overwrites the persisted user.
    fn save(&self, user: &User) -> SessionResult<()>;

    /// Removes the persisted user. Clearing an empty storage is not an error.
    fn clear(&self) -> SessionResult<()>;
}

/// Stores the user as JSON in a single named slot.
#[derive(Debug)]
pub struct SlotSessionStorage<S> {
    slots: S,
    slot: String,
}

impl<S: SlotStore> SlotSessionStorage<S> {
    /// Uses the default `workerConnect_user` slot.
    pub fn new(slots: S) -> Self {
        Self::with_slot(slots, SESSION_SLOT)
    }

    /// Uses a custom slot name.
    pub fn with_slot(slots: S, slot: impl Into<String>) -> Self {
        Self {
            slots,
            slot: slot.into(),
        }
    }

    /// Returns the slot name.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Returns the underlying slot store.
    pub fn slots(&self) -> &S {
        &self.slots
    }
}

impl<S: SlotStore> SessionStorage for SlotSessionStorage<S> {
    fn load(&self) -> SessionResult<Option<User>> {
        let Some(raw) = self.slots.get(&self.slot)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                // Unreadable records are discarded so the next start is clean
                tracing::warn!(slot = %self.slot, error = %e, "Discarding malformed session record");
                self.slots.remove(&self.slot)?;
                Ok(None)
            }
        }
    }

    fn save(&self, user: &User) -> SessionResult<()> {
        let raw = serde_json::to_string(user)?;
        self.slots.set(&self.slot, &raw)?;
        tracing::debug!(slot = %self.slot, bytes = raw.len(), "Persisted session");
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        self.slots.remove(&self.slot)?;
        tracing::debug!(slot = %self.slot, "Cleared persisted session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use entities::{CommonProfile, WorkerProfile};
    use local_storage::{FileSlotStore, MemorySlotStore};

    use super::*;

    fn sample_user() -> User {
        User::worker(
            "worker",
            WorkerProfile {
                worker_id: Some("WK001".to_string()),
                rating: Some(4.8),
                ..Default::default()
            },
        )
        .with_profile(CommonProfile {
            name: Some("Sharath Singh".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_save_load_clear() {
        let storage = SlotSessionStorage::new(MemorySlotStore::new());
        assert_eq!(storage.load().unwrap(), None);

        let user = sample_user();
        storage.save(&user).unwrap();
        assert_eq!(storage.load().unwrap(), Some(user));

        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
        storage.clear().unwrap();
    }

    #[test]
    fn test_record_uses_flat_camel_case() {
        let storage = SlotSessionStorage::new(MemorySlotStore::new());
        storage.save(&sample_user()).unwrap();

        let raw = storage.slots().get(SESSION_SLOT).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["role"], "worker");
        assert_eq!(value["workerId"], "WK001");
        assert_eq!(value["name"], "Sharath Singh");
    }

    #[test]
    fn test_malformed_record_is_discarded() {
        let slots = MemorySlotStore::new();
        slots.set(SESSION_SLOT, "{not json").unwrap();
        let storage = SlotSessionStorage::new(slots);

        assert_eq!(storage.load().unwrap(), None);
        assert!(!storage.slots().exists(SESSION_SLOT).unwrap());
    }

    #[test]
    fn test_stale_record_shape_is_discarded() {
        let slots = MemorySlotStore::new();
        slots
            .set(SESSION_SLOT, r#"{"email":"admin","role":"admin"}"#)
            .unwrap();
        let storage = SlotSessionStorage::new(slots);

        assert_eq!(storage.load().unwrap(), None);
        assert!(!storage.slots().exists(SESSION_SLOT).unwrap());
    }

    #[test]
    fn test_record_with_missing_fields_is_kept() {
        let slots = MemorySlotStore::new();
        slots
            .set(SESSION_SLOT, r#"{"email":"admin","role":"customer","legacy":true}"#)
            .unwrap();
        let storage = SlotSessionStorage::new(slots);

        assert_eq!(storage.load().unwrap(), Some(User::customer("admin")));
    }

    #[test]
    fn test_record_with_empty_work_status_is_kept() {
        let slots = MemorySlotStore::new();
        slots
            .set(
                SESSION_SLOT,
                r#"{"email":"worker","role":"worker","name":"Sharath Singh","workStatus":"","gender":""}"#,
            )
            .unwrap();
        let storage = SlotSessionStorage::new(slots);

        let user = storage.load().unwrap().unwrap();
        assert_eq!(user.display_name(), "Sharath Singh");
        assert_eq!(user.profile.gender.as_deref(), Some(""));
        assert_eq!(user.worker_profile().unwrap().work_status, None);
        assert!(storage.slots().exists(SESSION_SLOT).unwrap());
    }

    #[test]
    fn test_record_with_unknown_work_status_is_kept() {
        let slots = MemorySlotStore::new();
        slots
            .set(
                SESSION_SLOT,
                r#"{"email":"worker","role":"worker","workerId":"WK001","workStatus":"Suspended"}"#,
            )
            .unwrap();
        let storage = SlotSessionStorage::new(slots);

        let user = storage.load().unwrap().unwrap();
        let worker = user.worker_profile().unwrap();
        assert_eq!(worker.worker_id.as_deref(), Some("WK001"));
        assert_eq!(worker.work_status, None);
    }

    #[test]
    fn test_custom_slot_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotSessionStorage::with_slot(FileSlotStore::new(dir.path()), "profile_v2");

        storage.save(&sample_user()).unwrap();
        assert_eq!(storage.slot(), "profile_v2");
        assert!(dir.path().join("profile_v2.json").exists());
    }
}
