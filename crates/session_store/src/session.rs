//! The session store: current user, login/logout and profile edits.

use std::fmt;

use auth::{CredentialVerifier, LoginRequest};
use entities::{ProfileUpdate, User, UserRole};

use crate::{SessionResult, SessionStorage};

/// Whether a user is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::Authenticated => f.write_str("authenticated"),
        }
    }
}

/// Holds the single active user and keeps the persisted copy in sync.
///
/// Every write goes to storage before the in-memory state changes, so a
/// storage failure leaves the session as it was.
pub struct SessionStore<V, S> {
    verifier: V,
    storage: S,
    user: Option<User>,
}

impl<V, S> SessionStore<V, S>
where
    V: CredentialVerifier,
    S: SessionStorage,
{
    /// Opens the store, restoring any persisted session.
    ///
    /// A missing, unreadable or malformed record starts the store anonymous.
    pub fn open(verifier: V, storage: S) -> Self {
        let user = match storage.load() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore session, starting anonymous");
                None
            }
        };

        if let Some(user) = &user {
            tracing::info!(email = %user.email, role = %user.role(), "Restored session");
        }

        Self {
            verifier,
            storage,
            user,
        }
    }

    /// Returns the signed-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns true if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Returns the persistence backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Signs in, replacing any current session.
    ///
    /// Returns `Ok(false)` and changes nothing when the credentials are
    /// rejected. `Err` means the verifier or the storage failed.
    pub fn login(&mut self, identifier: &str, secret: &str, role: UserRole) -> SessionResult<bool> {
        let request = LoginRequest::new(identifier, secret, role);
        let Some(user) = self.verifier.authenticate(&request)? else {
            tracing::info!(identifier, %role, "Login rejected");
            return Ok(false);
        };

        self.storage.save(&user)?;
        tracing::info!(email = %user.email, role = %user.role(), "Logged in");
        self.user = Some(user);
        Ok(true)
    }

    /// Signs out and removes the persisted session. Safe to call when
    /// already signed out.
    pub fn logout(&mut self) -> SessionResult<()> {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "Logged out");
        }
        self.storage.clear()
    }

    /// Shallow-merges `update` into the current user and persists the result.
    ///
    /// Does nothing without a signed-in user.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> SessionResult<()> {
        let Some(current) = &self.user else {
            tracing::debug!("Ignoring profile update without a session");
            return Ok(());
        };

        let merged = current.merged(update);
        if merged.dropped_worker_fields {
            tracing::warn!(email = %merged.user.email, "Dropped worker fields from a customer profile update");
        }

        self.storage.save(&merged.user)?;
        tracing::info!(email = %merged.user.email, "Profile updated");
        self.user = Some(merged.user);
        Ok(())
    }

    /// Signs in as the given record without checking any credentials.
    ///
    /// Always succeeds unless storage fails.
    pub fn register(&mut self, data: ProfileUpdate) -> SessionResult<bool> {
        let built = data.into_user();
        if built.dropped_worker_fields {
            tracing::warn!(email = %built.user.email, "Dropped worker fields from a customer registration");
        }

        self.storage.save(&built.user)?;
        tracing::info!(email = %built.user.email, role = %built.user.role(), "Registered");
        self.user = Some(built.user);
        Ok(true)
    }

    /// Tears the store down, returning its collaborators.
    pub fn into_parts(self) -> (V, S) {
        (self.verifier, self.storage)
    }
}

impl<V, S> fmt::Debug for SessionStore<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
