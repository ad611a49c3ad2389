//! Session state and persistence for WorkerConnect.
//!
//! The `SessionStore` holds the signed-in user, authenticates through an
//! injected `CredentialVerifier`, and mirrors every change into a
//! `SessionStorage` so the session survives restarts.

mod error;
mod session;
mod storage;

pub use error::*;
pub use session::*;
pub use storage::*;
