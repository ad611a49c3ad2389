//! User profile entity definitions for WorkerConnect.
//!
//! This crate defines the user record shared by the session store, the
//! credential verifiers and the profile pages:
//! - `User` with its role-specific `UserKind`
//! - `ProfileUpdate`, the partial record used for edits and registration

mod role;
mod update;
mod user;

pub use role::*;
pub use update::*;
pub use user::*;
