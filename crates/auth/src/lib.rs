//! Credential verification for WorkerConnect.
//!
//! This crate provides:
//! - The `CredentialVerifier` seam the session store authenticates through
//! - A static verifier backed by the built-in demo accounts
//! - The fixed profile those demo accounts sign in with

mod credentials;
mod error;
mod mock_profile;

pub use credentials::*;
pub use error::*;
pub use mock_profile::*;

/// Secret shared by every demo account.
pub const DEMO_SECRET: &str = "12345678";
