//! Login requests and the verifiers that check them.

use chrono::{DateTime, Local};
use entities::{User, UserRole};

use crate::{mock_profile, AuthResult, DEMO_SECRET};

/// A login attempt as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRequest<'a> {
    /// Username or email. Matched verbatim.
    pub identifier: &'a str,
    /// Password. Matched verbatim.
    pub secret: &'a str,
    /// Role the user asked to sign in as.
    pub role: UserRole,
}

impl<'a> LoginRequest<'a> {
    /// Creates a new login request.
    pub fn new(identifier: &'a str, secret: &'a str, role: UserRole) -> Self {
        Self {
            identifier,
            secret,
            role,
        }
    }
}

/// Checks login attempts and produces the user record for accepted ones.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the authenticated user, or `None` if the attempt is rejected.
    ///
    /// Unknown identifier, wrong secret and role mismatch are all `None`.
    fn authenticate(&self, request: &LoginRequest<'_>) -> AuthResult<Option<User>>;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&LoginRequest<'_>) -> AuthResult<Option<User>> + Send + Sync,
{
    fn authenticate(&self, request: &LoginRequest<'_>) -> AuthResult<Option<User>> {
        self(request)
    }
}

/// A static `(identifier, secret, role)` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Username or email the entry accepts.
    pub identifier: String,
    /// Password the entry accepts.
    pub secret: String,
    /// The only role this entry may sign in as.
    pub role: UserRole,
}

impl Credential {
    /// Creates a new credential entry.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>, role: UserRole) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            role,
        }
    }

    /// Exact, case-sensitive match on all three parts.
    pub fn matches(&self, request: &LoginRequest<'_>) -> bool {
        self.identifier == request.identifier
            && self.secret == request.secret
            && self.role == request.role
    }
}

/// Source of the login timestamp.
pub type Clock = fn() -> DateTime<Local>;

/// Verifier over a fixed credential list.
///
/// Accepted logins receive the demo profile for the requested role. This is
/// a stand-in for a real identity provider and does no hashing.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    credentials: Vec<Credential>,
    clock: Clock,
}

impl StaticCredentialVerifier {
    /// Creates a verifier over the given entries.
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self {
            credentials,
            clock: Local::now,
        }
    }

    /// Creates a verifier over the four built-in demo accounts.
    pub fn demo() -> Self {
        Self::new(vec![
            Credential::new("admin", DEMO_SECRET, UserRole::Customer),
            Credential::new("worker", DEMO_SECRET, UserRole::Worker),
            Credential::new("sharath", DEMO_SECRET, UserRole::Customer),
            Credential::new("sharath", DEMO_SECRET, UserRole::Worker),
        ])
    }

    /// Replaces the clock used for the `lastLogin` timestamp.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the configured entries.
    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::demo()
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn authenticate(&self, request: &LoginRequest<'_>) -> AuthResult<Option<User>> {
        if !self.credentials.iter().any(|c| c.matches(request)) {
            tracing::debug!(identifier = %request.identifier, role = %request.role, "No matching credential");
            return Ok(None);
        }

        Ok(Some(mock_profile(request.identifier, request.role, (self.clock)())))
    }
}
