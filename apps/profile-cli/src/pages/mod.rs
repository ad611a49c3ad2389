//! Text renderings of the profile pages.

mod edit_profile;
mod profile;
mod worker_profile;

use std::fmt;

use entities::{User, UserKind};

pub use edit_profile::*;
pub use profile::*;
pub use worker_profile::*;

use crate::error::{CliError, CliResult};

/// Placeholder for unset fields.
pub const NOT_PROVIDED: &str = "Not provided";

/// The profile page: login prompt, customer profile or worker profile.
#[derive(Debug)]
pub enum ProfilePage<'a> {
    Login,
    Customer(CustomerProfileView<'a>),
    Worker(WorkerProfileView<'a>),
}

impl<'a> ProfilePage<'a> {
    /// Picks the page for the current session.
    pub fn for_user(user: Option<&'a User>) -> Self {
        match user {
            None => Self::Login,
            Some(user) => match &user.kind {
                UserKind::Worker(worker) => Self::Worker(WorkerProfileView::new(user, worker)),
                UserKind::Customer => Self::Customer(CustomerProfileView::new(user)),
            },
        }
    }
}

impl fmt::Display for ProfilePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => {
                writeln!(f, "You are not logged in.")?;
                write!(
                    f,
                    "Log in with: workerconnect login <username> --password <password> --role <customer|worker>"
                )
            }
            Self::Customer(view) => view.fmt(f),
            Self::Worker(view) => view.fmt(f),
        }
    }
}

/// Returns the signed-in user or fails with `AuthenticationRequired`.
pub fn require_user(user: Option<&User>) -> CliResult<&User> {
    user.ok_or(CliError::AuthenticationRequired)
}

/// Avatar fallback: the first letter of each word of the name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.len()))
}

fn field(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    let value = value.filter(|v| !v.is_empty()).unwrap_or(NOT_PROVIDED);
    writeln!(f, "  {label:<16} {value}")
}

fn contact_block(f: &mut fmt::Formatter<'_>, user: &User) -> fmt::Result {
    let profile = &user.profile;
    field(f, "Email", Some(user.email.as_str()))?;
    field(f, "Phone", profile.phone.as_deref())?;
    field(f, "Location", profile.location.as_deref())?;
    field(f, "Date of Birth", profile.date_of_birth.as_deref())?;
    field(f, "Gender", profile.gender.as_deref())?;
    field(f, "Address", profile.address.as_deref())
}
