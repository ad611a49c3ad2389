//! Command-line interface definition.

use clap::{Args, Parser, Subcommand, ValueEnum};
use entities::{CommonProfile, ProfileUpdate, UserRole, WorkStatus, WorkerProfile};

use crate::config::StorageBackend;

/// WorkerConnect profile manager
#[derive(Debug, Parser)]
#[command(name = "workerconnect", version, about)]
pub struct Cli {
    /// Storage backend, overriding the configuration
    #[arg(long, global = true, value_enum)]
    pub storage: Option<StorageBackend>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with a username, password and role
    Login {
        /// Username or email
        identifier: String,
        #[arg(long, short)]
        password: String,
        /// customer or worker
        #[arg(long, short)]
        role: UserRole,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the profile of the signed-in user
    Show,
    /// Print whether a user is signed in
    Status,
    /// Edit the signed-in user's profile
    Edit(ProfileFields),
    /// Create a profile and sign in as it
    Register {
        /// customer or worker
        #[arg(long)]
        role: Option<UserRole>,
        #[command(flatten)]
        fields: ProfileFields,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// The fields of the edit-profile form.
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub date_of_birth: Option<String>,
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,
    #[arg(long)]
    pub address: Option<String>,

    /// Worker only
    #[arg(long)]
    pub designation: Option<String>,
    /// Worker only
    #[arg(long)]
    pub department: Option<String>,
    /// Worker only
    #[arg(long)]
    pub work_location: Option<String>,
    /// Worker only
    #[arg(long)]
    pub shift_timing: Option<String>,
    /// Worker only
    #[arg(long)]
    pub supervisor: Option<String>,
    /// Worker only: Active, "On Leave", Training or Inactive
    #[arg(long)]
    pub work_status: Option<WorkStatus>,
}

impl ProfileFields {
    /// Names of the worker-only fields that were supplied.
    pub fn worker_fields_given(&self) -> Vec<&'static str> {
        [
            ("designation", self.designation.is_some()),
            ("department", self.department.is_some()),
            ("workLocation", self.work_location.is_some()),
            ("shiftTiming", self.shift_timing.is_some()),
            ("supervisor", self.supervisor.is_some()),
            ("workStatus", self.work_status.is_some()),
        ]
        .into_iter()
        .filter(|(_, given)| *given)
        .map(|(name, _)| name)
        .collect()
    }

    /// Returns true if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.clone().into_update().is_empty()
    }

    /// Converts the supplied fields into a partial user.
    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate {
            email: self.email,
            role: None,
            profile: CommonProfile {
                name: self.name,
                phone: self.phone,
                location: self.location,
                profile_picture: None,
                date_of_birth: self.date_of_birth,
                gender: self.gender.map(|g| g.as_str().to_string()),
                address: self.address,
            },
            worker: WorkerProfile {
                designation: self.designation,
                department: self.department,
                work_location: self.work_location,
                shift_timing: self.shift_timing,
                supervisor: self.supervisor,
                work_status: self.work_status,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from([
            "workerconnect", "login", "worker", "--password", "12345678", "--role", "worker",
        ])
        .unwrap();

        match cli.command {
            Command::Login {
                identifier,
                password,
                role,
            } => {
                assert_eq!(identifier, "worker");
                assert_eq!(password, "12345678");
                assert_eq!(role, UserRole::Worker);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.storage.is_none());
    }

    #[test]
    fn test_login_requires_known_role() {
        let result = Cli::try_parse_from([
            "workerconnect", "login", "admin", "-p", "12345678", "-r", "admin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from([
            "workerconnect",
            "--storage",
            "keyring",
            "edit",
            "--name",
            "Asha Rao",
            "--gender",
            "female",
            "--work-status",
            "On Leave",
        ])
        .unwrap();

        assert_eq!(cli.storage, Some(StorageBackend::Keyring));
        let Command::Edit(fields) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(fields.worker_fields_given(), vec!["workStatus"]);

        let update = fields.into_update();
        assert_eq!(update.profile.name.as_deref(), Some("Asha Rao"));
        assert_eq!(update.profile.gender.as_deref(), Some("Female"));
        assert_eq!(update.worker.work_status, Some(WorkStatus::OnLeave));
        assert!(update.email.is_none());
    }

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "workerconnect",
            "register",
            "--email",
            "asha@example.com",
            "--role",
            "worker",
        ])
        .unwrap();

        let Command::Register { role, fields } = cli.command else {
            panic!("expected register");
        };
        assert_eq!(role, Some(UserRole::Worker));
        assert_eq!(fields.email.as_deref(), Some("asha@example.com"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
