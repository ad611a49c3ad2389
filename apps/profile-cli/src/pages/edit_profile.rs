//! Edit profile page.

use std::fmt;

use entities::{ProfileUpdate, User};

use super::{field, heading};
use crate::cli::ProfileFields;
use crate::error::{CliError, CliResult};

/// The edit form, prefilled with the current values.
#[derive(Debug, Clone, Copy)]
pub struct EditProfileForm<'a> {
    user: &'a User,
}

impl<'a> EditProfileForm<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }

    /// Checks the submitted fields against the user's role and turns them
    /// into an update. Customers have no worker section to submit.
    pub fn submit(&self, fields: ProfileFields) -> CliResult<ProfileUpdate> {
        let worker_fields = fields.worker_fields_given();
        if !self.user.role().is_worker() && !worker_fields.is_empty() {
            return Err(CliError::WorkerOnlyFields(worker_fields));
        }
        Ok(fields.into_update())
    }
}

impl fmt::Display for EditProfileForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.user.profile;

        writeln!(f, "Edit Profile")?;
        writeln!(f, "Update your personal information with the flags below.")?;

        heading(f, "Personal Information")?;
        field(f, "--name", profile.name.as_deref())?;
        field(f, "--email", Some(self.user.email.as_str()))?;
        field(f, "--phone", profile.phone.as_deref())?;
        field(f, "--location", profile.location.as_deref())?;
        field(f, "--date-of-birth", profile.date_of_birth.as_deref())?;
        field(f, "--gender", profile.gender.as_deref())?;
        field(f, "--address", profile.address.as_deref())?;

        if let Some(worker) = self.user.worker_profile() {
            heading(f, "Work Information")?;
            field(f, "--designation", worker.designation.as_deref())?;
            field(f, "--department", worker.department.as_deref())?;
            field(f, "--work-location", worker.work_location.as_deref())?;
            field(f, "--shift-timing", worker.shift_timing.as_deref())?;
            field(f, "--supervisor", worker.supervisor.as_deref())?;
            field(f, "--work-status", worker.work_status.map(|s| s.as_str()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use entities::{WorkStatus, WorkerProfile};

    use super::*;

    #[test]
    fn test_customer_cannot_submit_worker_fields() {
        let user = User::customer("admin");
        let fields = ProfileFields {
            name: Some("A".to_string()),
            supervisor: Some("B".to_string()),
            work_status: Some(WorkStatus::Training),
            ..Default::default()
        };

        match EditProfileForm::new(&user).submit(fields) {
            Err(CliError::WorkerOnlyFields(names)) => {
                assert_eq!(names, vec!["supervisor", "workStatus"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_worker_submission() {
        let user = User::worker("worker", WorkerProfile::default());
        let fields = ProfileFields {
            shift_timing: Some("7 AM - 4 PM".to_string()),
            ..Default::default()
        };

        let update = EditProfileForm::new(&user).submit(fields).unwrap();
        assert_eq!(update.worker.shift_timing.as_deref(), Some("7 AM - 4 PM"));
        assert!(update.profile.name.is_none());
    }

    #[test]
    fn test_form_hides_worker_section_for_customers() {
        let customer = User::customer("admin");
        let text = EditProfileForm::new(&customer).to_string();
        assert!(text.contains("--name"));
        assert!(!text.contains("Work Information"));

        let worker = User::worker("worker", WorkerProfile::default());
        let text = EditProfileForm::new(&worker).to_string();
        assert!(text.contains("--work-status"));
    }
}
