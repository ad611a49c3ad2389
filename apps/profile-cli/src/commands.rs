//! Command handlers.

use auth::CredentialVerifier;
use session_store::{SessionState, SessionStorage, SessionStore};

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use crate::pages::{require_user, EditProfileForm, ProfilePage};

/// Runs a command against the session and returns the text to print.
pub fn execute<V, S>(command: Command, session: &mut SessionStore<V, S>) -> CliResult<String>
where
    V: CredentialVerifier,
    S: SessionStorage,
{
    match command {
        Command::Login {
            identifier,
            password,
            role,
        } => {
            if !session.login(&identifier, &password, role)? {
                return Err(CliError::LoginRejected);
            }
            let user = require_user(session.user())?;
            Ok(format!("Welcome, {}! Signed in as {}.", user.display_name(), user.role()))
        }
        Command::Logout => {
            session.logout()?;
            Ok("Logged out.".to_string())
        }
        Command::Show => Ok(ProfilePage::for_user(session.user()).to_string()),
        Command::Status => Ok(match (session.state(), session.user()) {
            (SessionState::Authenticated, Some(user)) => {
                format!("{}: {} ({})", SessionState::Authenticated, user.email, user.role())
            }
            (state, _) => state.to_string(),
        }),
        Command::Edit(fields) => {
            let user = require_user(session.user())?;
            let form = EditProfileForm::new(user);
            if fields.is_empty() {
                return Ok(form.to_string());
            }

            let update = form.submit(fields)?;
            session.update_profile(update)?;
            Ok("Profile Updated: your profile has been successfully updated.".to_string())
        }
        Command::Register { role, fields } => {
            let mut data = fields.into_update();
            data.role = role;
            session.register(data)?;

            let user = require_user(session.user())?;
            Ok(format!("Registered and signed in as {}.", user.display_name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auth::{StaticCredentialVerifier, DEMO_SECRET};
    use entities::{UserRole, WorkStatus};
    use local_storage::{MemorySlotStore, SlotStore, SESSION_SLOT};
    use session_store::SlotSessionStorage;

    use super::*;
    use crate::cli::ProfileFields;

    type TestSession = SessionStore<StaticCredentialVerifier, SlotSessionStorage<Arc<MemorySlotStore>>>;

    fn session() -> (TestSession, Arc<MemorySlotStore>) {
        let slots = Arc::new(MemorySlotStore::new());
        let session = SessionStore::open(
            StaticCredentialVerifier::demo(),
            SlotSessionStorage::new(Arc::clone(&slots)),
        );
        (session, slots)
    }

    fn login(identifier: &str, role: UserRole) -> Command {
        Command::Login {
            identifier: identifier.to_string(),
            password: DEMO_SECRET.to_string(),
            role,
        }
    }

    #[test]
    fn test_login_show_logout() {
        let (mut session, slots) = session();

        let out = execute(login("worker", UserRole::Worker), &mut session).unwrap();
        assert_eq!(out, "Welcome, Sharath Singh! Signed in as worker.");

        let page = execute(Command::Show, &mut session).unwrap();
        assert!(page.starts_with("Worker Profile"));

        let status = execute(Command::Status, &mut session).unwrap();
        assert_eq!(status, "authenticated: worker (worker)");

        execute(Command::Logout, &mut session).unwrap();
        assert!(!slots.exists(SESSION_SLOT).unwrap());
        assert_eq!(execute(Command::Status, &mut session).unwrap(), "anonymous");
        assert!(execute(Command::Show, &mut session)
            .unwrap()
            .starts_with("You are not logged in."));
    }

    #[test]
    fn test_rejected_login() {
        let (mut session, _) = session();
        let command = Command::Login {
            identifier: "admin".to_string(),
            password: DEMO_SECRET.to_string(),
            role: UserRole::Worker,
        };

        assert!(matches!(
            execute(command, &mut session),
            Err(CliError::LoginRejected)
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_edit_requires_session() {
        let (mut session, _) = session();
        let fields = ProfileFields {
            name: Some("X".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            execute(Command::Edit(fields), &mut session),
            Err(CliError::AuthenticationRequired)
        ));
    }

    #[test]
    fn test_edit_updates_profile() {
        let (mut session, _) = session();
        execute(login("sharath", UserRole::Worker), &mut session).unwrap();

        let form = execute(Command::Edit(ProfileFields::default()), &mut session).unwrap();
        assert!(form.starts_with("Edit Profile"));

        let fields = ProfileFields {
            location: Some("Pune".to_string()),
            work_status: Some(WorkStatus::Training),
            ..Default::default()
        };
        execute(Command::Edit(fields), &mut session).unwrap();

        let user = session.user().unwrap();
        assert_eq!(user.profile.location.as_deref(), Some("Pune"));
        assert_eq!(
            user.worker_profile().unwrap().work_status,
            Some(WorkStatus::Training)
        );
        assert_eq!(user.profile.name.as_deref(), Some("Sharath Singh"));
    }

    #[test]
    fn test_customer_edit_rejects_worker_fields() {
        let (mut session, _) = session();
        execute(login("admin", UserRole::Customer), &mut session).unwrap();
        let before = session.user().cloned();

        let fields = ProfileFields {
            department: Some("Ops".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            execute(Command::Edit(fields), &mut session),
            Err(CliError::WorkerOnlyFields(_))
        ));
        assert_eq!(session.user().cloned(), before);
    }

    #[test]
    fn test_register() {
        let (mut session, _) = session();
        let fields = ProfileFields {
            email: Some("asha@example.com".to_string()),
            name: Some("Asha Rao".to_string()),
            ..Default::default()
        };

        let out = execute(
            Command::Register {
                role: Some(UserRole::Worker),
                fields,
            },
            &mut session,
        )
        .unwrap();

        assert_eq!(out, "Registered and signed in as Asha Rao.");
        assert_eq!(session.user().unwrap().role(), UserRole::Worker);
    }
}
