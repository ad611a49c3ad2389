//! Partial user records and the shallow-merge rules applied to them.

use serde::{Deserialize, Serialize};

use crate::{CommonProfile, User, UserKind, UserRole, WorkerProfile};

/// A partial user: every supplied field overwrites, every absent field is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(flatten)]
    pub profile: CommonProfile,
    #[serde(flatten)]
    pub worker: WorkerProfile,
}

/// Result of merging an update into a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    /// The merged user.
    pub user: User,
    /// True if worker attributes were supplied but the user is not a worker.
    pub dropped_worker_fields: bool,
}

impl ProfileUpdate {
    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.profile.name = Some(name.into());
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Returns true if the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds a complete user out of a partial record.
    ///
    /// A missing email becomes empty and a missing role means customer; the
    /// role is never inferred from which fields are present.
    pub fn into_user(self) -> Merged {
        let role = self.role.unwrap_or_default();
        let dropped_worker_fields = !role.is_worker() && !self.worker.is_empty();
        let kind = match role {
            UserRole::Customer => UserKind::Customer,
            UserRole::Worker => UserKind::Worker(self.worker),
        };
        Merged {
            user: User {
                email: self.email.unwrap_or_default(),
                profile: self.profile,
                kind,
            },
            dropped_worker_fields,
        }
    }
}

impl From<User> for ProfileUpdate {
    fn from(user: User) -> Self {
        let role = user.role();
        let worker = match user.kind {
            UserKind::Worker(worker) => worker,
            UserKind::Customer => WorkerProfile::default(),
        };
        Self {
            email: Some(user.email),
            role: Some(role),
            profile: user.profile,
            worker,
        }
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

impl CommonProfile {
    /// Overwrites every attribute that `update` sets.
    pub fn merge(&mut self, update: CommonProfile) {
        overwrite(&mut self.name, update.name);
        overwrite(&mut self.phone, update.phone);
        overwrite(&mut self.location, update.location);
        overwrite(&mut self.profile_picture, update.profile_picture);
        overwrite(&mut self.date_of_birth, update.date_of_birth);
        overwrite(&mut self.gender, update.gender);
        overwrite(&mut self.address, update.address);
    }
}

impl WorkerProfile {
    /// Overwrites every attribute that `update` sets.
    pub fn merge(&mut self, update: WorkerProfile) {
        overwrite(&mut self.worker_id, update.worker_id);
        overwrite(&mut self.profession, update.profession);
        overwrite(&mut self.experience, update.experience);
        overwrite(&mut self.bio, update.bio);
        overwrite(&mut self.skills, update.skills);
        overwrite(&mut self.designation, update.designation);
        overwrite(&mut self.department, update.department);
        overwrite(&mut self.work_location, update.work_location);
        overwrite(&mut self.joining_date, update.joining_date);
        overwrite(&mut self.shift_timing, update.shift_timing);
        overwrite(&mut self.supervisor, update.supervisor);
        overwrite(&mut self.work_status, update.work_status);
        overwrite(&mut self.last_login, update.last_login);
        overwrite(&mut self.salary, update.salary);
        overwrite(&mut self.payment_cycle, update.payment_cycle);
        overwrite(&mut self.rating, update.rating);
        overwrite(&mut self.total_reviews, update.total_reviews);
    }
}

impl User {
    /// Returns a new user equal to `self` shallow-merged with `update`.
    ///
    /// A role change is honored: becoming a worker starts from an empty worker
    /// profile, becoming a customer drops the worker profile.
    pub fn merged(&self, update: ProfileUpdate) -> Merged {
        let mut user = self.clone();
        overwrite_string(&mut user.email, update.email);
        user.profile.merge(update.profile);

        let target = update.role.unwrap_or_else(|| self.role());
        let mut dropped_worker_fields = false;
        user.kind = match (user.kind, target) {
            (UserKind::Worker(mut worker), UserRole::Worker) => {
                worker.merge(update.worker);
                UserKind::Worker(worker)
            }
            (UserKind::Customer, UserRole::Worker) => UserKind::Worker(update.worker),
            (_, UserRole::Customer) => {
                dropped_worker_fields = !update.worker.is_empty();
                UserKind::Customer
            }
        };

        Merged {
            user,
            dropped_worker_fields,
        }
    }
}

fn overwrite_string(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}
