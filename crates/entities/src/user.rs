//! User-related entity definitions.

use serde::{Deserialize, Serialize};

use crate::{UserRole, WorkStatus};

/// Profile attributes shared by every role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonProfile {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// City or area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Attributes only a worker carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    /// Trade, e.g. "Plumber".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    /// Years of experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Ordered list of skills. Replaced wholesale on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_timing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    /// Blank or unrecognized stored values read as unset.
    #[serde(
        default,
        deserialize_with = "crate::role::lenient_work_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_status: Option<WorkStatus>,
    /// Local time of the most recent login, formatted for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_cycle: Option<String>,
    /// Average review score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
}

impl WorkerProfile {
    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the attributes that are not set, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("workerId", self.worker_id.is_some()),
            ("profession", self.profession.is_some()),
            ("experience", self.experience.is_some()),
            ("bio", self.bio.is_some()),
            ("skills", self.skills.is_some()),
            ("designation", self.designation.is_some()),
            ("department", self.department.is_some()),
            ("workLocation", self.work_location.is_some()),
            ("joiningDate", self.joining_date.is_some()),
            ("shiftTiming", self.shift_timing.is_some()),
            ("supervisor", self.supervisor.is_some()),
            ("workStatus", self.work_status.is_some()),
            ("lastLogin", self.last_login.is_some()),
            ("salary", self.salary.is_some()),
            ("paymentCycle", self.payment_cycle.is_some()),
            ("rating", self.rating.is_some()),
            ("totalReviews", self.total_reviews.is_some()),
        ];
        fields
            .into_iter()
            .filter(|(_, set)| !set)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Role-specific part of a user.
///
/// Serialized through the `role` key so the stored record stays a single flat
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum UserKind {
    Customer,
    Worker(WorkerProfile),
}

/// The authenticated principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Email address, used as the login identifier.
    #[serde(default)]
    pub email: String,
    /// Attributes shared by all roles.
    #[serde(flatten)]
    pub profile: CommonProfile,
    /// Role and role-specific attributes.
    #[serde(flatten)]
    pub kind: UserKind,
}

impl User {
    /// Creates a customer with an empty profile.
    pub fn customer(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            profile: CommonProfile::default(),
            kind: UserKind::Customer,
        }
    }

    /// Creates a worker with the given worker attributes.
    pub fn worker(email: impl Into<String>, worker: WorkerProfile) -> Self {
        Self {
            email: email.into(),
            profile: CommonProfile::default(),
            kind: UserKind::Worker(worker),
        }
    }

    /// Sets the shared profile attributes.
    pub fn with_profile(mut self, profile: CommonProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Returns the role derived from the user kind.
    pub fn role(&self) -> UserRole {
        match self.kind {
            UserKind::Customer => UserRole::Customer,
            UserKind::Worker(_) => UserRole::Worker,
        }
    }

    /// Returns the worker attributes, if this user is a worker.
    pub fn worker_profile(&self) -> Option<&WorkerProfile> {
        match &self.kind {
            UserKind::Worker(worker) => Some(worker),
            UserKind::Customer => None,
        }
    }

    /// Returns the display name, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.profile
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}
