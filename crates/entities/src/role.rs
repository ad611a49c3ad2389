//! Role and work status definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Role a user signs in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Books services.
    #[default]
    Customer,
    /// Provides services.
    Worker,
}

impl UserRole {
    /// Converts the role to its wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Worker => "worker",
        }
    }

    /// Checks if this role is a worker
    pub fn is_worker(&self) -> bool {
        matches!(self, Self::Worker)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}` (expected `customer` or `worker`)")]
pub struct ParseRoleError(pub String);

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "worker" => Ok(Self::Worker),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Employment status shown on a worker profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Training,
    Inactive,
}

impl WorkStatus {
    /// All statuses in display order.
    pub const ALL: [WorkStatus; 4] = [
        WorkStatus::Active,
        WorkStatus::OnLeave,
        WorkStatus::Training,
        WorkStatus::Inactive,
    ];

    /// Converts the status to its display and storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Training => "Training",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a work status name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown work status `{0}` (expected Active, On Leave, Training or Inactive)")]
pub struct ParseWorkStatusError(pub String);

impl FromStr for WorkStatus {
    type Err = ParseWorkStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseWorkStatusError(s.to_string()))
    }
}

/// Reads an optional work status, treating an empty string as unset.
///
/// Records written by older clients carry whatever the edit form held, so an
/// unknown status is dropped with a warning instead of failing the record.
pub(crate) fn lenient_work_status<'de, D>(deserializer: D) -> Result<Option<WorkStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    match raw.parse() {
        Ok(status) => Ok(Some(status)),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring stored work status");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_exact() {
        assert_eq!("worker".parse::<UserRole>(), Ok(UserRole::Worker));
        assert_eq!("customer".parse::<UserRole>(), Ok(UserRole::Customer));
        assert!("Worker".parse::<UserRole>().is_err());
        assert!(" customer".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Worker).unwrap(), "\"worker\"");
        assert_eq!(UserRole::default(), UserRole::Customer);
        assert!(UserRole::Worker.is_worker());
    }

    #[test]
    fn test_work_status_names() {
        assert_eq!(
            serde_json::to_string(&WorkStatus::OnLeave).unwrap(),
            "\"On Leave\""
        );
        assert_eq!("On Leave".parse::<WorkStatus>(), Ok(WorkStatus::OnLeave));
        assert_eq!(WorkStatus::Training.to_string(), "Training");
        assert!("on leave".parse::<WorkStatus>().is_err());
    }

    #[derive(Debug, Deserialize)]
    struct StatusHolder {
        #[serde(default, deserialize_with = "lenient_work_status")]
        status: Option<WorkStatus>,
    }

    fn read_status(json: &str) -> Option<WorkStatus> {
        serde_json::from_str::<StatusHolder>(json).unwrap().status
    }

    #[test]
    fn test_lenient_work_status() {
        assert_eq!(read_status(r#"{"status":"On Leave"}"#), Some(WorkStatus::OnLeave));
        assert_eq!(read_status(r#"{"status":""}"#), None);
        assert_eq!(read_status(r#"{"status":"  "}"#), None);
        assert_eq!(read_status(r#"{"status":"Retired"}"#), None);
        assert_eq!(read_status(r#"{"status":null}"#), None);
        assert_eq!(read_status("{}"), None);
    }
}
