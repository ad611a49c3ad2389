//! The fixed profile handed out to demo accounts.

use chrono::{DateTime, Local};
use entities::{CommonProfile, User, UserKind, UserRole, WorkStatus, WorkerProfile};

/// Avatar shown for every demo account.
pub const DEMO_PROFILE_PICTURE: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

/// Builds the demo user for `role`.
///
/// Everything except `email` and the worker's `lastLogin` is constant.
pub fn mock_profile(identifier: &str, role: UserRole, logged_in_at: DateTime<Local>) -> User {
    let (name, location) = match role {
        UserRole::Customer => ("Sharath Kumar", "Hyderabad"),
        UserRole::Worker => ("Sharath Singh", "Delhi"),
    };

    let profile = CommonProfile {
        name: Some(name.to_string()),
        phone: Some("+91 9876543210".to_string()),
        location: Some(location.to_string()),
        profile_picture: Some(DEMO_PROFILE_PICTURE.to_string()),
        ..Default::default()
    };

    let kind = match role {
        UserRole::Customer => UserKind::Customer,
        UserRole::Worker => UserKind::Worker(mock_worker_profile(logged_in_at)),
    };

    User {
        email: identifier.to_string(),
        profile,
        kind,
    }
}

fn mock_worker_profile(logged_in_at: DateTime<Local>) -> WorkerProfile {
    WorkerProfile {
        worker_id: Some("WK001".to_string()),
        profession: Some("Plumber".to_string()),
        experience: Some(5),
        bio: Some(
            "Experienced plumber with 5+ years in residential and commercial work.".to_string(),
        ),
        skills: Some(vec![
            "Pipe Fitting".to_string(),
            "Leak Repair".to_string(),
            "Bathroom Installation".to_string(),
        ]),
        designation: Some("Senior Plumber".to_string()),
        department: Some("Home Services".to_string()),
        work_location: Some("Service Center".to_string()),
        joining_date: Some("2022-01-15".to_string()),
        shift_timing: Some("9 AM - 6 PM".to_string()),
        supervisor: Some("Mike Johnson".to_string()),
        work_status: Some(WorkStatus::Active),
        last_login: Some(format_login_time(&logged_in_at)),
        salary: Some("$55,000/year".to_string()),
        payment_cycle: Some("Monthly".to_string()),
        rating: Some(4.8),
        total_reviews: Some(127),
    }
}

/// Formats a timestamp the way a US-English locale string reads,
/// e.g. `1/15/2025, 3:04:05 PM`.
pub fn format_login_time(at: &DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
