//! Worker profile page.

use std::fmt;

use entities::{User, WorkerProfile};

use super::{contact_block, field, heading, initials, NOT_PROVIDED};

/// Read-only view of a worker profile.
#[derive(Debug, Clone, Copy)]
pub struct WorkerProfileView<'a> {
    user: &'a User,
    worker: &'a WorkerProfile,
}

impl<'a> WorkerProfileView<'a> {
    pub fn new(user: &'a User, worker: &'a WorkerProfile) -> Self {
        Self { user, worker }
    }
}

impl fmt::Display for WorkerProfileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.user.display_name();
        let worker = self.worker;
        let status = worker.work_status.map(|s| s.as_str()).unwrap_or(NOT_PROVIDED);

        writeln!(f, "Worker Profile")?;
        writeln!(f, "[{}] {name}  ({status})", initials(name))?;
        if let Some(designation) = &worker.designation {
            writeln!(f, "{designation}")?;
        }
        if let Some(department) = &worker.department {
            writeln!(f, "{department}")?;
        }

        heading(f, "Personal Information")?;
        contact_block(f, self.user)?;

        heading(f, "Employment Details")?;
        field(f, "Worker ID", worker.worker_id.as_deref())?;
        field(f, "Work Location", worker.work_location.as_deref())?;
        field(f, "Joining Date", worker.joining_date.as_deref())?;
        field(f, "Shift Timing", worker.shift_timing.as_deref())?;
        field(f, "Supervisor", worker.supervisor.as_deref())?;
        field(f, "Last Login", worker.last_login.as_deref())?;

        heading(f, "Professional Details")?;
        field(f, "Profession", worker.profession.as_deref())?;
        let experience = worker.experience.map(|years| format!("{years} years"));
        field(f, "Experience", experience.as_deref())?;
        let rating = worker.rating.map(|rating| match worker.total_reviews {
            Some(reviews) => format!("{rating:.1} ({reviews} reviews)"),
            None => format!("{rating:.1}"),
        });
        field(f, "Rating", rating.as_deref())?;
        field(f, "Bio", worker.bio.as_deref())?;
        let skills = worker
            .skills
            .as_ref()
            .filter(|skills| !skills.is_empty())
            .map(|skills| skills.join(", "));
        field(f, "Skills", skills.as_deref())?;

        heading(f, "Compensation")?;
        field(f, "Salary", worker.salary.as_deref())?;
        field(f, "Payment Cycle", worker.payment_cycle.as_deref())?;

        writeln!(f)?;
        write!(f, "Run `workerconnect edit --help` to update your profile.")
    }
}
