use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn from_str(s: &str) -> Option<ApplicationStatus> {
        match s {
            "pending" => Some(ApplicationStatus::Pending),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    /// Display form for the frontend ("Pending", "Accepted", "Rejected").
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (
                ApplicationStatus::Pending,
                ApplicationStatus::Accepted | ApplicationStatus::Rejected
            )
        )
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct JobApplication {
    pub id: i64,
    pub application_id: String,
    pub job_id: i64,
    pub worker_id: i64,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

/// Application joined with its job and employer, for a worker's own list.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ApplicationWithJob {
    pub id: i64,
    pub application_id: String,
    pub job_id: i64,
    pub job_code: String,
    pub job_title: String,
    pub location: String,
    pub wage_per_day: f64,
    pub duration_days: i32,
    pub employer_name: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Application joined across jobs, workers and employers, for the admin view.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ApplicationAdminRow {
    pub id: i64,
    pub application_id: String,
    pub job_title: String,
    pub employer_name: String,
    pub location: String,
    pub wage_per_day: f64,
    pub worker_name: String,
    pub migrant_id: String,
    pub phone: String,
    pub skill: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ApplicationStats {
    pub total: i64,
    pub pending: i64,
    pub accepted: i64,
    pub rejected: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decided_applications_are_final() {
        assert!(ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Accepted));
        assert!(ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Rejected));
        assert!(!ApplicationStatus::Accepted.can_transition_to(ApplicationStatus::Rejected));
        assert!(!ApplicationStatus::Rejected.can_transition_to(ApplicationStatus::Pending));
    }
}
