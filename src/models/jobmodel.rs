use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "job_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Closed,
    Filled,
}

impl JobStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::Filled => "filled",
        }
    }

    pub fn from_str(s: &str) -> Option<JobStatus> {
        match s {
            "open" => Some(JobStatus::Open),
            "closed" => Some(JobStatus::Closed),
            "filled" => Some(JobStatus::Filled),
            _ => None,
        }
    }

    /// A listing leaves `open` exactly once and never comes back.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!((self, next), (JobStatus::Open, JobStatus::Closed | JobStatus::Filled))
    }
}

/// Job row joined with the owning employer for the public listings.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct JobWithEmployer {
    pub id: i64,
    pub job_id: String,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub skill_required: String,
    pub location: String,
    pub wage_per_day: f64,
    pub duration_days: i32,
    pub workers_needed: i32,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub employer_name: String,
    pub industry: Option<String>,
    pub employer_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_jobs_close_or_fill_only() {
        assert!(JobStatus::Open.can_transition_to(JobStatus::Closed));
        assert!(JobStatus::Open.can_transition_to(JobStatus::Filled));
        assert!(!JobStatus::Closed.can_transition_to(JobStatus::Open));
        assert!(!JobStatus::Filled.can_transition_to(JobStatus::Closed));
    }

    #[test]
    fn status_parses_known_values() {
        assert_eq!(JobStatus::from_str("open"), Some(JobStatus::Open));
        assert_eq!(JobStatus::from_str("filled"), Some(JobStatus::Filled));
        assert_eq!(JobStatus::from_str("paused"), None);
    }
}
