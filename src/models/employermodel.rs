use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "employer_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmployerStatus {
    Active,
    Inactive,
}

impl EmployerStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            EmployerStatus::Active => "active",
            EmployerStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<EmployerStatus> {
        match s {
            "active" => Some(EmployerStatus::Active),
            "inactive" => Some(EmployerStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "verification_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<VerificationStatus> {
        match s {
            "pending" => Some(VerificationStatus::Pending),
            "verified" => Some(VerificationStatus::Verified),
            "rejected" => Some(VerificationStatus::Rejected),
            _ => None,
        }
    }

    /// Verification is decided once: only a pending employer can move.
    pub fn can_transition_to(&self, next: VerificationStatus) -> bool {
        matches!(
            (self, next),
            (
                VerificationStatus::Pending,
                VerificationStatus::Verified | VerificationStatus::Rejected
            )
        )
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Employer {
    pub id: i64,
    pub employer_id: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub gst_number: Option<String>,
    pub registration_number: Option<String>,
    pub address: Option<String>,
    pub status: EmployerStatus,
    pub verification_status: VerificationStatus,
    pub verification_notes: Option<String>,
    pub verified_by: Option<i64>,
    pub verified_at: Option<DateTime<Utc>>,
    pub rating: f32,
    pub workers_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Conditional-sum aggregate over the verification pipeline.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployerVerificationStats {
    pub total: i64,
    pub pending: i64,
    pub verified: i64,
    pub rejected: i64,
}

/// Public portal totals over the employer table.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployerStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub total_workers: i64,
    pub average_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_moves_only_out_of_pending() {
        assert!(VerificationStatus::Pending.can_transition_to(VerificationStatus::Verified));
        assert!(VerificationStatus::Pending.can_transition_to(VerificationStatus::Rejected));
        assert!(!VerificationStatus::Verified.can_transition_to(VerificationStatus::Rejected));
        assert!(!VerificationStatus::Rejected.can_transition_to(VerificationStatus::Verified));
        assert!(!VerificationStatus::Verified.can_transition_to(VerificationStatus::Pending));
    }
}
