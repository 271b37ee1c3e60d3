use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "complaint_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    pub fn from_str(s: &str) -> Option<ComplaintStatus> {
        match s {
            "pending" => Some(ComplaintStatus::Pending),
            "in_progress" => Some(ComplaintStatus::InProgress),
            "resolved" => Some(ComplaintStatus::Resolved),
            "rejected" => Some(ComplaintStatus::Rejected),
            _ => None,
        }
    }

    /// Display form for the frontend ("In Progress" rather than "in_progress").
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Rejected => "Rejected",
        }
    }

    /// A grievance can be triaged before resolution but a decided one
    /// never reopens.
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        matches!(
            (self, next),
            (
                ComplaintStatus::Pending,
                ComplaintStatus::InProgress | ComplaintStatus::Resolved | ComplaintStatus::Rejected
            ) | (
                ComplaintStatus::InProgress,
                ComplaintStatus::Resolved | ComplaintStatus::Rejected
            )
        )
    }
}

/// The fixed grievance vocabulary. Short codes arrive from the frontend;
/// unknown categories are stored verbatim.
pub fn category_label(code: &str) -> &str {
    match code {
        "wages" => "Non-Payment of Wages",
        "safety" => "Safety Issues",
        "harassment" => "Workplace Harassment",
        "accommodation" => "Accommodation Problems",
        "working_hours" => "Excessive Working Hours",
        "contract" => "Contract Violation",
        "other" => "Other",
        _ => code,
    }
}

/// Complaint joined with worker and employer names for detail/admin views.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ComplaintWithNames {
    pub id: i64,
    pub complaint_id: String,
    pub worker_id: i64,
    pub employer_id: Option<i64>,
    pub category: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub admin_remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub worker_name: Option<String>,
    pub migrant_id: Option<String>,
    pub employer_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ComplaintStats {
    pub total: i64,
    pub pending: i64,
    pub resolved: i64,
    pub in_progress: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grievance_lifecycle_never_reopens() {
        assert!(ComplaintStatus::Pending.can_transition_to(ComplaintStatus::InProgress));
        assert!(ComplaintStatus::Pending.can_transition_to(ComplaintStatus::Resolved));
        assert!(ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::Resolved));
        assert!(ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::Rejected));
        assert!(!ComplaintStatus::Resolved.can_transition_to(ComplaintStatus::Pending));
        assert!(!ComplaintStatus::Rejected.can_transition_to(ComplaintStatus::InProgress));
        assert!(!ComplaintStatus::InProgress.can_transition_to(ComplaintStatus::Pending));
    }

    #[test]
    fn category_codes_map_to_labels() {
        assert_eq!(category_label("wages"), "Non-Payment of Wages");
        assert_eq!(category_label("working_hours"), "Excessive Working Hours");
        assert_eq!(category_label("Some custom issue"), "Some custom issue");
    }

    #[test]
    fn status_labels_are_display_cased() {
        assert_eq!(ComplaintStatus::InProgress.label(), "In Progress");
        assert_eq!(ComplaintStatus::Pending.label(), "Pending");
    }
}
