use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::complaintmodel::{ComplaintStats, ComplaintWithNames};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateComplaintDto {
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub employer_id: Option<String>,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateComplaintStatusDto {
    #[validate(length(min = 1, message = "Complaint ID is required"))]
    pub complaint_id: String,

    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    pub admin_remarks: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterComplaintDto {
    pub id: i64,
    pub complaint_id: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub worker_name: Option<String>,
    pub migrant_id: Option<String>,
    pub employer_name: Option<String>,
    pub admin_remarks: Option<String>,
    pub filed_date: String,
    pub resolved_date: Option<String>,
}

impl FilterComplaintDto {
    pub fn filter_complaint(complaint: &ComplaintWithNames) -> Self {
        FilterComplaintDto {
            id: complaint.id,
            complaint_id: complaint.complaint_id.to_owned(),
            category: complaint.category.to_owned(),
            description: complaint.description.to_owned(),
            status: complaint.status.label().to_string(),
            worker_name: complaint.worker_name.clone(),
            migrant_id: complaint.migrant_id.clone(),
            employer_name: complaint.employer_name.clone(),
            admin_remarks: complaint.admin_remarks.clone(),
            filed_date: complaint.created_at.format("%d %B %Y").to_string(),
            resolved_date: complaint
                .resolved_at
                .map(|d| d.format("%d %B %Y").to_string()),
        }
    }

    pub fn filter_complaints(complaints: &[ComplaintWithNames]) -> Vec<FilterComplaintDto> {
        complaints.iter().map(FilterComplaintDto::filter_complaint).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintCreatedResponseDto {
    pub success: bool,
    pub message: String,
    pub complaint_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintListResponseDto {
    pub success: bool,
    pub complaints: Vec<FilterComplaintDto>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintResponseDto {
    pub success: bool,
    pub complaint: FilterComplaintDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintStatsResponseDto {
    pub success: bool,
    pub stats: ComplaintStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn short_descriptions_are_rejected() {
        let dto = CreateComplaintDto {
            category: "wages".to_string(),
            employer_id: None,
            description: "too short".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn a_full_complaint_validates() {
        let dto = CreateComplaintDto {
            category: "wages".to_string(),
            employer_id: Some("EMP00001".to_string()),
            description: "Wages for the last two weeks were never paid.".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
