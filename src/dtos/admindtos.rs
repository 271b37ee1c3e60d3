use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::applicationmodel::ApplicationStats;
use crate::models::complaintmodel::ComplaintStats;
use crate::models::employermodel::EmployerVerificationStats;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct AdminLoginDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VerifyEmployerDto {
    pub notes: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResolveComplaintDto {
    pub status: Option<String>,
    pub admin_remarks: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminLoginResponseDto {
    pub success: bool,
    pub message: String,
    pub admin_id: i64,
    pub name: String,
    pub role: String,
}

/// Portal-wide counters for the admin landing page.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminStatsDto {
    pub workers: i64,
    pub open_jobs: i64,
    pub applications: ApplicationStats,
    pub complaints: ComplaintStats,
    pub verifications: EmployerVerificationStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminStatsResponseDto {
    pub success: bool,
    pub stats: AdminStatsDto,
}
