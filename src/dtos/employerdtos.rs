use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::employermodel::{Employer, EmployerStats};

use super::common::validate_phone;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterEmployerDto {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub industry: Option<String>,
    pub location: Option<String>,
    pub gst_number: Option<String>,
    pub registration_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginEmployerDto {
    #[validate(length(min = 1, message = "Employer ID is required"))]
    pub employer_id: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public employer shape; password and verification paperwork stay internal.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterEmployerDto {
    pub id: i64,
    pub employer_id: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub verification_status: String,
    pub rating: f32,
    pub workers_count: i32,
    pub registration_date: String,
}

impl FilterEmployerDto {
    pub fn filter_employer(employer: &Employer) -> Self {
        FilterEmployerDto {
            id: employer.id,
            employer_id: employer.employer_id.to_owned(),
            company_name: employer.company_name.to_owned(),
            industry: employer.industry.clone(),
            location: employer.location.clone(),
            contact_person: employer.contact_person.to_owned(),
            phone: employer.phone.to_owned(),
            email: employer.email.to_owned(),
            status: employer.status.to_str().to_string(),
            verification_status: employer.verification_status.to_str().to_string(),
            rating: employer.rating,
            workers_count: employer.workers_count,
            registration_date: employer.created_at.format("%d %B %Y").to_string(),
        }
    }

    pub fn filter_employers(employers: &[Employer]) -> Vec<FilterEmployerDto> {
        employers.iter().map(FilterEmployerDto::filter_employer).collect()
    }
}

/// Admin review shape; includes the verification paperwork.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployerReviewDto {
    pub id: i64,
    pub employer_id: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub gst_number: Option<String>,
    pub registration_number: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub verification_status: String,
    pub verification_notes: Option<String>,
    pub verified_by: Option<i64>,
    pub registration_date: String,
}

impl EmployerReviewDto {
    pub fn from_employer(employer: &Employer) -> Self {
        EmployerReviewDto {
            id: employer.id,
            employer_id: employer.employer_id.to_owned(),
            company_name: employer.company_name.to_owned(),
            industry: employer.industry.clone(),
            location: employer.location.clone(),
            contact_person: employer.contact_person.to_owned(),
            phone: employer.phone.to_owned(),
            email: employer.email.to_owned(),
            gst_number: employer.gst_number.clone(),
            registration_number: employer.registration_number.clone(),
            address: employer.address.clone(),
            status: employer.status.to_str().to_string(),
            verification_status: employer.verification_status.to_str().to_string(),
            verification_notes: employer.verification_notes.clone(),
            verified_by: employer.verified_by,
            registration_date: employer.created_at.format("%d %B %Y").to_string(),
        }
    }

    pub fn from_employers(employers: &[Employer]) -> Vec<EmployerReviewDto> {
        employers.iter().map(EmployerReviewDto::from_employer).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmployerRegisterResponseDto {
    pub success: bool,
    pub message: String,
    pub employer_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmployerLoginResponseDto {
    pub success: bool,
    pub message: String,
    pub employer: FilterEmployerDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmployerListResponseDto {
    pub success: bool,
    pub employers: Vec<FilterEmployerDto>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmployerResponseDto {
    pub success: bool,
    pub employer: FilterEmployerDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmployerStatsResponseDto {
    pub success: bool,
    pub stats: EmployerStats,
}
