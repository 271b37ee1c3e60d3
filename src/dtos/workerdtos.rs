use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::workermodel::Worker;

use super::common::validate_phone;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterWorkerDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,

    pub aadhaar: Option<String>,

    pub skill: Option<String>,

    #[validate(range(min = 18, max = 65, message = "Age must be between 18 and 65"))]
    pub age: Option<i32>,

    pub gender: Option<String>,

    pub state: Option<String>,

    pub district: Option<String>,

    pub address: Option<String>,

    /// Optional; the phone number is used when absent.
    pub password: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginWorkerDto {
    #[validate(length(min = 1, message = "Migrant ID is required"))]
    pub migrant_id: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateWorkerDto {
    pub name: Option<String>,
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    pub skill: Option<String>,
    #[validate(range(min = 18, max = 65, message = "Age must be between 18 and 65"))]
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub aadhaar: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdatePasswordDto {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

/// The public profile shape; never exposes the password column.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterWorkerDto {
    pub id: i64,
    pub migrant_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub aadhaar: Option<String>,
    pub skill: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub work_location: Option<String>,
    pub status: String,
    pub current_employer: Option<String>,
    pub registration_date: String,
}

impl FilterWorkerDto {
    pub fn filter_worker(worker: &Worker) -> Self {
        FilterWorkerDto {
            id: worker.id,
            migrant_id: worker.migrant_id.to_owned(),
            name: worker.name.to_owned(),
            email: worker.email.clone(),
            phone: worker.phone.to_owned(),
            aadhaar: worker.aadhaar.clone(),
            skill: worker.skill.clone(),
            age: worker.age,
            gender: worker.gender.clone(),
            state: worker.state.clone(),
            district: worker.district.clone(),
            address: worker.address.clone(),
            work_location: worker.work_location.clone(),
            status: worker.status.to_str().to_string(),
            current_employer: worker.current_employer_name.clone(),
            registration_date: worker.created_at.format("%d %B %Y").to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponseDto {
    pub success: bool,
    pub message: String,
    pub worker_id: i64,
    pub migrant_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub success: bool,
    pub message: String,
    pub session_id: String,
    pub worker: FilterWorkerDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkerResponseDto {
    pub success: bool,
    pub worker: FilterWorkerDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCheckResponseDto {
    pub success: bool,
    pub authenticated: bool,
    pub migrant_id: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterWorkerDto {
        RegisterWorkerDto {
            name: "Ramesh Kumar".to_string(),
            phone: "9876543210".to_string(),
            age: Some(32),
            skill: Some("mason".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn registration_accepts_a_complete_form() {
        assert!(valid_registration().validate().is_ok());
    }

    #[test]
    fn registration_accepts_a_chosen_password() {
        let mut dto = valid_registration();
        dto.password = Some("secret123".to_string());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn registration_rejects_short_phone() {
        let mut dto = valid_registration();
        dto.phone = "98765".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn registration_rejects_age_outside_working_range() {
        let mut dto = valid_registration();
        dto.age = Some(17);
        assert!(dto.validate().is_err());

        dto.age = Some(66);
        assert!(dto.validate().is_err());

        dto.age = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn new_password_must_be_six_characters() {
        let dto = UpdatePasswordDto {
            current_password: "9876543210".to_string(),
            new_password: "abc".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
