use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::applicationmodel::{ApplicationAdminRow, ApplicationStats, ApplicationWithJob};
use crate::models::jobmodel::JobWithEmployer;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateJobDto {
    #[validate(length(min = 1, message = "Employer ID is required"))]
    pub employer_id: String,

    #[validate(length(min = 1, message = "Job title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Required skill is required"))]
    pub skill_required: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(range(min = 1.0, message = "Daily wage must be positive"))]
    pub wage_per_day: f64,

    #[validate(range(min = 1, message = "Duration must be at least one day"))]
    pub duration_days: i32,

    #[validate(range(min = 1, message = "At least one worker is needed"))]
    pub workers_needed: i32,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateJobStatusDto {
    #[validate(length(min = 1, message = "Employer ID is required"))]
    pub employer_id: String,

    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Listing filters. `status` defaults to open; a skill of "all" means
/// no filter, matching what the frontend sends.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct JobListQueryDto {
    pub status: Option<String>,
    pub skill: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterJobDto {
    pub id: i64,
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub skill_required: String,
    pub location: String,
    pub wage_per_day: f64,
    pub duration_days: i32,
    pub workers_needed: i32,
    pub status: String,
    pub employer_name: String,
    pub industry: Option<String>,
    pub employer_location: Option<String>,
    pub posted_date: String,
}

impl FilterJobDto {
    pub fn filter_job(job: &JobWithEmployer) -> Self {
        FilterJobDto {
            id: job.id,
            job_id: job.job_id.to_owned(),
            title: job.title.to_owned(),
            description: job.description.to_owned(),
            skill_required: job.skill_required.to_owned(),
            location: job.location.to_owned(),
            wage_per_day: job.wage_per_day,
            duration_days: job.duration_days,
            workers_needed: job.workers_needed,
            status: job.status.to_str().to_string(),
            employer_name: job.employer_name.to_owned(),
            industry: job.industry.clone(),
            employer_location: job.employer_location.clone(),
            posted_date: job.created_at.format("%d %B %Y").to_string(),
        }
    }

    pub fn filter_jobs(jobs: &[JobWithEmployer]) -> Vec<FilterJobDto> {
        jobs.iter().map(FilterJobDto::filter_job).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobListResponseDto {
    pub success: bool,
    pub jobs: Vec<FilterJobDto>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponseDto {
    pub success: bool,
    pub job: FilterJobDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateJobResponseDto {
    pub success: bool,
    pub message: String,
    pub job_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResponseDto {
    pub success: bool,
    pub message: String,
    pub application_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterApplicationDto {
    pub id: i64,
    pub application_id: String,
    pub job_id: String,
    pub job_title: String,
    pub employer_name: String,
    pub location: String,
    pub wage_per_day: f64,
    pub duration_days: i32,
    pub status: String,
    pub applied_date: String,
}

impl FilterApplicationDto {
    pub fn filter_application(app: &ApplicationWithJob) -> Self {
        FilterApplicationDto {
            id: app.id,
            application_id: app.application_id.to_owned(),
            job_id: app.job_code.to_owned(),
            job_title: app.job_title.to_owned(),
            employer_name: app.employer_name.to_owned(),
            location: app.location.to_owned(),
            wage_per_day: app.wage_per_day,
            duration_days: app.duration_days,
            status: app.status.label().to_string(),
            applied_date: app.applied_at.format("%d %B %Y").to_string(),
        }
    }

    pub fn filter_applications(apps: &[ApplicationWithJob]) -> Vec<FilterApplicationDto> {
        apps.iter().map(FilterApplicationDto::filter_application).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationListResponseDto {
    pub success: bool,
    pub applications: Vec<FilterApplicationDto>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationAdminDto {
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
    pub status: String,
    pub applied_date: String,
}

impl ApplicationAdminDto {
    pub fn from_row(row: &ApplicationAdminRow) -> Self {
        ApplicationAdminDto {
            id: row.id,
            application_id: row.application_id.to_owned(),
            job_title: row.job_title.to_owned(),
            employer_name: row.employer_name.to_owned(),
            location: row.location.to_owned(),
            wage_per_day: row.wage_per_day,
            worker_name: row.worker_name.to_owned(),
            migrant_id: row.migrant_id.to_owned(),
            phone: row.phone.to_owned(),
            skill: row.skill.clone(),
            status: row.status.label().to_string(),
            applied_date: row.applied_at.format("%d %B %Y").to_string(),
        }
    }

    pub fn from_rows(rows: &[ApplicationAdminRow]) -> Vec<ApplicationAdminDto> {
        rows.iter().map(ApplicationAdminDto::from_row).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationAdminListResponseDto {
    pub success: bool,
    pub applications: Vec<ApplicationAdminDto>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationStatsResponseDto {
    pub success: bool,
    pub stats: ApplicationStats,
}
