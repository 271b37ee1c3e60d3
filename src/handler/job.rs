use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{ApplicationExt, EmployerExt, JobExt},
    dtos::{
        common::Response,
        jobdtos::{
            ApplicationListResponseDto, ApplicationStatsResponseDto, ApplyResponseDto,
            CreateJobDto, CreateJobResponseDto, FilterApplicationDto, FilterJobDto,
            JobListQueryDto, JobListResponseDto, JobResponseDto, UpdateJobStatusDto,
        },
    },
    error::HttpError,
    middleware::{auth, SessionAuth},
    models::{employermodel::VerificationStatus, jobmodel::JobStatus},
    AppState,
};

pub fn job_handler() -> Router {
    let protected = Router::new()
        .route("/apply/:job_id", post(apply))
        .route("/applications", get(my_applications))
        .route("/applications/stats", get(my_application_stats))
        .layer(middleware::from_fn(auth));

    Router::new()
        .route("/list", get(list_jobs))
        .route("/create", post(create_job))
        .route("/:job_id", get(job_detail))
        .route("/:job_id/status", post(update_job_status))
        .merge(protected)
}

pub async fn list_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<JobListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let status = match query.status.as_deref() {
        None | Some("") => Some(JobStatus::Open),
        Some("all") => None,
        Some(s) => {
            Some(JobStatus::from_str(s).ok_or_else(|| HttpError::bad_request("Invalid status"))?)
        }
    };

    let skill = query
        .skill
        .as_deref()
        .filter(|s| !s.is_empty() && *s != "all");

    let jobs = app_state.db_client.get_jobs(status, skill).await?;

    Ok(Json(JobListResponseDto {
        success: true,
        count: jobs.len(),
        jobs: FilterJobDto::filter_jobs(&jobs),
    }))
}

pub async fn job_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job(&job_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    Ok(Json(JobResponseDto {
        success: true,
        job: FilterJobDto::filter_job(&job),
    }))
}

pub async fn create_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let employer = app_state
        .db_client
        .get_employer_by_ident(&body.employer_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Employer not found"))?;

    if employer.verification_status != VerificationStatus::Verified {
        return Err(HttpError::forbidden(
            "Only verified employers can post jobs",
        ));
    }

    let (_, job_id) = app_state
        .db_client
        .save_job(
            employer.id,
            &body.title,
            &body.description,
            &body.skill_required,
            &body.location,
            body.wage_per_day,
            body.duration_days,
            body.workers_needed,
        )
        .await?;

    tracing::info!("job posted: {} by {}", job_id, employer.employer_id);

    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponseDto {
            success: true,
            message: "Job posted successfully".to_string(),
            job_id,
        }),
    ))
}

/// The posting employer closes or fills their own listing.
pub async fn update_job_status(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(job_id): Path<String>,
    Json(body): Json<UpdateJobStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let next = JobStatus::from_str(&body.status)
        .ok_or_else(|| HttpError::bad_request("Invalid status"))?;

    let job = app_state
        .db_client
        .get_job(&job_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    let employer = app_state
        .db_client
        .get_employer_by_ident(&body.employer_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Employer not found"))?;

    if job.employer_id != employer.id {
        return Err(HttpError::forbidden(
            "Only the posting employer can change this job",
        ));
    }

    if !job.status.can_transition_to(next) {
        return Err(HttpError::bad_request(format!(
            "A {} job cannot move to {}",
            job.status.to_str(),
            next.to_str()
        )));
    }

    app_state.db_client.update_job_status(job.id, next).await?;

    Ok(Json(Response {
        success: true,
        message: format!("Job marked {}", next.to_str()),
    }))
}

pub async fn apply(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job(&job_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    if job.status != JobStatus::Open {
        return Err(HttpError::bad_request("This job is no longer open"));
    }

    let existing = app_state
        .db_client
        .get_application_for_job(job.id, session.worker.worker_id)
        .await?;

    if existing.is_some() {
        return Err(HttpError::conflict("You have already applied for this job"));
    }

    let (_, application_id) = app_state
        .db_client
        .save_application(job.id, session.worker.worker_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplyResponseDto {
            success: true,
            message: "Application submitted successfully".to_string(),
            application_id,
        }),
    ))
}

pub async fn my_applications(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let applications = app_state
        .db_client
        .get_applications_by_worker(session.worker.worker_id)
        .await?;

    Ok(Json(ApplicationListResponseDto {
        success: true,
        count: applications.len(),
        applications: FilterApplicationDto::filter_applications(&applications),
    }))
}

pub async fn my_application_stats(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state
        .db_client
        .get_application_stats(session.worker.worker_id)
        .await?;

    Ok(Json(ApplicationStatsResponseDto {
        success: true,
        stats,
    }))
}
