use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    db::{AdminExt, ApplicationExt, ComplaintExt, EmployerExt, JobExt, WorkerExt},
    dtos::{
        admindtos::{
            AdminLoginDto, AdminLoginResponseDto, AdminStatsDto, AdminStatsResponseDto,
            ResolveComplaintDto, VerifyEmployerDto,
        },
        common::Response,
        complaintdtos::{ComplaintListResponseDto, FilterComplaintDto},
        employerdtos::EmployerReviewDto,
        jobdtos::{ApplicationAdminDto, ApplicationAdminListResponseDto},
    },
    error::{ErrorMessage, HttpError},
    middleware::{admin_required, AdminAuth},
    models::{
        applicationmodel::ApplicationStatus,
        complaintmodel::ComplaintStatus,
        employermodel::VerificationStatus,
    },
    utils::password,
    AppState,
};

pub fn admin_handler() -> Router {
    let protected = Router::new()
        .route("/applications", get(list_applications))
        .route("/applications/:application_id/accept", post(accept_application))
        .route("/applications/:application_id/reject", post(reject_application))
        .route("/complaints", get(list_complaints))
        .route("/complaints/:complaint_id/resolve", post(resolve_complaint))
        .route("/stats", get(admin_stats))
        .route("/employers", get(list_employers))
        .route("/employers/pending", get(pending_employers))
        .route("/employers/:employer_id", get(employer_detail))
        .route("/employers/:employer_id/verify", post(verify_employer))
        .route("/employers/:employer_id/reject", post(reject_employer))
        .layer(middleware::from_fn(admin_required));

    Router::new().route("/login", post(login)).merge(protected)
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let admin = app_state
        .db_client
        .get_admin_by_username(&body.username)
        .await?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string()))?;

    let matched = password::compare(&body.password, &admin.password)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string()))?;

    if !matched {
        return Err(HttpError::unauthorized(
            ErrorMessage::WrongCredentials.to_string(),
        ));
    }

    tracing::info!("admin login: {}", admin.username);

    Ok(Json(AdminLoginResponseDto {
        success: true,
        message: "Login successful".to_string(),
        admin_id: admin.id,
        name: admin.name,
        role: admin.role,
    }))
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

pub async fn list_applications(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let status = match query.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(s) => Some(
            ApplicationStatus::from_str(s)
                .ok_or_else(|| HttpError::bad_request("Invalid status"))?,
        ),
    };

    let applications = app_state.db_client.get_all_applications(status).await?;

    Ok(Json(ApplicationAdminListResponseDto {
        success: true,
        count: applications.len(),
        applications: ApplicationAdminDto::from_rows(&applications),
    }))
}

pub async fn accept_application(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(application_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let application = app_state
        .db_client
        .get_application(&application_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Application not found"))?;

    if !application
        .status
        .can_transition_to(ApplicationStatus::Accepted)
    {
        return Err(HttpError::bad_request(format!(
            "Application is already {}",
            application.status.label()
        )));
    }

    app_state.db_client.accept_application(application.id).await?;

    Ok(Json(Response {
        success: true,
        message: "Application accepted".to_string(),
    }))
}

pub async fn reject_application(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(application_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let application = app_state
        .db_client
        .get_application(&application_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Application not found"))?;

    if !application
        .status
        .can_transition_to(ApplicationStatus::Rejected)
    {
        return Err(HttpError::bad_request(format!(
            "Application is already {}",
            application.status.label()
        )));
    }

    app_state.db_client.reject_application(application.id).await?;

    Ok(Json(Response {
        success: true,
        message: "Application rejected".to_string(),
    }))
}

pub async fn list_complaints(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let status = match query.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(s) => Some(
            ComplaintStatus::from_str(s).ok_or_else(|| HttpError::bad_request("Invalid status"))?,
        ),
    };

    let complaints = app_state.db_client.get_all_complaints(status).await?;

    Ok(Json(ComplaintListResponseDto {
        success: true,
        count: complaints.len(),
        complaints: FilterComplaintDto::filter_complaints(&complaints),
    }))
}

pub async fn resolve_complaint(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(complaint_id): Path<String>,
    body: Option<Json<ResolveComplaintDto>>,
) -> Result<impl IntoResponse, HttpError> {
    // A bare POST resolves with no remarks.
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let next = resolution_status(body.status.as_deref())?;

    let complaint = app_state
        .db_client
        .get_complaint(&complaint_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Complaint not found"))?;

    if !complaint.status.can_transition_to(next) {
        return Err(HttpError::bad_request(format!(
            "A complaint marked {} cannot move to {}",
            complaint.status.label(),
            next.label()
        )));
    }

    app_state
        .db_client
        .update_complaint_status(&complaint_id, next, body.admin_remarks.as_deref())
        .await?;

    Ok(Json(Response {
        success: true,
        message: format!("Complaint marked {}", next.label()),
    }))
}

pub async fn admin_stats(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let workers = app_state.db_client.count_active_workers().await?;
    let open_jobs = app_state.db_client.count_open_jobs().await?;
    let applications = app_state.db_client.get_overall_application_stats().await?;
    let complaints = app_state.db_client.get_overall_complaint_stats().await?;
    let verifications = app_state.db_client.get_verification_stats().await?;

    Ok(Json(AdminStatsResponseDto {
        success: true,
        stats: AdminStatsDto {
            workers,
            open_jobs,
            applications,
            complaints,
            verifications,
        },
    }))
}

#[derive(Debug, serde::Serialize)]
pub struct EmployerReviewListResponse {
    pub success: bool,
    pub employers: Vec<EmployerReviewDto>,
    pub count: usize,
}

#[derive(Debug, serde::Serialize)]
pub struct EmployerReviewResponse {
    pub success: bool,
    pub employer: EmployerReviewDto,
}

pub async fn list_employers(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let verification = match query.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(s) => Some(
            VerificationStatus::from_str(s)
                .ok_or_else(|| HttpError::bad_request("Invalid status"))?,
        ),
    };

    let employers = app_state.db_client.get_employers(None, verification).await?;

    Ok(Json(EmployerReviewListResponse {
        success: true,
        count: employers.len(),
        employers: EmployerReviewDto::from_employers(&employers),
    }))
}

pub async fn pending_employers(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let employers = app_state.db_client.get_pending_verifications().await?;

    Ok(Json(EmployerReviewListResponse {
        success: true,
        count: employers.len(),
        employers: EmployerReviewDto::from_employers(&employers),
    }))
}

pub async fn employer_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(employer_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let employer = app_state
        .db_client
        .get_employer_by_ident(&employer_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Employer not found"))?;

    Ok(Json(EmployerReviewResponse {
        success: true,
        employer: EmployerReviewDto::from_employer(&employer),
    }))
}

pub async fn verify_employer(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(admin): Extension<AdminAuth>,
    Path(employer_id): Path<String>,
    body: Option<Json<VerifyEmployerDto>>,
) -> Result<impl IntoResponse, HttpError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    decide_verification(
        &app_state,
        &admin,
        &employer_id,
        VerificationStatus::Verified,
        body.notes.as_deref(),
    )
    .await?;

    Ok(Json(Response {
        success: true,
        message: "Employer verified successfully".to_string(),
    }))
}

pub async fn reject_employer(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(admin): Extension<AdminAuth>,
    Path(employer_id): Path<String>,
    body: Option<Json<VerifyEmployerDto>>,
) -> Result<impl IntoResponse, HttpError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    decide_verification(
        &app_state,
        &admin,
        &employer_id,
        VerificationStatus::Rejected,
        body.notes.as_deref(),
    )
    .await?;

    Ok(Json(Response {
        success: true,
        message: "Employer registration rejected".to_string(),
    }))
}

async fn decide_verification(
    app_state: &AppState,
    admin: &AdminAuth,
    employer_ident: &str,
    decision: VerificationStatus,
    notes: Option<&str>,
) -> Result<(), HttpError> {
    let employer = app_state
        .db_client
        .get_employer_by_ident(employer_ident)
        .await?
        .ok_or_else(|| HttpError::not_found("Employer not found"))?;

    if !employer.verification_status.can_transition_to(decision) {
        return Err(HttpError::bad_request(format!(
            "Employer is already {}",
            employer.verification_status.to_str()
        )));
    }

    app_state
        .db_client
        .update_verification(employer.id, decision, notes, Some(admin.admin.id))
        .await?;

    tracing::info!(
        "employer {} marked {} by admin {}",
        employer.employer_id,
        decision.to_str(),
        admin.admin.username
    );

    Ok(())
}

fn resolution_status(requested: Option<&str>) -> Result<ComplaintStatus, HttpError> {
    match requested {
        None | Some("") => Ok(ComplaintStatus::Resolved),
        Some(s) => {
            ComplaintStatus::from_str(s).ok_or_else(|| HttpError::bad_request("Invalid status"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::admindtos::ResolveComplaintDto;

    #[test]
    fn a_bodyless_resolve_defaults_to_resolved() {
        // Mirrors the handler when no JSON body arrives.
        let body = ResolveComplaintDto::default();
        assert_eq!(
            resolution_status(body.status.as_deref()).unwrap(),
            ComplaintStatus::Resolved
        );
        assert!(body.admin_remarks.is_none());
    }

    #[test]
    fn resolve_accepts_known_statuses_only() {
        assert_eq!(
            resolution_status(Some("rejected")).unwrap(),
            ComplaintStatus::Rejected
        );
        assert_eq!(
            resolution_status(Some("")).unwrap(),
            ComplaintStatus::Resolved
        );
        assert!(resolution_status(Some("reopened")).is_err());
    }
}
