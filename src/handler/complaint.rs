use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{ComplaintExt, EmployerExt, WorkerExt},
    dtos::{
        common::Response,
        complaintdtos::{
            ComplaintCreatedResponseDto, ComplaintListResponseDto, ComplaintResponseDto,
            ComplaintStatsResponseDto, CreateComplaintDto, FilterComplaintDto,
            UpdateComplaintStatusDto,
        },
    },
    error::{ErrorMessage, HttpError},
    middleware::{auth, SessionAuth},
    models::complaintmodel::{category_label, ComplaintStatus},
    AppState,
};

pub fn complaint_handler() -> Router {
    let protected = Router::new()
        .route("/add", post(add_complaint))
        .route("/list", get(my_complaints))
        .route("/update_status", put(update_status))
        .layer(middleware::from_fn(auth));

    Router::new()
        .route("/detail/:complaint_id", get(complaint_detail))
        .route("/stats/:worker_id", get(worker_complaint_stats))
        .route("/:worker_id", get(worker_complaints))
        .merge(protected)
}

pub async fn add_complaint(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Json(body): Json<CreateComplaintDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let description = trimmed_description(&body.description).ok_or_else(|| {
        HttpError::bad_request("Description must be at least 10 characters")
    })?;

    let employer_id = match body.employer_id.as_deref().filter(|s| !s.is_empty()) {
        Some(ident) => {
            let employer = app_state
                .db_client
                .get_employer_by_ident(ident)
                .await?
                .ok_or_else(|| HttpError::not_found("Employer not found"))?;
            Some(employer.id)
        }
        None => None,
    };

    let (_, complaint_id) = app_state
        .db_client
        .save_complaint(
            session.worker.worker_id,
            employer_id,
            category_label(&body.category),
            description,
        )
        .await?;

    tracing::info!("complaint filed: {}", complaint_id);

    Ok((
        StatusCode::CREATED,
        Json(ComplaintCreatedResponseDto {
            success: true,
            message: "Complaint submitted successfully".to_string(),
            complaint_id,
        }),
    ))
}

/// The minimum length counts characters, not bytes.
fn trimmed_description(raw: &str) -> Option<&str> {
    let description = raw.trim();
    (description.chars().count() >= 10).then_some(description)
}

pub async fn my_complaints(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let complaints = app_state
        .db_client
        .get_complaints_by_worker(session.worker.worker_id)
        .await?;

    Ok(Json(ComplaintListResponseDto {
        success: true,
        count: complaints.len(),
        complaints: FilterComplaintDto::filter_complaints(&complaints),
    }))
}

pub async fn worker_complaints(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = app_state
        .db_client
        .get_worker_by_ident(&worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    let complaints = app_state.db_client.get_complaints_by_worker(worker.id).await?;

    Ok(Json(ComplaintListResponseDto {
        success: true,
        count: complaints.len(),
        complaints: FilterComplaintDto::filter_complaints(&complaints),
    }))
}

pub async fn complaint_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let complaint = app_state
        .db_client
        .get_complaint(&complaint_id)
        .await?
        .ok_or_else(|| HttpError::not_found("Complaint not found"))?;

    Ok(Json(ComplaintResponseDto {
        success: true,
        complaint: FilterComplaintDto::filter_complaint(&complaint),
    }))
}

pub async fn update_status(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(_session): Extension<SessionAuth>,
    Json(body): Json<UpdateComplaintStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let next = ComplaintStatus::from_str(&body.status)
        .ok_or_else(|| HttpError::bad_request("Invalid status"))?;

    let complaint = app_state
        .db_client
        .get_complaint(&body.complaint_id)
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
        .update_complaint_status(&body.complaint_id, next, body.admin_remarks.as_deref())
        .await?;

    Ok(Json(Response {
        success: true,
        message: format!("Complaint marked {}", next.label()),
    }))
}

pub async fn worker_complaint_stats(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = app_state
        .db_client
        .get_worker_by_ident(&worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    let stats = app_state.db_client.get_complaint_stats(worker.id).await?;

    Ok(Json(ComplaintStatsResponseDto {
        success: true,
        stats,
    }))
}

#[cfg(test)]
mod tests {
    use super::trimmed_description;

    #[test]
    fn description_is_trimmed_before_the_length_check() {
        assert_eq!(
            trimmed_description("  paid nothing for two weeks  "),
            Some("paid nothing for two weeks")
        );
        assert!(trimmed_description("   short    ").is_none());
    }

    #[test]
    fn description_minimum_counts_characters_not_bytes() {
        // "अनुचित" is 6 characters but 18 bytes; trailing spaces must not
        // carry it over the minimum.
        assert!(trimmed_description("अनुचित    ").is_none());
        assert!(trimmed_description("वेतन का भुगतान नहीं हुआ").is_some());
    }
}
