use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};

use crate::{
    db::{ComplaintExt, EmployerExt, WorkerExt},
    dtos::{
        complaintdtos::FilterComplaintDto,
        dashboarddtos::{
            CurrentDashboardResponseDto, DashboardResponseDto, PortalSummaryResponseDto,
        },
        workerdtos::FilterWorkerDto,
    },
    error::{ErrorMessage, HttpError},
    middleware::{auth, SessionAuth},
    AppState,
};

pub fn dashboard_handler() -> Router {
    let protected = Router::new()
        .route("/current", get(current_dashboard))
        .layer(middleware::from_fn(auth));

    Router::new()
        .route("/summary", get(portal_summary))
        .route("/:worker_id", get(worker_dashboard))
        .merge(protected)
}

pub async fn worker_dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = app_state
        .db_client
        .get_worker_by_ident(&worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    let complaint_stats = app_state.db_client.get_complaint_stats(worker.id).await?;

    Ok(Json(DashboardResponseDto {
        success: true,
        worker: FilterWorkerDto::filter_worker(&worker),
        complaint_stats,
    }))
}

pub async fn current_dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = app_state
        .db_client
        .get_worker(session.worker.worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    let complaint_stats = app_state.db_client.get_complaint_stats(worker.id).await?;

    let complaints = app_state.db_client.get_complaints_by_worker(worker.id).await?;
    let recent_complaints = complaints
        .iter()
        .take(5)
        .map(FilterComplaintDto::filter_complaint)
        .collect();

    Ok(Json(CurrentDashboardResponseDto {
        success: true,
        worker: FilterWorkerDto::filter_worker(&worker),
        complaint_stats,
        recent_complaints,
    }))
}

pub async fn portal_summary(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state.db_client.get_employer_stats().await?;

    Ok(Json(PortalSummaryResponseDto {
        success: true,
        employers: stats.total,
        active_employers: stats.active,
    }))
}
