use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::WorkerExt,
    dtos::{
        common::Response,
        workerdtos::{FilterWorkerDto, UpdatePasswordDto, UpdateWorkerDto, WorkerResponseDto},
    },
    error::{ErrorMessage, HttpError},
    middleware::{auth, SessionAuth},
    utils::password,
    AppState,
};

pub fn worker_handler() -> Router {
    let protected = Router::new()
        .route("/profile", get(my_profile))
        .route("/profile/update", put(update_profile))
        .route("/profile/password", put(change_password))
        .layer(middleware::from_fn(auth));

    Router::new()
        .route("/profile/:worker_id", get(public_profile))
        .merge(protected)
}

pub async fn public_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = app_state
        .db_client
        .get_worker_by_ident(&worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    Ok(Json(WorkerResponseDto {
        success: true,
        worker: FilterWorkerDto::filter_worker(&worker),
    }))
}

pub async fn my_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = app_state
        .db_client
        .get_worker(session.worker.worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    Ok(Json(WorkerResponseDto {
        success: true,
        worker: FilterWorkerDto::filter_worker(&worker),
    }))
}

pub async fn update_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Json(body): Json<UpdateWorkerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if let Some(ref phone) = body.phone {
        let holder = app_state.db_client.get_worker_by_phone(phone).await?;
        if holder.map_or(false, |w| w.id != session.worker.worker_id) {
            return Err(HttpError::conflict(
                "This mobile number is already registered",
            ));
        }
    }

    app_state
        .db_client
        .update_worker(session.worker.worker_id, &body)
        .await?;

    let worker = app_state
        .db_client
        .get_worker(session.worker.worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    Ok(Json(WorkerResponseDto {
        success: true,
        worker: FilterWorkerDto::filter_worker(&worker),
    }))
}

pub async fn change_password(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Json(body): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let worker = app_state
        .db_client
        .get_worker(session.worker.worker_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::WorkerNotFound.to_string()))?;

    let matched = password::compare(&body.current_password, &worker.password)
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if !matched {
        return Err(HttpError::unauthorized(
            "Current password is incorrect".to_string(),
        ));
    }

    let hashed = password::hash(&body.new_password)
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    app_state
        .db_client
        .update_worker_password(worker.id, &hashed)
        .await?;

    Ok(Json(Response {
        success: true,
        message: "Password updated".to_string(),
    }))
}
