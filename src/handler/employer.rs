use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::{
    db::EmployerExt,
    dtos::employerdtos::{
        EmployerListResponseDto, EmployerLoginResponseDto, EmployerRegisterResponseDto,
        EmployerResponseDto, EmployerStatsResponseDto, FilterEmployerDto, LoginEmployerDto,
        RegisterEmployerDto,
    },
    error::{ErrorMessage, HttpError},
    models::employermodel::{EmployerStatus, VerificationStatus},
    utils::password,
    AppState,
};

pub fn employer_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/list", get(list_employers))
        .route("/stats", get(employer_stats))
        .route("/:employer_id", get(employer_detail))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterEmployerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if app_state
        .db_client
        .get_employer_by_email(&body.email)
        .await?
        .is_some()
    {
        return Err(HttpError::conflict("This email is already registered"));
    }

    if app_state
        .db_client
        .get_employer_by_phone(&body.phone)
        .await?
        .is_some()
    {
        return Err(HttpError::conflict(
            "This mobile number is already registered",
        ));
    }

    let hashed_password =
        password::hash(&body.password).map_err(|e| HttpError::server_error(e.to_string()))?;

    let (_, employer_id) = app_state
        .db_client
        .save_employer(
            &body.company_name,
            &body.contact_person,
            &body.phone,
            &body.email,
            &hashed_password,
            body.industry.as_deref(),
            body.location.as_deref(),
            body.gst_number.as_deref(),
            body.registration_number.as_deref(),
            body.address.as_deref(),
        )
        .await?;

    tracing::info!("employer registered: {}", employer_id);

    Ok((
        StatusCode::CREATED,
        Json(EmployerRegisterResponseDto {
            success: true,
            message: "Registration submitted. Your account will be activated after verification."
                .to_string(),
            employer_id,
        }),
    ))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<LoginEmployerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let employer = app_state
        .db_client
        .get_employer_by_employer_id(&body.employer_id)
        .await?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string()))?;

    let matched = password::compare(&body.password, &employer.password)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string()))?;

    if !matched {
        return Err(HttpError::unauthorized(
            ErrorMessage::WrongCredentials.to_string(),
        ));
    }

    // Unverified employers can authenticate but not enter the portal.
    if employer.verification_status != VerificationStatus::Verified {
        let status = employer.verification_status.to_str();
        return Ok((
            StatusCode::FORBIDDEN,
            Json(json!({
                "success": false,
                "status": status,
                "message": match employer.verification_status {
                    VerificationStatus::Rejected => "Your registration was rejected. Please contact support.",
                    _ => "Your account is awaiting verification.",
                },
            })),
        )
            .into_response());
    }

    Ok(Json(EmployerLoginResponseDto {
        success: true,
        message: "Login successful".to_string(),
        employer: FilterEmployerDto::filter_employer(&employer),
    })
    .into_response())
}

#[derive(Debug, Deserialize)]
pub struct EmployerListQuery {
    pub status: Option<String>,
}

pub async fn list_employers(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<EmployerListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let status = match query.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(s) => Some(
            EmployerStatus::from_str(s).ok_or_else(|| HttpError::bad_request("Invalid status"))?,
        ),
    };

    // The public directory only lists verified employers.
    let employers = app_state
        .db_client
        .get_employers(status, Some(VerificationStatus::Verified))
        .await?;

    Ok(Json(EmployerListResponseDto {
        success: true,
        count: employers.len(),
        employers: FilterEmployerDto::filter_employers(&employers),
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

    Ok(Json(EmployerResponseDto {
        success: true,
        employer: FilterEmployerDto::filter_employer(&employer),
    }))
}

pub async fn employer_stats(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state.db_client.get_employer_stats().await?;

    Ok(Json(EmployerStatsResponseDto {
        success: true,
        stats,
    }))
}
