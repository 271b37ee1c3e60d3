use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use validator::Validate;

use crate::{
    db::{SessionExt, WorkerExt},
    dtos::{
        common::Response,
        workerdtos::{
            FilterWorkerDto, LoginResponseDto, LoginWorkerDto, RegisterResponseDto,
            RegisterWorkerDto, SessionCheckResponseDto,
        },
    },
    error::{ErrorMessage, HttpError},
    middleware::bearer_token,
    models::sessionmodel::SESSION_TTL_SECS,
    utils::password,
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/check-session", get(check_session))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterWorkerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state.db_client.get_worker_by_phone(&body.phone).await?;
    if existing.is_some() {
        return Err(HttpError::conflict(
            "This mobile number is already registered",
        ));
    }

    // Workers rarely set a password up front; the phone number doubles as
    // the initial one.
    let hashed_password = password::hash(initial_password(body.password.as_deref(), &body.phone))
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let (worker_id, migrant_id) = app_state
        .db_client
        .save_worker(
            &body.name,
            &body.phone,
            &hashed_password,
            body.email.as_deref(),
            body.aadhaar.as_deref(),
            body.skill.as_deref(),
            body.age,
            body.gender.as_deref(),
            body.state.as_deref(),
            body.district.as_deref(),
            body.address.as_deref(),
        )
        .await?;

    tracing::info!("worker registered: {}", migrant_id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            success: true,
            message: "Registration successful".to_string(),
            worker_id,
            migrant_id,
        }),
    ))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(mut body): Json<LoginWorkerDto>,
) -> Result<impl IntoResponse, HttpError> {
    // Cards print the migrant ID in uppercase but workers type it freely.
    body.migrant_id = normalize_migrant_id(&body.migrant_id);
    body.phone = body.phone.trim().to_string();

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let worker = app_state
        .db_client
        .authenticate_worker(&body.migrant_id, &body.phone)
        .await?
        .ok_or_else(|| {
            HttpError::unauthorized(ErrorMessage::InvalidWorkerCredentials.to_string())
        })?;

    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok());
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    let session = app_state
        .db_client
        .create_session(worker.id, ip_address, user_agent)
        .await?;

    let cookie = Cookie::build(("session_id", session.session_id.clone()))
        .path("/")
        .max_age(time::Duration::seconds(SESSION_TTL_SECS))
        .http_only(true)
        .build();

    let mut response = Json(LoginResponseDto {
        success: true,
        message: "Login successful".to_string(),
        session_id: session.session_id,
        worker: FilterWorkerDto::filter_worker(&worker),
    })
    .into_response();

    response.headers_mut().insert(
        header::SET_COOKIE,
        cookie
            .to_string()
            .parse()
            .map_err(|_| HttpError::server_error("Failed to build session cookie"))?,
    );

    Ok(response)
}

pub async fn logout(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    if let Some(token) = session_token(&cookie_jar, &headers) {
        app_state.db_client.delete_session(&token).await?;
    }

    let cookie = Cookie::build(("session_id", ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .http_only(true)
        .build();

    let mut response = Json(Response {
        success: true,
        message: "Logged out".to_string(),
    })
    .into_response();

    response.headers_mut().insert(
        header::SET_COOKIE,
        cookie
            .to_string()
            .parse()
            .map_err(|_| HttpError::server_error("Failed to build session cookie"))?,
    );

    Ok(response)
}

pub async fn check_session(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let session = match session_token(&cookie_jar, &headers) {
        Some(token) => app_state.db_client.get_session(&token).await?,
        None => None,
    };

    let response = match session {
        Some(worker) => SessionCheckResponseDto {
            success: true,
            authenticated: true,
            migrant_id: Some(worker.migrant_id),
            name: Some(worker.name),
        },
        None => SessionCheckResponseDto {
            success: true,
            authenticated: false,
            migrant_id: None,
            name: None,
        },
    };

    Ok(Json(response))
}

fn session_token(cookie_jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    cookie_jar
        .get("session_id")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(|value| bearer_token(value).to_owned())
        })
}

fn normalize_migrant_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn initial_password<'a>(supplied: Option<&'a str>, phone: &'a str) -> &'a str {
    supplied.filter(|p| !p.is_empty()).unwrap_or(phone)
}

#[cfg(test)]
mod tests {
    use super::{initial_password, normalize_migrant_id};

    #[test]
    fn migrant_ids_are_matched_case_and_whitespace_insensitively() {
        assert_eq!(normalize_migrant_id(" mig00001 "), "MIG00001");
        assert_eq!(normalize_migrant_id("MIG00042"), "MIG00042");
        assert_eq!(normalize_migrant_id("Mig00007\n"), "MIG00007");
    }

    #[test]
    fn registration_password_falls_back_to_the_phone() {
        assert_eq!(initial_password(None, "9876543210"), "9876543210");
        assert_eq!(initial_password(Some(""), "9876543210"), "9876543210");
        assert_eq!(initial_password(Some("secret123"), "9876543210"), "secret123");
    }
}
