use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::IntoResponse,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    db::{AdminExt, SessionExt},
    error::{ErrorMessage, HttpError},
    models::{adminmodel::Admin, sessionmodel::SessionWorker},
    AppState,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionAuth {
    pub worker: SessionWorker,
}

#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub admin: Admin,
}

/// The session token travels either in the `session_id` cookie or as a
/// bearer token in the Authorization header. Frontends that store the raw
/// token send it without the Bearer prefix, so both forms are accepted.
pub fn bearer_token(value: &str) -> &str {
    value.strip_prefix("Bearer ").unwrap_or(value)
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get("session_id")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .map(|auth_value| bearer_token(auth_value).to_owned())
        });

    let token = token
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::AuthenticationRequired.to_string()))?;

    let session = app_state.db_client.get_session(&token).await?;

    let worker = session
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::SessionExpired.to_string()))?;

    req.extensions_mut().insert(SessionAuth { worker });

    Ok(next.run(req).await)
}

/// Admin endpoints are gated by the X-Admin-ID header issued at admin
/// login; the id must resolve to an existing admin row.
pub async fn admin_required(
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let admin_id = req
        .headers()
        .get("x-admin-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::AdminRequired.to_string()))?;

    let admin = app_state
        .db_client
        .get_admin(admin_id)
        .await?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::AdminRequired.to_string()))?;

    req.extensions_mut().insert(AdminAuth { admin });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_stripped() {
        assert_eq!(bearer_token("Bearer abc-123"), "abc-123");
        assert_eq!(bearer_token("abc-123"), "abc-123");
        assert_eq!(bearer_token("bearer abc"), "bearer abc");
    }
}
