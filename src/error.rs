use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    AuthenticationRequired,
    SessionExpired,
    InvalidWorkerCredentials,
    WrongCredentials,
    AdminRequired,
    WorkerNotFound,
}

impl ErrorMessage {
    fn to_str(&self) -> String {
        match self {
            ErrorMessage::AuthenticationRequired => {
                "Authentication required. Please login.".to_string()
            }
            ErrorMessage::SessionExpired => {
                "Invalid or expired session. Please login again.".to_string()
            }
            ErrorMessage::InvalidWorkerCredentials => {
                "Invalid Migrant ID or Mobile number".to_string()
            }
            ErrorMessage::WrongCredentials => "Invalid credentials".to_string(),
            ErrorMessage::AdminRequired => "Admin authentication required".to_string(),
            ErrorMessage::WorkerNotFound => "Worker not found".to_string(),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::UNAUTHORIZED)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::FORBIDDEN)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::CONFLICT)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            success: false,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Driver errors are logged in full but never echoed back to the client.
impl From<sqlx::Error> for HttpError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                tracing::warn!("unique constraint violation: {}", db_err);
                return HttpError::conflict("A record with these details already exists");
            }
        }

        match err {
            sqlx::Error::RowNotFound => HttpError::not_found("Resource not found"),
            other => {
                tracing::error!("database error: {}", other);
                HttpError::server_error("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_status_codes() {
        assert_eq!(HttpError::bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(HttpError::unauthorized("x").status, StatusCode::UNAUTHORIZED);
        assert_eq!(HttpError::forbidden("x").status, StatusCode::FORBIDDEN);
        assert_eq!(HttpError::not_found("x").status, StatusCode::NOT_FOUND);
        assert_eq!(HttpError::conflict("x").status, StatusCode::CONFLICT);
        assert_eq!(
            HttpError::server_error("x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let err: HttpError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn fixed_messages_render() {
        assert_eq!(
            ErrorMessage::AdminRequired.to_string(),
            "Admin authentication required"
        );
        assert!(ErrorMessage::SessionExpired.to_string().contains("expired"));
    }
}
