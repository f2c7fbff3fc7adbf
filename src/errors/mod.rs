//! Error handling module for the PhotoQuest backend.
//!
//! Provides centralized error types with mapping to HTTP status codes, response envelopes
//! and the user-facing alerts shown by the view workflows.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::views::Alert;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INVALID_STATE: &str = "INVALID_STATE";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Title of every error alert.
pub const ERROR_TITLE: &str = "Ошибка";

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required field is missing or points nowhere
    Validation(String),
    /// The entity is not in a state that allows the operation
    InvalidState(String),
    /// Camera or gallery access was refused
    PermissionDenied(String),
    /// Resource not found
    NotFound(String),
    /// Bad request
    BadRequest(String),
    /// Internal error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::InvalidState(_) => codes::INVALID_STATE,
            AppError::PermissionDenied(_) => codes::PERMISSION_DENIED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::InvalidState(msg)
            | AppError::PermissionDenied(msg)
            | AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Internal(msg) => msg.clone(),
        }
    }

    /// The blocking alert a view shows for this error.
    pub fn alert(&self) -> Alert {
        Alert::new(ERROR_TITLE, self.message())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub title: String,
    pub message: String,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
    pub revision_id: i64,
}

impl ErrorResponse {
    pub fn new(error: &AppError, revision_id: i64) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                title: ERROR_TITLE.to_string(),
                message: error.message(),
            },
            revision_id,
        }
    }
}

/// Wrapper type for errors that carry revision_id context.
pub struct AppErrorWithRevision {
    pub error: AppError,
    pub revision_id: i64,
}

impl IntoResponse for AppErrorWithRevision {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let body = ErrorResponse::new(&self.error, self.revision_id);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_mapping() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST, codes::VALIDATION_ERROR),
            (AppError::InvalidState("x".into()), StatusCode::CONFLICT, codes::INVALID_STATE),
            (
                AppError::PermissionDenied("x".into()),
                StatusCode::FORBIDDEN,
                codes::PERMISSION_DENIED,
            ),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND, codes::NOT_FOUND),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::INTERNAL_ERROR,
            ),
        ];

        for (error, status, code) in cases {
            assert_eq!(error.status_code(), status);
            assert_eq!(error.error_code(), code);
        }
    }

    #[test]
    fn test_error_envelope() {
        let error = AppError::InvalidState("Quest q1 is already completed".to_string());
        let body = serde_json::to_value(ErrorResponse::new(&error, 7)).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_STATE");
        assert_eq!(body["error"]["title"], ERROR_TITLE);
        assert_eq!(body["error"]["message"], "Quest q1 is already completed");
        assert_eq!(body["revisionId"], 7);
    }

    #[test]
    fn test_alert_uses_message() {
        let alert = AppError::Validation("Пожалуйста, выберите квест".to_string()).alert();
        assert_eq!(alert.title, ERROR_TITLE);
        assert_eq!(alert.message, "Пожалуйста, выберите квест");
    }
}
