//! Access Error Types
//!
//! Gate-specific error variants that render through the unified
//! `kernel::error::AppError` problem body.

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Access-specific result type alias
pub type AccessResult<T> = Result<T, AccessError>;

/// Access-specific error variants
#[derive(Debug, Error)]
pub enum AccessError {
    /// No page password configured; nobody can be let in
    #[error("Server configuration error")]
    Misconfigured,

    /// Submitted password is empty or wrong
    #[error("Invalid password")]
    InvalidCredentials,

    /// Access cookie missing, expired, or forged
    #[error("Unauthorized")]
    AccessDenied,

    /// Skill listing could not be loaded
    #[error("Failed to fetch skills: {0}")]
    Repository(String),
}

impl AccessError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccessError::InvalidCredentials | AccessError::AccessDenied => StatusCode::UNAUTHORIZED,
            AccessError::Misconfigured | AccessError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::InvalidCredentials | AccessError::AccessDenied => ErrorKind::Unauthorized,
            AccessError::Misconfigured | AccessError::Repository(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError without leaking internal detail
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccessError::Repository(_) => AppError::internal("Failed to fetch skills"),
            AccessError::InvalidCredentials => AppError::unauthorized(self.to_string())
                .with_action("Check the password and try again"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccessError::Misconfigured => {
                tracing::error!("CC skills password is not configured");
            }
            AccessError::Repository(msg) => {
                tracing::error!(message = %msg, "Skill repository error");
            }
            AccessError::InvalidCredentials => {
                tracing::warn!("Invalid CC skills password attempt");
            }
            AccessError::AccessDenied => {
                tracing::debug!("Access cookie rejected");
            }
        }
    }
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        self.log();
        let denied = matches!(self, AccessError::AccessDenied);
        let mut response = self.to_app_error().into_response();
        if denied {
            response
                .headers_mut()
                .insert("x-access-required", HeaderValue::from_static("true"));
        }
        response
    }
}
