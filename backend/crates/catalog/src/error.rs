//! Catalog Error Types
//!
//! Catalog-specific error variants that render through the unified
//! `kernel::error::AppError` problem body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::pagination::InvalidPage;
use platform::rate_limit::RateLimitError;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Client used up its window
    #[error("Too many requests. Please try again later.")]
    RateLimited { retry_after_secs: u64 },

    /// `page` or `pageSize` out of range or not a number
    #[error("Invalid page or pageSize parameters")]
    InvalidPagination,

    /// Request body could not be read
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Rate limit backend could not answer
    #[error("Rate limiter unavailable: {0}")]
    Unavailable(String),

    /// Tool listing could not be loaded
    #[error("Failed to fetch tools: {0}")]
    Repository(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            CatalogError::InvalidPagination | CatalogError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            CatalogError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::RateLimited { .. } => ErrorKind::TooManyRequests,
            CatalogError::InvalidPagination | CatalogError::InvalidBody(_) => {
                ErrorKind::BadRequest
            }
            CatalogError::Unavailable(_) => ErrorKind::ServiceUnavailable,
            CatalogError::Repository(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError without leaking internal detail
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::RateLimited { retry_after_secs } => {
                AppError::too_many_requests(self.to_string()).with_retry_after(*retry_after_secs)
            }
            CatalogError::InvalidBody(_) => AppError::bad_request("Invalid JSON body")
                .with_action("Send a JSON object with a \"query\" string"),
            CatalogError::Unavailable(_) => {
                AppError::service_unavailable("Service temporarily unavailable")
            }
            CatalogError::Repository(_) => AppError::internal("Failed to fetch tools"),
            CatalogError::InvalidPagination => AppError::bad_request(self.to_string())
                .with_action("Use page >= 1 and pageSize between 1 and 100"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Repository(msg) => {
                tracing::error!(message = %msg, "Tool repository error");
            }
            CatalogError::Unavailable(msg) => {
                tracing::error!(message = %msg, "Rate limiter unavailable");
            }
            CatalogError::RateLimited { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "Catalog rate limit exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog request rejected");
            }
        }
    }
}

impl From<RateLimitError> for CatalogError {
    fn from(err: RateLimitError) -> Self {
        match err {
            RateLimitError::Backend(msg) => CatalogError::Unavailable(msg),
        }
    }
}

impl From<InvalidPage> for CatalogError {
    fn from(_: InvalidPage) -> Self {
        CatalogError::InvalidPagination
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
