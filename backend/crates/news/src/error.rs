//! News Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::pagination::InvalidPage;
use platform::rate_limit::RateLimitError;
use thiserror::Error;

/// News-specific result type alias
pub type NewsResult<T> = Result<T, NewsError>;

#[derive(Debug, Error)]
pub enum NewsError {
    /// Client used up its window
    #[error("Too many requests. Please try again later.")]
    RateLimited { retry_after_secs: u64 },

    /// `page` or `pageSize` out of range, not a number, or unreadable
    #[error("Invalid page or pageSize parameters")]
    InvalidPagination,

    /// Rate limit backend could not answer
    #[error("Rate limiter unavailable: {0}")]
    Unavailable(String),

    /// Stories could not be loaded
    #[error("Failed to fetch news: {0}")]
    Repository(String),
}

impl NewsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NewsError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            NewsError::InvalidPagination => StatusCode::BAD_REQUEST,
            NewsError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            NewsError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NewsError::RateLimited { .. } => ErrorKind::TooManyRequests,
            NewsError::InvalidPagination => ErrorKind::BadRequest,
            NewsError::Unavailable(_) => ErrorKind::ServiceUnavailable,
            NewsError::Repository(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError without leaking internal detail
    pub fn to_app_error(&self) -> AppError {
        match self {
            NewsError::RateLimited { retry_after_secs } => {
                AppError::too_many_requests(self.to_string()).with_retry_after(*retry_after_secs)
            }
            NewsError::InvalidPagination => AppError::bad_request(self.to_string())
                .with_action("Use page >= 1 and pageSize between 1 and 50"),
            NewsError::Unavailable(_) => {
                AppError::service_unavailable("Service temporarily unavailable")
            }
            NewsError::Repository(_) => AppError::internal("Failed to fetch news"),
        }
    }

    fn log(&self) {
        match self {
            NewsError::Repository(msg) => {
                tracing::error!(message = %msg, "News repository error");
            }
            NewsError::Unavailable(msg) => {
                tracing::error!(message = %msg, "Rate limiter unavailable");
            }
            NewsError::RateLimited { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "News rate limit exceeded");
            }
            NewsError::InvalidPagination => {
                tracing::debug!(error = %self, "News request rejected");
            }
        }
    }
}

impl From<RateLimitError> for NewsError {
    fn from(err: RateLimitError) -> Self {
        match err {
            RateLimitError::Backend(msg) => NewsError::Unavailable(msg),
        }
    }
}

impl From<InvalidPage> for NewsError {
    fn from(_: InvalidPage) -> Self {
        NewsError::InvalidPagination
    }
}

impl From<NewsError> for AppError {
    fn from(err: NewsError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
