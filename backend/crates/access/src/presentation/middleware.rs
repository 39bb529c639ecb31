//! Access Middleware

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::cookie::cookie_header_text;

use crate::application::CheckAccessUseCase;
use crate::domain::repository::SkillRepository;
use crate::error::AccessError;
use crate::presentation::handlers::AccessAppState;

/// Middleware that requires a valid access cookie
pub async fn require_access<R>(
    State(state): State<AccessAppState<R>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    R: SkillRepository + Clone + Send + Sync + 'static,
{
    let use_case = CheckAccessUseCase::new(state.config.clone(), state.clock.clone());

    if !use_case.is_valid(cookie_header_text(req.headers())) {
        return AccessError::AccessDenied.into_response();
    }

    next.run(req).await
}
