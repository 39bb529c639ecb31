//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use platform::clock::SharedClock;
use platform::cookie::to_header_value;
use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::application::{IssueAccessUseCase, ListSkillsUseCase, clear_access_cookie};
use crate::domain::repository::SkillRepository;
use crate::error::AccessResult;
use crate::presentation::dto::{AuthRequest, OkResponse, SkillsResponse};

/// Shared state for access handlers
#[derive(Clone)]
pub struct AccessAppState<R>
where
    R: SkillRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccessConfig>,
    pub clock: SharedClock,
}

/// POST /api/cc-skills/auth
pub async fn authenticate<R>(
    State(state): State<AccessAppState<R>>,
    body: Bytes,
) -> AccessResult<impl IntoResponse>
where
    R: SkillRepository + Clone + Send + Sync + 'static,
{
    let req = AuthRequest::from_body(&body);

    let use_case = IssueAccessUseCase::new(state.config.clone(), state.clock.clone());
    let issued = use_case.execute(&req.password)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, to_header_value(&issued.set_cookie))],
        Json(OkResponse { ok: true }),
    ))
}

/// POST /api/cc-skills/logout
pub async fn logout<R>(State(state): State<AccessAppState<R>>) -> impl IntoResponse
where
    R: SkillRepository + Clone + Send + Sync + 'static,
{
    let cookie = clear_access_cookie(&state.config);

    (
        StatusCode::OK,
        [(header::SET_COOKIE, to_header_value(&cookie))],
        Json(OkResponse { ok: true }),
    )
}

/// GET /api/cc-skills
///
/// Mounted behind [`crate::presentation::middleware::require_access`].
pub async fn list_skills<R>(
    State(state): State<AccessAppState<R>>,
) -> AccessResult<Json<SkillsResponse>>
where
    R: SkillRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListSkillsUseCase::new(state.repo.clone());
    let skills = use_case.execute().await?;

    Ok(Json(SkillsResponse { skills }))
}
