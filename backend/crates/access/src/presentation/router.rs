//! Access Router

use crate::application::config::AccessConfig;
use crate::domain::repository::SkillRepository;
use crate::infra::memory::InMemorySkillRepository;
use crate::presentation::handlers::{self, AccessAppState};
use crate::presentation::middleware::require_access;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use platform::clock::SharedClock;
use std::sync::Arc;

/// Create the access router with the in-memory skill listing
pub fn access_router(
    repo: InMemorySkillRepository,
    config: AccessConfig,
    clock: SharedClock,
) -> Router {
    access_router_generic(repo, config, clock)
}

/// Create a generic access router for any repository implementation
///
/// Routes, relative to where it is nested:
/// - `GET /` - skill listing, requires the access cookie
/// - `POST /auth` - password in, cookie out
/// - `POST /logout` - clears the cookie
pub fn access_router_generic<R>(repo: R, config: AccessConfig, clock: SharedClock) -> Router
where
    R: SkillRepository + Clone + Send + Sync + 'static,
{
    let state = AccessAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        clock,
    };

    let protected = Router::new()
        .route("/", get(handlers::list_skills::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_access::<R>,
        ));

    Router::new()
        .merge(protected)
        .route("/auth", post(handlers::authenticate::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state)
}
