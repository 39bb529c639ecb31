//! Catalog Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use platform::clock::SharedClock;
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore};

use crate::application::config::CatalogConfig;
use crate::domain::repository::ToolRepository;
use crate::infra::memory::InMemoryToolRepository;
use crate::presentation::handlers::{self, CatalogAppState};

pub use crate::presentation::handlers::CatalogLimiters;

/// Create the catalog router with in-memory tools and counters
pub fn catalog_router(
    repo: InMemoryToolRepository,
    config: CatalogConfig,
    limiters: CatalogLimiters<InMemoryRateLimitStore>,
    clock: SharedClock,
) -> Router {
    catalog_router_generic(repo, config, limiters, clock)
}

/// Create a generic catalog router for any repository and counter store
///
/// Routes, relative to where it is nested:
/// - `GET /` - paginated listing
/// - `POST /search` - scored text search
pub fn catalog_router_generic<R, L>(
    repo: R,
    config: CatalogConfig,
    limiters: CatalogLimiters<L>,
    clock: SharedClock,
) -> Router
where
    R: ToolRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        limiters,
        config: Arc::new(config),
        clock,
    };

    Router::new()
        .route("/", get(handlers::list_tools::<R, L>))
        .route("/search", post(handlers::search_tools::<R, L>))
        .with_state(state)
}
