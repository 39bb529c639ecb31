//! News Router

use std::sync::Arc;

use axum::{Router, routing::get};
use platform::clock::SharedClock;
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore};

use crate::application::config::NewsConfig;
use crate::domain::repository::NewsRepository;
use crate::infra::memory::InMemoryNewsRepository;
use crate::presentation::handlers::{self, NewsAppState};

/// Create the news router with in-memory stories and counters
///
/// `limiter` is shared with the caller so it can purge expired counters.
pub fn news_router(
    repo: InMemoryNewsRepository,
    config: NewsConfig,
    limiter: Arc<InMemoryRateLimitStore>,
    clock: SharedClock,
) -> Router {
    news_router_generic(repo, config, limiter, clock)
}

/// Create a generic news router for any repository and counter store
///
/// Routes, relative to where it is nested:
/// - `GET /` - paginated feed of published stories
pub fn news_router_generic<R, L>(
    repo: R,
    config: NewsConfig,
    limiter: Arc<L>,
    clock: SharedClock,
) -> Router
where
    R: NewsRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let state = NewsAppState {
        repo: Arc::new(repo),
        limiter,
        config: Arc::new(config),
        clock,
    };

    Router::new()
        .route("/", get(handlers::list_news::<R, L>))
        .with_state(state)
}
