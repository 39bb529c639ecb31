//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use platform::client::client_key;
use platform::clock::SharedClock;
use platform::rate_limit::RateLimitStore;

use crate::application::config::NewsConfig;
use crate::application::{ListNewsInput, ListNewsUseCase};
use crate::domain::repository::NewsRepository;
use crate::error::NewsResult;
use crate::presentation::dto::NewsPageResponse;

/// Shared state for news handlers
#[derive(Clone)]
pub struct NewsAppState<R, L>
where
    R: NewsRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub limiter: Arc<L>,
    pub config: Arc<NewsConfig>,
    pub clock: SharedClock,
}

/// GET /api/news
pub async fn list_news<R, L>(
    State(state): State<NewsAppState<R, L>>,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> NewsResult<Json<NewsPageResponse>>
where
    R: NewsRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let client = client_key(&headers);

    let input = match query {
        Ok(Query(pairs)) => ListNewsInput::Query(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable news query");
            ListNewsInput::Unreadable
        }
    };

    let use_case = ListNewsUseCase::new(
        state.repo.clone(),
        state.limiter.clone(),
        state.config.clone(),
        state.clock.clone(),
    );
    let page = use_case.execute(&client, input).await?;

    Ok(Json(page.into()))
}
