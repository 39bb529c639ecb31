//! HTTP Handlers

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use platform::client::client_key;
use platform::clock::SharedClock;
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore};
use tokio::task::JoinHandle;

use crate::application::config::CatalogConfig;
use crate::application::{ListToolsInput, ListToolsUseCase, SearchToolsUseCase};
use crate::domain::repository::ToolRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{SearchRequest, SearchResponse, ToolsPageResponse};

/// One counter table per route, so listing and searching do not eat into
/// each other's budget
#[derive(Debug, Clone)]
pub struct CatalogLimiters<L> {
    pub list: Arc<L>,
    pub search: Arc<L>,
}

impl CatalogLimiters<InMemoryRateLimitStore> {
    pub fn in_memory(clock: SharedClock) -> Self {
        Self {
            list: Arc::new(InMemoryRateLimitStore::new(clock.clone())),
            search: Arc::new(InMemoryRateLimitStore::new(clock)),
        }
    }

    /// Start background purging of expired counters for both routes
    pub fn spawn_purge_tasks(&self, every: Duration) -> [JoinHandle<()>; 2] {
        [
            self.list.spawn_purge_task(every),
            self.search.spawn_purge_task(every),
        ]
    }
}

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R, L>
where
    R: ToolRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub limiters: CatalogLimiters<L>,
    pub config: Arc<CatalogConfig>,
    pub clock: SharedClock,
}

/// GET /api/tools
pub async fn list_tools<R, L>(
    State(state): State<CatalogAppState<R, L>>,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> CatalogResult<Json<ToolsPageResponse>>
where
    R: ToolRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let client = client_key(&headers);

    // Decoding never short-circuits the limiter; the use case counts first
    let input = match query {
        Ok(Query(pairs)) => ListToolsInput::Query(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable tools query");
            ListToolsInput::Unreadable
        }
    };

    let use_case = ListToolsUseCase::new(
        state.repo.clone(),
        state.limiters.list.clone(),
        state.config.clone(),
        state.clock.clone(),
    );
    let page = use_case.execute(&client, input).await?;

    Ok(Json(page.into()))
}

/// POST /api/tools/search
pub async fn search_tools<R, L>(
    State(state): State<CatalogAppState<R, L>>,
    headers: HeaderMap,
    body: Bytes,
) -> CatalogResult<Json<SearchResponse>>
where
    R: ToolRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let client = client_key(&headers);

    let use_case = SearchToolsUseCase::new(
        state.repo.clone(),
        state.limiters.search.clone(),
        state.config.clone(),
        state.clock.clone(),
    );

    // Malformed bodies still count against the window
    let request = SearchRequest::from_body(&body);
    let output = match request {
        Ok(request) => use_case.execute(&client, request.query()).await?,
        Err(err) => {
            use_case.admit(&client).await?;
            return Err(err);
        }
    };

    Ok(Json(output.into()))
}
