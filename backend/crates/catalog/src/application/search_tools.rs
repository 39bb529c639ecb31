//! Search Tools Use Case

use std::sync::Arc;

use platform::client::ClientKey;
use platform::clock::SharedClock;
use platform::rate_limit::RateLimitStore;

use crate::application::config::CatalogConfig;
use crate::application::throttle::enforce;
use crate::domain::repository::ToolRepository;
use crate::domain::services::{search, sort_tools, visible};
use crate::domain::value_objects::{ScoredTool, ToolOrdering};
use crate::error::CatalogResult;

/// Output DTO for search tools
#[derive(Debug, Clone)]
pub struct SearchToolsOutput {
    /// Trimmed query as it was matched
    pub query: String,
    pub hits: Vec<ScoredTool>,
}

/// Search Tools Use Case
pub struct SearchToolsUseCase<R, L>
where
    R: ToolRepository,
    L: RateLimitStore,
{
    tool_repo: Arc<R>,
    limiter: Arc<L>,
    config: Arc<CatalogConfig>,
    clock: SharedClock,
}

impl<R, L> SearchToolsUseCase<R, L>
where
    R: ToolRepository,
    L: RateLimitStore,
{
    pub fn new(
        tool_repo: Arc<R>,
        limiter: Arc<L>,
        config: Arc<CatalogConfig>,
        clock: SharedClock,
    ) -> Self {
        Self {
            tool_repo,
            limiter,
            config,
            clock,
        }
    }

    /// Count a request against the client's search window
    pub async fn admit(&self, client: &ClientKey) -> CatalogResult<()> {
        enforce(self.limiter.as_ref(), &self.clock, client, &self.config.search_limit).await?;
        Ok(())
    }

    pub async fn execute(
        &self,
        client: &ClientKey,
        query: &str,
    ) -> CatalogResult<SearchToolsOutput> {
        self.admit(client).await?;

        let query = query.trim();
        let mut tools = visible(self.tool_repo.list_all().await?);
        sort_tools(&mut tools, ToolOrdering::Manual);
        let hits = search(tools, query);

        tracing::debug!(query, total = hits.len(), "Searched tools");

        Ok(SearchToolsOutput {
            query: query.to_string(),
            hits,
        })
    }
}
