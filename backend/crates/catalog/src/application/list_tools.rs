//! List Tools Use Case

use std::sync::Arc;

use platform::client::ClientKey;
use platform::clock::SharedClock;
use platform::pagination::{Page, PageRequest, first_value, paginate};
use platform::rate_limit::RateLimitStore;

use crate::application::config::CatalogConfig;
use crate::application::throttle::enforce;
use crate::domain::entities::Tool;
use crate::domain::repository::ToolRepository;
use crate::domain::services::{sort_tools, visible};
use crate::domain::value_objects::{TOOL_PAGES, ToolOrdering};
use crate::error::{CatalogError, CatalogResult};

/// Input DTO for list tools
///
/// Raw query pairs; they are read only after the request has been counted
/// against the client's window.
#[derive(Debug, Clone)]
pub enum ListToolsInput {
    /// Decoded `key=value` pairs in request order
    Query(Vec<(String, String)>),
    /// The query string could not be decoded
    Unreadable,
}

impl Default for ListToolsInput {
    fn default() -> Self {
        ListToolsInput::Query(Vec::new())
    }
}

/// List Tools Use Case
pub struct ListToolsUseCase<R, L>
where
    R: ToolRepository,
    L: RateLimitStore,
{
    tool_repo: Arc<R>,
    limiter: Arc<L>,
    config: Arc<CatalogConfig>,
    clock: SharedClock,
}

impl<R, L> ListToolsUseCase<R, L>
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

    pub async fn execute(
        &self,
        client: &ClientKey,
        input: ListToolsInput,
    ) -> CatalogResult<Page<Tool>> {
        enforce(self.limiter.as_ref(), &self.clock, client, &self.config.list_limit).await?;

        let ListToolsInput::Query(pairs) = input else {
            return Err(CatalogError::InvalidPagination);
        };
        let request = PageRequest::parse(
            first_value(&pairs, "page"),
            first_value(&pairs, "pageSize"),
            TOOL_PAGES,
        )?;
        let ordering = ToolOrdering::parse(first_value(&pairs, "ordering"));

        let mut tools = visible(self.tool_repo.list_all().await?);
        sort_tools(&mut tools, ordering);
        let page = paginate(tools, request);

        tracing::debug!(
            page = page.page,
            page_size = page.page_size,
            count = page.count,
            ordering = ordering.as_str(),
            "Listed tools"
        );

        Ok(page)
    }
}
