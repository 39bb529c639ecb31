//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use platform::pagination::Page;

use crate::application::SearchToolsOutput;
use crate::domain::entities::Tool;
use crate::error::{CatalogError, CatalogResult};

/// Response for GET /api/tools
#[derive(Debug, Clone, Serialize)]
pub struct ToolsPageResponse {
    pub results: Vec<Tool>,
    pub count: usize,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    pub next: Option<u32>,
    pub previous: Option<u32>,
}

impl From<Page<Tool>> for ToolsPageResponse {
    fn from(page: Page<Tool>) -> Self {
        Self {
            results: page.items,
            count: page.count,
            page: page.page,
            page_size: page.page_size,
            next: page.next,
            previous: page.previous,
        }
    }
}

/// Request for POST /api/tools/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchRequest {
    /// A missing or null `query` searches for everything
    pub fn from_body(body: &[u8]) -> CatalogResult<Self> {
        serde_json::from_slice(body).map_err(|e| CatalogError::InvalidBody(e.to_string()))
    }

    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub tool: Tool,
    pub relevance_score: f64,
    pub metadata: Map<String, Value>,
}

/// Response for POST /api/tools/search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub total: usize,
}

impl From<SearchToolsOutput> for SearchResponse {
    fn from(output: SearchToolsOutput) -> Self {
        let results: Vec<SearchHit> = output
            .hits
            .into_iter()
            .map(|hit| SearchHit {
                tool: hit.tool,
                relevance_score: hit.relevance_score,
                metadata: Map::new(),
            })
            .collect();

        Self {
            query: output.query,
            total: results.len(),
            results,
        }
    }
}
