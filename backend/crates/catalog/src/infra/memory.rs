//! In-memory tool repository
//!
//! Seeded once at startup from a JSON export of the `tool` table.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::Tool;
use crate::domain::repository::ToolRepository;
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryToolRepository {
    tools: Arc<Vec<Tool>>,
}

impl InMemoryToolRepository {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self {
            tools: Arc::new(tools),
        }
    }

    /// Load tools from a JSON array file
    pub async fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::Repository(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw).map_err(|e| match e {
            CatalogError::Repository(msg) => {
                CatalogError::Repository(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_json(raw: &[u8]) -> CatalogResult<Self> {
        let tools: Vec<Tool> =
            serde_json::from_slice(raw).map_err(|e| CatalogError::Repository(e.to_string()))?;

        let hidden = tools.iter().filter(|t| !t.is_visible()).count();
        tracing::info!(count = tools.len(), hidden, "Loaded tools catalog");

        Ok(Self::new(tools))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolRepository for InMemoryToolRepository {
    async fn list_all(&self) -> CatalogResult<Vec<Tool>> {
        Ok(self.tools.as_ref().clone())
    }
}
