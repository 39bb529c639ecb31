//! Repository Traits
//!
//! Interfaces for data access. Implementation is in infrastructure layer.

use crate::domain::entities::Tool;
use crate::error::CatalogResult;

/// Tool catalog repository trait
#[trait_variant::make(ToolRepository: Send)]
pub trait LocalToolRepository {
    /// Every tool, hidden ones included, in no particular order
    async fn list_all(&self) -> CatalogResult<Vec<Tool>>;
}
