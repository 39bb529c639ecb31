//! Domain Value Objects

use platform::pagination::PageLimits;
use serde::Serialize;

use crate::domain::entities::Tool;

/// `pageSize` defaults to 20 and may go up to 100
pub const TOOL_PAGES: PageLimits = PageLimits::new(20, 100);

/// Listing order for `GET /api/tools`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolOrdering {
    /// Curated `table_order`, then newest, then name
    #[default]
    Manual,
    /// Most recently updated first
    Recent,
}

impl ToolOrdering {
    /// Anything other than `recent` means manual
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("recent") => ToolOrdering::Recent,
            _ => ToolOrdering::Manual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolOrdering::Manual => "manual",
            ToolOrdering::Recent => "recent",
        }
    }
}

/// A search match and how well it matched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTool {
    pub tool: Tool,
    pub relevance_score: f64,
}

impl ScoredTool {
    pub const NAME_MATCH: f64 = 1.0;
    pub const SHORT_DESCRIPTION_MATCH: f64 = 0.7;
    pub const DESCRIPTION_MATCH: f64 = 0.5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_parse() {
        assert_eq!(ToolOrdering::parse(Some("recent")), ToolOrdering::Recent);
        assert_eq!(ToolOrdering::parse(Some("manual")), ToolOrdering::Manual);
        assert_eq!(ToolOrdering::parse(Some("RECENT")), ToolOrdering::Manual);
        assert_eq!(ToolOrdering::parse(None), ToolOrdering::Manual);
    }
}
