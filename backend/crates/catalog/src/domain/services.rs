//! Domain Services
//!
//! Pure logic over tool rows: visibility, order and search scores.
//!
//! Orderings follow SQL defaults: ascending keys put missing values last,
//! descending keys put them first.

use std::cmp::Ordering;

use platform::pagination::{asc_nulls_last, desc_nulls_first};

use crate::domain::entities::Tool;
use crate::domain::value_objects::{ScoredTool, ToolOrdering};

/// Keep only tools shown on the site
pub fn visible(tools: Vec<Tool>) -> Vec<Tool> {
    tools.into_iter().filter(Tool::is_visible).collect()
}

pub fn sort_tools(tools: &mut [Tool], ordering: ToolOrdering) {
    match ordering {
        ToolOrdering::Manual => tools.sort_by(manual_order),
        ToolOrdering::Recent => {
            tools.sort_by(|a, b| desc_nulls_first(&a.updated_at, &b.updated_at))
        }
    }
}

fn manual_order(a: &Tool, b: &Tool) -> Ordering {
    asc_nulls_last(&a.table_order, &b.table_order)
        .then_with(|| desc_nulls_first(&a.created_at, &b.created_at))
        .then_with(|| a.name.cmp(&b.name))
}

/// Score one tool against an already lowercased needle
///
/// `None` when nothing matches.
pub fn relevance(tool: &Tool, needle: &str) -> Option<f64> {
    if tool.name.to_lowercase().contains(needle) {
        Some(ScoredTool::NAME_MATCH)
    } else if tool.short_description.to_lowercase().contains(needle) {
        Some(ScoredTool::SHORT_DESCRIPTION_MATCH)
    } else if tool.description.to_lowercase().contains(needle) {
        Some(ScoredTool::DESCRIPTION_MATCH)
    } else {
        None
    }
}

/// Score a manually ordered listing against `query`
///
/// An empty query matches everything at full score. Ties keep the listing
/// order.
pub fn search(tools: Vec<Tool>, query: &str) -> Vec<ScoredTool> {
    if query.is_empty() {
        return tools
            .into_iter()
            .map(|tool| ScoredTool {
                tool,
                relevance_score: ScoredTool::NAME_MATCH,
            })
            .collect();
    }

    let needle = query.to_lowercase();
    let mut hits: Vec<ScoredTool> = tools
        .into_iter()
        .filter_map(|tool| {
            relevance(&tool, &needle).map(|relevance_score| ScoredTool {
                tool,
                relevance_score,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    hits
}
