//! Domain Value Objects

use platform::pagination::PageLimits;
use serde::Serialize;

use crate::domain::entities::NewsStory;

/// `pageSize` defaults to 10 and may go up to 50
pub const NEWS_PAGES: PageLimits = PageLimits::new(10, 50);

/// A published story with what is known about where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    #[serde(flatten)]
    pub story: NewsStory,
    pub captured_stories_count: usize,
    pub show_source: bool,
    /// Newest capture's URL
    pub source_url: Option<String>,
    /// Newest capture's outlet name
    pub source_name: Option<String>,
}

impl NewsItem {
    /// Fields this item writes over any same-named story column
    pub const ENRICHED_FIELDS: [&str; 4] = [
        "captured_stories_count",
        "show_source",
        "source_url",
        "source_name",
    ];
}
