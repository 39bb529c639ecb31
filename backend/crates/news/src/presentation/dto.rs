//! API DTOs (Data Transfer Objects)

use platform::pagination::Page;
use serde::Serialize;

use crate::domain::value_objects::NewsItem;

/// Response for GET /api/news
#[derive(Debug, Clone, Serialize)]
pub struct NewsPageResponse {
    pub data: Vec<NewsItem>,
    pub count: usize,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

impl From<Page<NewsItem>> for NewsPageResponse {
    fn from(page: Page<NewsItem>) -> Self {
        Self {
            has_more: page.has_more(),
            data: page.items,
            count: page.count,
            page: page.page,
            page_size: page.page_size,
        }
    }
}
