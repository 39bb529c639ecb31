//! List News Use Case

use std::sync::Arc;

use platform::client::ClientKey;
use platform::clock::SharedClock;
use platform::pagination::{Page, PageRequest, first_value, paginate};
use platform::rate_limit::RateLimitStore;

use crate::application::config::NewsConfig;
use crate::application::throttle::enforce;
use crate::domain::repository::NewsRepository;
use crate::domain::services::{enrich, published, sort_stories};
use crate::domain::value_objects::{NEWS_PAGES, NewsItem};
use crate::error::{NewsError, NewsResult};

/// Input DTO for list news
///
/// Raw query pairs, read only after the request has been counted.
#[derive(Debug, Clone)]
pub enum ListNewsInput {
    /// Decoded `key=value` pairs in request order
    Query(Vec<(String, String)>),
    /// The query string could not be decoded
    Unreadable,
}

impl Default for ListNewsInput {
    fn default() -> Self {
        ListNewsInput::Query(Vec::new())
    }
}

/// List News Use Case
pub struct ListNewsUseCase<R, L>
where
    R: NewsRepository,
    L: RateLimitStore,
{
    news_repo: Arc<R>,
    limiter: Arc<L>,
    config: Arc<NewsConfig>,
    clock: SharedClock,
}

impl<R, L> ListNewsUseCase<R, L>
where
    R: NewsRepository,
    L: RateLimitStore,
{
    pub fn new(
        news_repo: Arc<R>,
        limiter: Arc<L>,
        config: Arc<NewsConfig>,
        clock: SharedClock,
    ) -> Self {
        Self {
            news_repo,
            limiter,
            config,
            clock,
        }
    }

    pub async fn execute(
        &self,
        client: &ClientKey,
        input: ListNewsInput,
    ) -> NewsResult<Page<NewsItem>> {
        enforce(self.limiter.as_ref(), &self.clock, client, &self.config.list_limit).await?;

        let ListNewsInput::Query(pairs) = input else {
            return Err(NewsError::InvalidPagination);
        };
        let request = PageRequest::parse(
            first_value(&pairs, "page"),
            first_value(&pairs, "pageSize"),
            NEWS_PAGES,
        )?;

        let mut stories = published(self.news_repo.list_stories().await?);
        sort_stories(&mut stories);
        let page = paginate(stories, request);

        let ids: Vec<i64> = page.items.iter().map(|story| story.id).collect();
        let captured = if ids.is_empty() {
            Vec::new()
        } else {
            // Sources are decoration; the feed is served without them
            match self.news_repo.captured_for(&ids).await {
                Ok(captured) => captured,
                Err(err) => {
                    tracing::warn!(error = %err, "Captured stories unavailable");
                    Vec::new()
                }
            }
        };

        let page = page.map_items(|stories| enrich(stories, captured));

        tracing::debug!(
            page = page.page,
            page_size = page.page_size,
            count = page.count,
            "Listed news"
        );

        Ok(page)
    }
}
