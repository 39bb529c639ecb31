//! Repository Traits
//!
//! Interfaces for data access. Implementation is in infrastructure layer.

use crate::domain::entities::{CapturedStory, NewsStory};
use crate::error::NewsResult;

/// News repository trait
#[trait_variant::make(NewsRepository: Send)]
pub trait LocalNewsRepository {
    /// Every canonical story, unpublished ones included, in no particular order
    async fn list_stories(&self) -> NewsResult<Vec<NewsStory>>;

    /// Captures of the given canonical stories, newest first
    async fn captured_for(&self, story_ids: &[i64]) -> NewsResult<Vec<CapturedStory>>;
}
