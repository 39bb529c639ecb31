//! In-memory news repository
//!
//! Seeded once at startup from a JSON export holding both story tables:
//! `{"stories": [...], "captured": [...]}`.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use platform::pagination::desc_nulls_first;
use serde::Deserialize;

use crate::domain::entities::{CapturedStory, NewsStory};
use crate::domain::repository::NewsRepository;
use crate::error::{NewsError, NewsResult};

#[derive(Debug, Default, Deserialize)]
struct NewsExport {
    #[serde(default)]
    stories: Vec<NewsStory>,
    #[serde(default)]
    captured: Vec<CapturedStory>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryNewsRepository {
    stories: Arc<Vec<NewsStory>>,
    captured: Arc<Vec<CapturedStory>>,
}

impl InMemoryNewsRepository {
    pub fn new(stories: Vec<NewsStory>, captured: Vec<CapturedStory>) -> Self {
        Self {
            stories: Arc::new(stories),
            captured: Arc::new(captured),
        }
    }

    /// Load both tables from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> NewsResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| NewsError::Repository(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw).map_err(|e| match e {
            NewsError::Repository(msg) => {
                NewsError::Repository(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_json(raw: &[u8]) -> NewsResult<Self> {
        let export: NewsExport =
            serde_json::from_slice(raw).map_err(|e| NewsError::Repository(e.to_string()))?;

        let published = export.stories.iter().filter(|s| s.is_published()).count();
        tracing::info!(
            stories = export.stories.len(),
            published,
            captured = export.captured.len(),
            "Loaded news stories"
        );

        Ok(Self::new(export.stories, export.captured))
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl NewsRepository for InMemoryNewsRepository {
    async fn list_stories(&self) -> NewsResult<Vec<NewsStory>> {
        Ok(self.stories.as_ref().clone())
    }

    async fn captured_for(&self, story_ids: &[i64]) -> NewsResult<Vec<CapturedStory>> {
        let wanted: HashSet<i64> = story_ids.iter().copied().collect();
        let mut captured: Vec<CapturedStory> = self
            .captured
            .iter()
            .filter(|c| wanted.contains(&c.canonical_story_id))
            .cloned()
            .collect();
        captured.sort_by(|a, b| desc_nulls_first(&a.captured_at, &b.captured_at));
        Ok(captured)
    }
}
