//! Domain Entities

use chrono::{DateTime, Utc};
use platform::timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A deduplicated story, ranked by the news pipeline
///
/// Columns not modelled here are kept in `extra` and written back out
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsStory {
    pub id: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub event_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewsStory {
    pub const RANKED: &str = "ranked";
    pub const MIN_PUBLISHED_RANK: i64 = 2;

    pub fn new(id: i64) -> Self {
        Self {
            id,
            status: None,
            rank: None,
            event_time: None,
            created_at: None,
            extra: Map::new(),
        }
    }

    /// Ranked and at least rank 2
    pub fn is_published(&self) -> bool {
        self.status.as_deref() == Some(Self::RANKED)
            && self.rank.is_some_and(|rank| rank >= Self::MIN_PUBLISHED_RANK)
    }
}

/// One outlet's copy of a canonical story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedStory {
    pub id: i64,
    pub canonical_story_id: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub captured_at: Option<DateTime<Utc>>,
}
