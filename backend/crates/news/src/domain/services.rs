//! Domain Services
//!
//! Pure logic over story rows: what is published, feed order, and which
//! capture names the source.

use std::collections::HashMap;

use platform::pagination::{desc_nulls_first, desc_nulls_last};

use crate::domain::entities::{CapturedStory, NewsStory};
use crate::domain::value_objects::NewsItem;

/// Keep only ranked stories of rank 2 and up
pub fn published(stories: Vec<NewsStory>) -> Vec<NewsStory> {
    stories.into_iter().filter(NewsStory::is_published).collect()
}

/// Latest event first, undated events last, then newest row first
pub fn sort_stories(stories: &mut [NewsStory]) {
    stories.sort_by(|a, b| {
        desc_nulls_last(&a.event_time, &b.event_time)
            .then_with(|| desc_nulls_first(&a.created_at, &b.created_at))
    });
}

/// Annotate each story with its captures
///
/// The newest capture supplies the source link; empty URLs or names count
/// as missing.
pub fn enrich(stories: Vec<NewsStory>, mut captured: Vec<CapturedStory>) -> Vec<NewsItem> {
    captured.sort_by(|a, b| desc_nulls_first(&a.captured_at, &b.captured_at));

    let mut by_story: HashMap<i64, Vec<CapturedStory>> = HashMap::new();
    for capture in captured {
        by_story
            .entry(capture.canonical_story_id)
            .or_default()
            .push(capture);
    }

    stories
        .into_iter()
        .map(|mut story| {
            for field in NewsItem::ENRICHED_FIELDS {
                story.extra.remove(field);
            }

            let captures = by_story.remove(&story.id).unwrap_or_default();
            let newest = captures.first();
            NewsItem {
                captured_stories_count: captures.len(),
                show_source: !captures.is_empty(),
                source_url: newest.and_then(|c| non_empty(&c.url)),
                source_name: newest.and_then(|c| non_empty(&c.source)),
                story,
            }
        })
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}
