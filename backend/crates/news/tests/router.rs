//! Router-level tests for the news feed

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use news::{InMemoryNewsRepository, NewsConfig, news_router};
use platform::clock::ManualClock;
use platform::rate_limit::InMemoryRateLimitStore;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn news() -> InMemoryNewsRepository {
    InMemoryNewsRepository::from_json(
        json!({
            "stories": [
                {
                    "id": 1, "status": "ranked", "rank": 2, "title": "Older",
                    "event_time": "2025-05-01T08:00:00", "created_at": "2025-05-01T09:00:00Z"
                },
                {
                    "id": 2, "status": "ranked", "rank": 4, "title": "Newest",
                    "event_time": "2025-05-03T08:00:00+00:00"
                },
                {
                    "id": 3, "status": "ranked", "rank": 3, "title": "Undated",
                    "event_time": null, "created_at": "2025-05-09T00:00:00Z"
                },
                { "id": 4, "status": "ranked", "rank": 1, "title": "Too low" },
                { "id": 5, "status": "clustered", "rank": 5, "title": "Not ranked" }
            ],
            "captured": [
                {
                    "id": 20, "canonical_story_id": 2, "url": "https://wire.example/2",
                    "source": "Wire", "captured_at": "2025-05-03 09:00:00"
                },
                {
                    "id": 21, "canonical_story_id": 2, "url": "https://blog.example/2",
                    "source": "Blog", "captured_at": "2025-05-03 07:00:00"
                }
            ]
        })
        .to_string()
        .as_bytes(),
    )
    .unwrap()
}

fn app(clock: Arc<ManualClock>, config: NewsConfig) -> Router {
    let limiter = Arc::new(InMemoryRateLimitStore::new(clock.clone()));
    Router::new().nest("/api/news", news_router(news(), config, limiter, clock))
}

fn get(uri: &str, ip: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-forwarded-for", ip)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_news_feed_shape_and_order() {
    let app = app(Arc::new(ManualClock::new(0)), NewsConfig::default());

    let response = app.oneshot(get("/api/news", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
    assert_eq!(body["hasMore"], false);

    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Newest", "Older", "Undated"]);

    let newest = &body["data"][0];
    assert_eq!(newest["captured_stories_count"], 2);
    assert_eq!(newest["show_source"], true);
    assert_eq!(newest["source_url"], "https://wire.example/2");
    assert_eq!(newest["source_name"], "Wire");

    let older = &body["data"][1];
    assert_eq!(older["show_source"], false);
    assert_eq!(older["source_url"], Value::Null);
}

#[tokio::test]
async fn test_news_paging() {
    let app = app(Arc::new(ManualClock::new(0)), NewsConfig::default());

    let response = app
        .clone()
        .oneshot(get("/api/news?page=1&pageSize=2", "203.0.113.9"))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["hasMore"], true);

    let response = app
        .oneshot(get("/api/news?page=2&pageSize=2", "203.0.113.9"))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"][0]["title"], "Undated");
    assert_eq!(body["hasMore"], false);
}

#[tokio::test]
async fn test_news_bad_pagination() {
    let clock = Arc::new(ManualClock::new(0));

    for uri in ["/api/news?page=0", "/api/news?pageSize=51", "/api/news?pageSize=ten"] {
        let response = app(clock.clone(), NewsConfig::default())
            .oneshot(get(uri, "203.0.113.9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body = json_body(response).await;
        assert_eq!(body["detail"], "Invalid page or pageSize parameters");
    }
}

#[tokio::test]
async fn test_news_rate_limited() {
    let clock = Arc::new(ManualClock::new(0));
    let app = app(clock.clone(), NewsConfig::per_minute(1));

    let response = app.clone().oneshot(get("/api/news", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    clock.advance_secs(25);
    for uri in ["/api/news", "/api/news?page=1&page=2"] {
        let response = app.clone().oneshot(get(uri, "203.0.113.9")).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS, "{uri}");
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "35");
    }

    let response = app.clone().oneshot(get("/api/news", "198.51.100.4")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    clock.advance_secs(36);
    let response = app.oneshot(get("/api/news", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
