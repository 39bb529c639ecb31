//! Router-level tests for the tools catalog

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use catalog::{CatalogConfig, CatalogLimiters, InMemoryToolRepository, catalog_router};
use platform::clock::ManualClock;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn tools() -> InMemoryToolRepository {
    InMemoryToolRepository::from_json(
        json!([
            {
                "id": 1, "name": "Cursor", "short_description": "AI code editor",
                "description": "", "table_order": 2, "external_id": 501
            },
            {
                "id": 2, "name": "Aider", "short_description": "Pair programmer",
                "description": "Works in your editor", "table_order": 1
            },
            {
                "id": 3, "name": "Retired", "short_description": "", "description": "",
                "show_on_site": false
            },
            {
                "id": 4, "name": "Zed", "short_description": "", "description": "",
                "updated_at": "2025-06-01T00:00:00"
            }
        ])
        .to_string()
        .as_bytes(),
    )
    .unwrap()
}

fn app(clock: Arc<ManualClock>, config: CatalogConfig) -> Router {
    let limiters = CatalogLimiters::in_memory(clock.clone());
    Router::new().nest("/api/tools", catalog_router(tools(), config, limiters, clock))
}

fn get(uri: &str, ip: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-forwarded-for", format!("{ip}, 10.0.0.1"))
        .body(Body::empty())
        .unwrap()
}

fn search(body: &str, ip: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tools/search")
        .header("x-real-ip", ip)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_tools_default_page() {
    let app = app(Arc::new(ManualClock::new(0)), CatalogConfig::default());

    let response = app.oneshot(get("/api/tools", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 20);
    assert_eq!(body["next"], Value::Null);
    assert_eq!(body["previous"], Value::Null);

    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Aider", "Cursor", "Zed"]);
    assert_eq!(body["results"][1]["external_id"], "501");
    assert_eq!(body["results"][1]["categories"], json!([]));
}

#[tokio::test]
async fn test_list_tools_recent_and_paging() {
    let clock = Arc::new(ManualClock::new(0));

    let response = app(clock.clone(), CatalogConfig::default())
        .oneshot(get("/api/tools?ordering=recent&page=2&pageSize=1", "203.0.113.9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["next"], 3);
    assert_eq!(body["previous"], 1);
}

#[tokio::test]
async fn test_list_tools_bad_pagination() {
    let clock = Arc::new(ManualClock::new(0));

    for uri in ["/api/tools?page=0", "/api/tools?pageSize=101", "/api/tools?page=abc"] {
        let response = app(clock.clone(), CatalogConfig::default())
            .oneshot(get(uri, "203.0.113.9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_list_tools_rate_limited() {
    let clock = Arc::new(ManualClock::new(0));
    let app = app(clock.clone(), CatalogConfig::per_minute(2, 30));

    for _ in 0..2 {
        let response = app.clone().oneshot(get("/api/tools", "203.0.113.9")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    clock.advance_secs(20);
    let response = app.clone().oneshot(get("/api/tools", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "40");

    // Searching has its own budget
    let response = app
        .clone()
        .oneshot(search(r#"{"query":"zed"}"#, "203.0.113.9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/api/tools", "198.51.100.4")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    clock.advance_secs(41);
    let response = app.oneshot(get("/api/tools", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_repeated_query_keys_are_counted_when_over_quota() {
    let clock = Arc::new(ManualClock::new(0));
    let app = app(clock.clone(), CatalogConfig::per_minute(1, 30));

    let response = app.clone().oneshot(get("/api/tools", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/api/tools", "203.0.113.9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(get("/api/tools?page=1&page=2", "203.0.113.9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "60");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = json_body(response).await;
        assert_eq!(body["status"], 429);
    }
}

#[tokio::test]
async fn test_repeated_query_keys_first_value_wins() {
    let app = app(Arc::new(ManualClock::new(0)), CatalogConfig::default());

    let response = app
        .oneshot(get(
            "/api/tools?page=2&pageSize=1&page=9&pageSize=0&ordering=recent&ordering=x",
            "203.0.113.9",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["pageSize"], 1);
    assert_eq!(body["previous"], 1);
    assert_eq!(body["results"][0]["name"], "Aider");
}

#[tokio::test]
async fn test_search_scores_and_shape() {
    let app = app(Arc::new(ManualClock::new(0)), CatalogConfig::default());

    let response = app
        .oneshot(search(r#"{"query":" editor "}"#, "203.0.113.9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["query"], "editor");
    assert_eq!(body["total"], 2);
    assert_eq!(body["results"][0]["tool"]["name"], "Cursor");
    assert_eq!(body["results"][0]["relevance_score"], 0.7);
    assert_eq!(body["results"][0]["metadata"], json!({}));
    assert_eq!(body["results"][1]["tool"]["name"], "Aider");
    assert_eq!(body["results"][1]["relevance_score"], 0.5);
}

#[tokio::test]
async fn test_search_empty_query_and_bad_body() {
    let clock = Arc::new(ManualClock::new(0));

    let response = app(clock.clone(), CatalogConfig::default())
        .oneshot(search(r#"{}"#, "203.0.113.9"))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["query"], "");

    let response = app(clock, CatalogConfig::default())
        .oneshot(search("not json", "203.0.113.9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
