//! Router-level tests for the access gate
//!
//! Drives the nested router with `oneshot` requests and a manual clock.

use access::{AccessConfig, InMemorySkillRepository, access_router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use platform::clock::ManualClock;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const START_SECS: i64 = 1_767_225_600;

fn skills() -> InMemorySkillRepository {
    let skills = serde_json::from_value(json!([
        { "id": 1, "name": "pdf", "downloads": 12 },
        { "id": 2, "name": "xlsx" },
        { "id": 3, "name": "docx", "downloads": 40 }
    ]))
    .unwrap();
    InMemorySkillRepository::new(skills)
}

fn app(clock: Arc<ManualClock>) -> Router {
    Router::new().nest(
        "/api/cc-skills",
        access_router(skills(), AccessConfig::development("AI2026"), clock),
    )
}

fn auth_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/cc-skills/auth")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/api/cc-skills");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_auth_with_correct_password_sets_cookie() {
    let clock = Arc::new(ManualClock::at_secs(START_SECS));
    let response = app(clock).oneshot(auth_request(r#"{"password":"AI2026"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with(&format!("cc_skills_ok={}.", START_SECS + 3600)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=3600"));
    assert!(!cookie.contains("Secure"));

    assert_eq!(json_body(response).await, json!({ "ok": true }));
}

#[tokio::test]
async fn test_auth_with_wrong_password_is_unauthorized() {
    let clock = Arc::new(ManualClock::at_secs(START_SECS));

    for body in [r#"{"password":"wrong"}"#, r#"{}"#, "not json"] {
        let response = app(clock.clone()).oneshot(auth_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "body {body:?}");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}

#[tokio::test]
async fn test_auth_without_password_configured() {
    let clock = Arc::new(ManualClock::at_secs(START_SECS));
    let app = Router::new().nest(
        "/api/cc-skills",
        access_router(skills(), AccessConfig::default(), clock),
    );

    let response = app.oneshot(auth_request(r#"{"password":"AI2026"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_listing_requires_cookie() {
    let clock = Arc::new(ManualClock::at_secs(START_SECS));

    let response = app(clock.clone()).oneshot(list_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app(clock)
        .oneshot(list_request(Some("cc_skills_ok=9999999999.deadbeef")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_unlocks_listing_until_expiry() {
    let clock = Arc::new(ManualClock::at_secs(START_SECS));

    let response = app(clock.clone())
        .oneshot(auth_request(r#"{"password":"AI2026"}"#))
        .await
        .unwrap();
    let cookie = set_cookie(&response);
    let pair = cookie.split(';').next().unwrap().to_string();

    clock.advance_secs(3000);
    let response = app(clock.clone()).oneshot(list_request(Some(&pair))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let names: Vec<&str> = body["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|skill| skill["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["docx", "pdf", "xlsx"]);

    clock.advance_secs(700);
    let response = app(clock).oneshot(list_request(Some(&pair))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let clock = Arc::new(ManualClock::at_secs(START_SECS));
    let request = Request::builder()
        .method("POST")
        .uri("/api/cc-skills/logout")
        .body(Body::empty())
        .unwrap();

    let response = app(clock).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        set_cookie(&response),
        "cc_skills_ok=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
    );
}
