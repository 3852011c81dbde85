//! HTTP-level tests for the visitor-counter service.
//!
//! Each test gets its own counter file under a tempdir and drives the
//! router directly with `tower::ServiceExt::oneshot`. Requests are issued
//! strictly sequentially; additivity under concurrent access is not
//! guaranteed by the service and is deliberately not asserted here.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use demo_counter::app;
use demo_counter::routes::AppState;
use demo_counter::store::CounterStore;

struct TestService {
    app: Router,
    store: CounterStore,
    _dir: TempDir,
}

async fn service() -> TestService {
    let dir = tempfile::tempdir().unwrap();
    let store = CounterStore::new(dir.path().join("counter.txt"));
    store.init().await.unwrap();

    let state = AppState {
        store: store.clone(),
        instance: "test-pod".to_string(),
    };

    TestService {
        app: app(state),
        store,
        _dir: dir,
    }
}

async fn get(app: &Router, path: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_on_fresh_storage_is_zero() {
    let svc = service().await;

    let (status, content_type, body) = get(&svc.app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"status":"healthy","count":0}"#);
}

#[tokio::test]
async fn test_first_visit_returns_one() {
    let svc = service().await;

    let (status, content_type, body) = get(&svc.app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("Total Visits: 1"));
    assert!(body.contains("Pod: test-pod"));
    assert!(body.contains("counter.txt"));
}

#[tokio::test]
async fn test_sequential_visits_are_additive() {
    let svc = service().await;

    for expected in 1..=5 {
        let (_, _, body) = get(&svc.app, "/").await;
        assert!(body.contains(&format!("Total Visits: {}", expected)));
    }

    assert_eq!(svc.store.load().await, 5);
}

#[tokio::test]
async fn test_health_never_mutates_the_count() {
    let svc = service().await;

    let (_, _, body) = get(&svc.app, "/").await;
    assert!(body.contains("Total Visits: 1"));

    for _ in 0..3 {
        let (_, _, body) = get(&svc.app, "/health").await;
        assert_eq!(body, r#"{"status":"healthy","count":1}"#);
    }

    // Delta between two visits stays +1 regardless of health calls
    let (_, _, body) = get(&svc.app, "/").await;
    assert!(body.contains("Total Visits: 2"));
}

#[tokio::test]
async fn test_reset_rewinds_to_zero() {
    let svc = service().await;

    get(&svc.app, "/").await;
    get(&svc.app, "/").await;

    let (status, content_type, body) = get(&svc.app, "/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "Counter reset to 0");

    let (_, _, body) = get(&svc.app, "/").await;
    assert!(body.contains("Total Visits: 1"));
}

#[tokio::test]
async fn test_malformed_file_is_treated_as_zero() {
    let svc = service().await;

    tokio::fs::write(svc.store.path(), "garbage").await.unwrap();

    let (status, _, body) = get(&svc.app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"healthy","count":0}"#);

    let (_, _, body) = get(&svc.app, "/").await;
    assert!(body.contains("Total Visits: 1"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let svc = service().await;

    let (status, _, _) = get(&svc.app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
