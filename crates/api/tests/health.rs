mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_state, get, test_config};
use quill_api::state::AppState;
use quill_store::Store;
use tempfile::TempDir;

#[tokio::test]
async fn health_reports_ok() {
    let t = build_test_app();

    let response = get(t.app.clone(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn health_is_degraded_when_directory_is_missing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    let state = AppState::new(Store::new(&missing), test_config(&missing));
    let t = build_test_app_with_state(state, dir);

    let json = body_json(get(t.app.clone(), "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let t = build_test_app();

    let response = get(t.app.clone(), "/").await;

    let id = response.headers().get("x-request-id").expect("x-request-id");
    assert!(!id.to_str().unwrap().is_empty());
}
