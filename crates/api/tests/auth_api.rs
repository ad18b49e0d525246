//! HTTP-level tests for login and logout.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_text, build_test_app, build_test_app_with_state, clears_session_cookie, get,
    get_with_cookie, location, post_form, session_cookie_from, test_config, ADMIN_PASSWORD,
    ADMIN_USERNAME,
};
use quill_api::auth::credentials::CredentialChecker;
use quill_api::state::AppState;
use quill_store::Store;
use tempfile::TempDir;

#[tokio::test]
async fn login_form_renders() {
    let t = build_test_app();

    let response = get(t.app.clone(), "/login").await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("name=\"username\""));
    assert!(page.contains("name=\"password\""));
}

#[tokio::test]
async fn valid_login_sets_cookie_and_opens_admin() {
    let t = build_test_app();

    let response = post_form(
        t.app.clone(),
        "/login",
        &format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}"),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/admin/dashboard"));
    let cookie = session_cookie_from(&response).expect("session cookie");

    let dashboard = get_with_cookie(t.app.clone(), "/admin/dashboard", Some(&cookie)).await;
    assert_eq!(dashboard.status(), StatusCode::OK);
    assert!(body_text(dashboard)
        .await
        .contains(&format!("Signed in as {ADMIN_USERNAME}.")));
}

#[tokio::test]
async fn session_cookie_is_http_only() {
    let t = build_test_app();

    let response = post_form(
        t.app.clone(),
        "/login",
        &format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}"),
        None,
    )
    .await;

    let set_cookie = response.headers()["set-cookie"].to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn wrong_credentials_rerender_form_without_session() {
    let t = build_test_app();

    let response = post_form(
        t.app.clone(),
        "/login",
        &format!("username={ADMIN_USERNAME}&password=wrong"),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie_from(&response).is_none());
    assert!(body_text(response).await.contains("action=\"/login\""));

    let dashboard = get(t.app.clone(), "/admin/dashboard").await;
    assert_eq!(location(&dashboard), Some("/login"));
}

#[tokio::test]
async fn login_with_missing_field_is_400() {
    let t = build_test_app();

    let response = post_form(t.app.clone(), "/login", "username=admin", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie_from(&response).is_none());
}

#[tokio::test]
async fn each_login_issues_a_fresh_token() {
    let t = build_test_app();

    let first = t.login().await;
    let second = post_form(
        t.app.clone(),
        "/login",
        &format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}"),
        Some(&first),
    )
    .await;
    let second = session_cookie_from(&second).expect("session cookie");

    assert_ne!(first, second);
    let stale = get_with_cookie(t.app.clone(), "/admin/dashboard", Some(&first)).await;
    assert_eq!(location(&stale), Some("/login"));
    let live = get_with_cookie(t.app.clone(), "/admin/dashboard", Some(&second)).await;
    assert_eq!(live.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_clears_session_and_cookie() {
    let t = build_test_app();
    let cookie = t.login().await;

    let response = get_with_cookie(t.app.clone(), "/logout", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
    assert!(clears_session_cookie(&response));

    let dashboard = get_with_cookie(t.app.clone(), "/admin/dashboard", Some(&cookie)).await;
    assert_eq!(location(&dashboard), Some("/login"));
}

#[tokio::test]
async fn logout_without_session_still_redirects_home() {
    let t = build_test_app();

    let response = get(t.app.clone(), "/logout").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/"));
}

struct AcceptEveryone;

impl CredentialChecker for AcceptEveryone {
    fn check(&self, _username: &str, _password: &str) -> bool {
        true
    }
}

#[tokio::test]
async fn credential_checker_is_injectable() {
    let dir = TempDir::new().unwrap();
    let mut state = AppState::new(Store::new(dir.path()), test_config(dir.path()));
    state.credentials = Arc::new(AcceptEveryone);
    let t = build_test_app_with_state(state, dir);

    let response = post_form(t.app.clone(), "/login", "username=editor&password=x", None).await;

    assert_eq!(location(&response), Some("/admin/dashboard"));
    let cookie = session_cookie_from(&response).expect("session cookie");
    let dashboard = get_with_cookie(t.app.clone(), "/admin/dashboard", Some(&cookie)).await;
    assert!(body_text(dashboard).await.contains("Signed in as editor."));
}
