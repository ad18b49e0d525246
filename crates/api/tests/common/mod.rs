#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use quill_api::config::ServerConfig;
use quill_api::routes;
use quill_api::state::AppState;
use quill_store::models::article::Article;
use quill_store::repositories::ArticleRepo;
use quill_store::Store;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password";

/// Build a test `ServerConfig` pointing at `articles_dir`.
pub fn test_config(articles_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        articles_dir: articles_dir.to_path_buf(),
        request_timeout_secs: 30,
        admin_username: ADMIN_USERNAME.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        session_ttl_mins: 60,
        session_cookie_secure: false,
    }
}

/// A fully wired application over its own temporary articles directory.
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    pub fn store(&self) -> &Store {
        &self.state.store
    }

    /// Sorted file names currently in the articles directory.
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Write an article straight through the store, bypassing HTTP.
    pub async fn seed(&self, title: &str, content: &str, date: &str) -> String {
        let article = Article {
            title: title.to_string(),
            content: content.to_string(),
            date: date.to_string(),
        };
        ArticleRepo::create(self.store(), &article)
            .await
            .expect("seeding should succeed")
            .to_string()
    }

    /// Log in with the configured credentials and return the `Cookie` value.
    pub async fn login(&self) -> String {
        let response = post_form(
            self.app.clone(),
            "/login",
            &format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}"),
            None,
        )
        .await;
        session_cookie_from(&response).expect("successful login must set a session cookie")
    }
}

/// Build the full application (same middleware stack as `main`).
pub fn build_test_app() -> TestApp {
    let dir = TempDir::new().expect("temp dir should be created");
    let state = AppState::new(Store::new(dir.path()), test_config(dir.path()));
    build_test_app_with_state(state, dir)
}

/// Build the application around a caller-supplied state.
pub fn build_test_app_with_state(state: AppState, dir: TempDir) -> TestApp {
    let app = routes::build_app(state.clone());
    TestApp { app, state, dir }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should be handled")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with_cookie(app, uri, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_form(
    app: Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// `name=value` of the session cookie set by `response`, if any.
pub fn session_cookie_from(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter(|v| v.starts_with("quill_session="))
        .filter_map(|v| v.split(';').next())
        .map(str::to_string)
        .find(|pair| pair != "quill_session=")
}

/// Whether `response` tells the browser to drop the session cookie.
pub fn clears_session_cookie(response: &Response<Body>) -> bool {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("quill_session=;") && v.contains("Max-Age=0"))
}
