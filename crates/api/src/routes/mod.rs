pub mod admin;
pub mod articles;
pub mod auth;
pub mod health;

use std::time::Duration;

use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// /health                      health (JSON)
///
/// /                            article list (public)
/// /article/{id}                one article (public)
///
/// /login                       login form / authenticate
/// /logout                      clear session
///
/// /admin/dashboard             article management (admin)
/// /admin/add                   add form / create (admin)
/// /admin/edit/{id}             edit form / update (admin)
/// /admin/delete/{id}           delete (admin, POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(articles::router())
        .merge(auth::router())
        .nest("/admin", admin::router())
}

/// Build the full application: routes, middleware stack and shared state.
///
/// Used by both `main` and the integration tests so they exercise the same
/// stack (request ID, tracing, timeout, panic recovery).
pub fn build_app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    app_routes()
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}
