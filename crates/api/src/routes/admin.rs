//! Route definitions for the `/admin` pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require an admin session.
///
/// ```text
/// GET  /dashboard       dashboard
/// GET  /add             add_form
/// POST /add             create_article
/// GET  /edit/{id}       edit_form
/// POST /edit/{id}       update_article
/// POST /delete/{id}     delete_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/add", get(admin::add_form).post(admin::create_article))
        .route(
            "/edit/{id}",
            get(admin::edit_form).post(admin::update_article),
        )
        .route("/delete/{id}", post(admin::delete_article))
}
