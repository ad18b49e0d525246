//! Public article routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// ```text
/// GET /                 home
/// GET /article/{id}     show_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::home))
        .route("/article/{id}", get(articles::show_article))
}
