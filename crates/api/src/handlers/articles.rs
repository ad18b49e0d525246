//! Public handlers: the article list and single-article pages.

use axum::extract::{Path, State};
use axum::response::Html;
use quill_core::article::ArticleId;
use quill_core::error::CoreError;
use quill_store::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /
///
/// List every article, newest date first.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let articles = ArticleRepo::list(&state.store).await?;
    Ok(views::articles::home_page(&articles))
}

/// GET /article/{id}
///
/// Show one article, or 404 if its file does not exist.
pub async fn show_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = ArticleId::parse(&raw_id)?;
    let article = ArticleRepo::find_by_id(&state.store, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::article_not_found(id.as_str())))?;
    Ok(views::articles::article_page(&article))
}
