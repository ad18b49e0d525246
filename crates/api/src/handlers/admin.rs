//! Handlers for the `/admin` pages (dashboard, add, edit, delete).
//!
//! Every handler takes [`AdminSession`] as its first argument, so an
//! unauthenticated request is redirected to `/login` before the store is
//! touched.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use quill_core::article::ArticleId;
use quill_core::error::CoreError;
use quill_core::form::ArticleFields;
use quill_store::models::article::Article;
use quill_store::repositories::ArticleRepo;
use quill_store::Store;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;
use crate::views;

/// Where every successful mutation redirects to.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/* --------------------------------------------------------------------------
Form types
-------------------------------------------------------------------------- */

/// Body of `POST /admin/add` and `POST /admin/edit/{id}`.
///
/// Fields are optional so a missing one becomes a 400 with a clear message.
#[derive(Debug, Deserialize)]
pub struct ArticleForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

impl ArticleForm {
    fn into_article(self) -> Result<Article, CoreError> {
        ArticleFields::from_form(self.title, self.content, self.date).map(Article::from)
    }
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch an article by identity or return 404.
async fn ensure_article(store: &Store, id: &ArticleId) -> AppResult<Article> {
    ArticleRepo::find_by_id(store, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::article_not_found(id.as_str())))
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /admin/dashboard
pub async fn dashboard(
    admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Html<String>> {
    let articles = ArticleRepo::list(&state.store).await?;
    Ok(views::admin::dashboard_page(&admin.username, &articles))
}

/// GET /admin/add
///
/// Empty form; the date field defaults to today (UTC).
pub async fn add_form(_admin: AdminSession) -> Html<String> {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    views::admin::add_page(&today)
}

/// POST /admin/add
///
/// Create an article whose identity is derived from the title. An existing
/// article with the same identity is overwritten.
pub async fn create_article(
    admin: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> AppResult<Redirect> {
    let article = form.into_article()?;
    let id = ArticleRepo::create(&state.store, &article).await?;

    tracing::info!(
        username = %admin.username,
        article_id = %id,
        "Article created"
    );

    Ok(Redirect::to(DASHBOARD_PATH))
}

/// GET /admin/edit/{id}
pub async fn edit_form(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = ArticleId::parse(&raw_id)?;
    let article = ensure_article(&state.store, &id).await?;
    Ok(views::admin::edit_page(&id, &article))
}

/// POST /admin/edit/{id}
///
/// Replace title, content and date. The identity never changes, even when
/// the new title would slugify differently.
pub async fn update_article(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<ArticleForm>,
) -> AppResult<Redirect> {
    let id = ArticleId::parse(&raw_id)?;
    ensure_article(&state.store, &id).await?;

    let input = form.into_article()?;
    ArticleRepo::update(&state.store, &id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::article_not_found(id.as_str())))?;

    tracing::info!(
        username = %admin.username,
        article_id = %id,
        "Article updated"
    );

    Ok(Redirect::to(DASHBOARD_PATH))
}

/// POST /admin/delete/{id}
pub async fn delete_article(
    admin: AdminSession,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Redirect> {
    let id = ArticleId::parse(&raw_id)?;
    if !ArticleRepo::delete(&state.store, &id).await? {
        return Err(AppError::Core(CoreError::article_not_found(id.as_str())));
    }

    tracing::info!(
        username = %admin.username,
        article_id = %id,
        "Article deleted"
    );

    Ok(Redirect::to(DASHBOARD_PATH))
}
