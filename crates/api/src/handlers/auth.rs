//! Handlers for login and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use quill_core::form::require_field;

use crate::auth::cookie::{clear_session_cookie, read_session_cookie, session_cookie};
use crate::auth::session::generate_session_token;
use crate::error::AppResult;
use crate::handlers::admin::DASHBOARD_PATH;
use crate::state::AppState;
use crate::views;

/// Body of `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// GET /login
pub async fn login_form() -> Html<String> {
    views::auth::login_page()
}

/// POST /login
///
/// On success a fresh session token is issued and the client is redirected
/// to the dashboard. On failure the login form is rendered again, with no
/// session created and no message shown.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let username = require_field("username", form.username)?;
    let password = require_field("password", form.password)?;

    if !state.credentials.check(&username, &password) {
        tracing::warn!(username = %username, "Failed login attempt");
        return Ok(views::auth::login_page().into_response());
    }

    // Never reuse a token the client brought with it.
    if let Some(previous) = read_session_cookie(&headers) {
        state.sessions.clear(&previous).await;
    }

    let token = generate_session_token();
    state.sessions.set(&token, &username).await;

    tracing::info!(username = %username, "Admin logged in");

    let cookie = session_cookie(&token, state.config.session_cookie_secure);
    Ok(([(SET_COOKIE, cookie)], Redirect::to(DASHBOARD_PATH)).into_response())
}

/// GET /logout
///
/// Clear the server-side session and expire the cookie, then go home.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = read_session_cookie(&headers) {
        state.sessions.clear(&token).await;
        tracing::info!("Admin logged out");
    }

    let cookie = clear_session_cookie(state.config.session_cookie_secure);
    ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}
