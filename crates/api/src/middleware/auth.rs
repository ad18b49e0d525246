//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::cookie::read_session_cookie;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated administrator, resolved from the session cookie.
///
/// Put it first in an admin handler's argument list: when the request has no
/// live session the handler body never runs and the client is redirected to
/// the login page.
///
/// ```ignore
/// async fn dashboard(admin: AdminSession, State(state): State<AppState>) -> AppResult<Html<String>> {
///     tracing::info!(username = %admin.username, "rendering dashboard");
///     Ok(Html(String::new()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Username stored in the session at login.
    pub username: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = read_session_cookie(&parts.headers).ok_or(AppError::LoginRequired)?;

        let username = state.sessions.get(&token).await.ok_or_else(|| {
            tracing::debug!(path = %parts.uri.path(), "Unknown or expired session");
            AppError::LoginRequired
        })?;

        Ok(AdminSession { username })
    }
}
