use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use quill_core::error::CoreError;
use quill_store::StoreError;

/// Path unauthenticated admin requests are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for filesystem
/// failures, and adds HTTP-specific variants. Every variant renders as a
/// short plain-text body, except [`AppError::LoginRequired`] which redirects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `quill_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the article store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An admin route was requested without a live session.
    #[error("Login required")]
    LoginRequired,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Store(StoreError::Core(core)) => classify_core_error(core),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Article store error");
                internal()
            }
            AppError::LoginRequired => return Redirect::to(LOGIN_PATH).into_response(),
        };

        (status, message).into_response()
    }
}

/// Map a [`CoreError`] to an HTTP status and plain-text message.
fn classify_core_error(err: &CoreError) -> (StatusCode, String) {
    match err {
        CoreError::NotFound { entity, .. } => (StatusCode::NOT_FOUND, format!("{entity} not found")),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
