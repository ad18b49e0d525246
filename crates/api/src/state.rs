use std::sync::Arc;

use quill_store::Store;

use crate::auth::credentials::{CredentialChecker, StaticCredentials};
use crate::auth::session::{InMemorySessionStore, SessionStore};
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the articles directory.
    pub store: Store,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Server-side session markers, keyed by session token.
    pub sessions: Arc<dyn SessionStore>,
    /// Decides whether a username/password pair may log in.
    pub credentials: Arc<dyn CredentialChecker>,
}

impl AppState {
    /// Build state with the production session store and credential checker
    /// derived from `config`.
    pub fn new(store: Store, config: ServerConfig) -> Self {
        let sessions = Arc::new(InMemorySessionStore::new(chrono::Duration::minutes(
            config.session_ttl_mins,
        )));
        let credentials = Arc::new(StaticCredentials::new(
            &config.admin_username,
            &config.admin_password,
        ));
        Self {
            store,
            config: Arc::new(config),
            sessions,
            credentials,
        }
    }
}
