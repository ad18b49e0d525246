//! Server-side session store.
//!
//! The client only ever holds an opaque random token in a cookie. The store
//! keeps the SHA-256 hash of that token mapped to the authenticated
//! username, so a dump of the store cannot be replayed as cookies.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Get/set/clear of the authenticated marker, keyed by session token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Username bound to `token`, if the session exists and is still live.
    async fn get(&self, token: &str) -> Option<String>;

    /// Bind `username` to `token`, replacing any previous binding.
    async fn set(&self, token: &str, username: &str);

    /// Drop the session for `token`. No-op if absent.
    async fn clear(&self, token: &str);
}

struct SessionEntry {
    username: String,
    created_at: DateTime<Utc>,
}

/// Process-local session store. Not shared across instances.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: chrono::Duration,
}

impl InMemorySessionStore {
    /// Create an empty store whose sessions expire `ttl` after login.
    pub fn new(ttl: chrono::Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of stored sessions, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn is_live(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        entry.created_at + self.ttl > now
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, token: &str) -> Option<String> {
        let key = hash_session_token(token);
        let sessions = self.sessions.read().await;
        sessions
            .get(&key)
            .filter(|entry| self.is_live(entry, Utc::now()))
            .map(|entry| entry.username.clone())
    }

    async fn set(&self, token: &str, username: &str) {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| self.is_live(entry, now));
        sessions.insert(
            hash_session_token(token),
            SessionEntry {
                username: username.to_string(),
                created_at: now,
            },
        );
    }

    async fn clear(&self, token: &str) {
        self.sessions
            .write()
            .await
            .remove(&hash_session_token(token));
    }
}

/// Generate a fresh random session token for a new login.
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// SHA-256 hex digest of a session token; the key used inside the store.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
