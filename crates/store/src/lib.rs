//! Filesystem-backed article store.
//!
//! Articles live as one JSON document per file inside a single directory.
//! [`Store`] is a cheap, cloneable handle to that directory; the actual
//! operations live on [`repositories::ArticleRepo`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;

/// Handle to the articles directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: Arc<PathBuf>,
}

impl Store {
    /// Wrap an existing directory without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Open the store, creating the directory (and parents) if it is missing.
pub async fn open_store(root: impl Into<PathBuf>) -> Result<Store, StoreError> {
    let store = Store::new(root);
    tokio::fs::create_dir_all(store.root())
        .await
        .map_err(|e| StoreError::io(store.root(), e))?;
    health_check(&store).await?;
    Ok(store)
}

/// Verify the articles directory exists and is a directory.
pub async fn health_check(store: &Store) -> Result<(), StoreError> {
    let meta = tokio::fs::metadata(store.root())
        .await
        .map_err(|e| StoreError::io(store.root(), e))?;
    if !meta.is_dir() {
        return Err(StoreError::NotADirectory(store.root().to_path_buf()));
    }
    Ok(())
}
