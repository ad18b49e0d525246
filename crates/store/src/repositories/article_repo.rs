//! Repository for article records (`<id>.json` files).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quill_core::article::ArticleId;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::article::{Article, ListedArticle};
use crate::Store;

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List every readable article, newest `date` first.
    ///
    /// Files that cannot be opened or parsed are logged and skipped so one
    /// bad record never hides the rest. Ties keep directory order.
    pub async fn list(store: &Store) -> Result<Vec<ListedArticle>, StoreError> {
        let mut entries = tokio::fs::read_dir(store.root())
            .await
            .map_err(|e| StoreError::io(store.root(), e))?;

        let mut articles = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(store.root(), e))?
        {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(
                    path = %entry.path().display(),
                    "Skipping article directory entry with a non-UTF-8 name"
                );
                continue;
            };
            let Some(id) = ArticleId::from_file_name(name) else {
                continue;
            };

            match read_article(&entry.path()).await {
                Ok(article) => articles.push(ListedArticle { id, article }),
                Err(err) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %err,
                        "Skipping unreadable article file"
                    );
                }
            }
        }

        articles.sort_by(|a, b| b.article.date.cmp(&a.article.date));
        Ok(articles)
    }

    /// Find an article by identity. `Ok(None)` when no such file exists.
    pub async fn find_by_id(store: &Store, id: &ArticleId) -> Result<Option<Article>, StoreError> {
        match read_article(&article_path(store, id)).await {
            Ok(article) => Ok(Some(article)),
            Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Create an article, deriving its identity from the title.
    ///
    /// An existing record with the same identity is overwritten.
    pub async fn create(store: &Store, article: &Article) -> Result<ArticleId, StoreError> {
        let id = ArticleId::from_title(&article.title)?;
        write_article(store, &id, article).await?;
        Ok(id)
    }

    /// Replace all fields of an existing article, keeping its identity.
    ///
    /// Returns `Ok(None)` if the article does not exist; nothing is written
    /// in that case.
    pub async fn update(
        store: &Store,
        id: &ArticleId,
        input: &Article,
    ) -> Result<Option<Article>, StoreError> {
        let Some(mut article) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };

        article.title.clone_from(&input.title);
        article.content.clone_from(&input.content);
        article.date.clone_from(&input.date);

        write_article(store, id, &article).await?;
        Ok(Some(article))
    }

    /// Delete an article. Returns `Ok(false)` if it did not exist.
    pub async fn delete(store: &Store, id: &ArticleId) -> Result<bool, StoreError> {
        let path = article_path(store, id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

/* --------------------------------------------------------------------------
File helpers
-------------------------------------------------------------------------- */

fn article_path(store: &Store, id: &ArticleId) -> PathBuf {
    store.root().join(id.file_name())
}

async fn read_article(path: &Path) -> Result<Article, StoreError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| StoreError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write through a hidden temporary file and rename it into place. Readers
/// see either the old record or the new one, never a partial file.
async fn write_article(store: &Store, id: &ArticleId, article: &Article) -> Result<(), StoreError> {
    let path = article_path(store, id);
    let tmp_path = store
        .root()
        .join(format!(".{}.{}.tmp", id, Uuid::new_v4().simple()));

    let bytes = serde_json::to_vec(article).map_err(|source| StoreError::Malformed {
        path: path.clone(),
        source,
    })?;

    replace_file(&tmp_path, &path, &bytes).await
}

/// Write `bytes` to `tmp_path` and rename it over `path`. The temporary file
/// is removed if either step fails.
async fn replace_file(tmp_path: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Err(e) = tokio::fs::write(tmp_path, bytes).await {
        let _ = tokio::fs::remove_file(tmp_path).await;
        return Err(StoreError::io(tmp_path, e));
    }

    if let Err(e) = tokio::fs::rename(tmp_path, path).await {
        let _ = tokio::fs::remove_file(tmp_path).await;
        return Err(StoreError::io(path, e));
    }
    Ok(())
}
