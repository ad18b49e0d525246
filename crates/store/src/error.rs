use std::path::PathBuf;

use quill_core::error::CoreError;

/// Errors raised by the article store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain rule rejected the operation (e.g. an unusable identity).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The filesystem refused a read, write, rename or delete.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file exists but is not a valid article document.
    #[error("Malformed article file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configured articles path exists but is not a directory.
    #[error("Articles path {0} is not a directory")]
    NotADirectory(PathBuf),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
