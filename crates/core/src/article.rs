//! Article identity rules.
//!
//! An article is identified by the stem of its file on disk. The identity is
//! derived once from the title when the article is created and is never
//! recomputed afterwards: editing the title leaves the identity (and the
//! file name) untouched, so the two can diverge.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// File extension of every stored article record.
pub const ARTICLE_FILE_EXTENSION: &str = "json";

/// Stable identity of a stored article (the file name without extension).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Derive the identity of a new article from its title.
    ///
    /// The title is lowercased and every space becomes `_`. No other
    /// characters are touched, so two titles differing only in case map to
    /// the same identity and overwrite each other.
    pub fn from_title(title: &str) -> Result<Self, CoreError> {
        let slug = generate_slug(title);
        if !is_usable_identity(&slug) {
            return Err(CoreError::Validation(format!(
                "Title '{title}' does not produce a usable article identifier"
            )));
        }
        Ok(Self(slug))
    }

    /// Parse an identity taken from a request path.
    ///
    /// A trailing `.json` is accepted and stripped. Anything that could
    /// escape the articles directory is reported as not found.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let stem = raw
            .strip_suffix(&format!(".{ARTICLE_FILE_EXTENSION}"))
            .unwrap_or(raw);
        if !is_usable_identity(stem) {
            return Err(CoreError::article_not_found(raw));
        }
        Ok(Self(stem.to_string()))
    }

    /// Recover an identity from a file name found on disk.
    ///
    /// Returns `None` for files that are not article records.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(&format!(".{ARTICLE_FILE_EXTENSION}"))?;
        is_usable_identity(stem).then(|| Self(stem.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the file holding this article, e.g. `hello_world.json`.
    pub fn file_name(&self) -> String {
        format!("{}.{ARTICLE_FILE_EXTENSION}", self.0)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase the title and replace spaces with underscores.
pub fn generate_slug(title: &str) -> String {
    title.replace(' ', "_").to_lowercase()
}

/// An identity must be a single, visible path component.
fn is_usable_identity(stem: &str) -> bool {
    !stem.is_empty()
        && !stem.starts_with('.')
        && !stem.contains(['/', '\\', '\0'])
}
