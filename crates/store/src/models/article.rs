//! Article record as stored on disk.

use quill_core::article::ArticleId;
use quill_core::form::ArticleFields;
use serde::{Deserialize, Serialize};

/// Contents of one `<id>.json` file.
///
/// `date` is free text; ordering compares it as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub date: String,
}

impl From<ArticleFields> for Article {
    fn from(fields: ArticleFields) -> Self {
        Self {
            title: fields.title,
            content: fields.content,
            date: fields.date,
        }
    }
}

/// An article paired with the identity it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedArticle {
    pub id: ArticleId,
    #[serde(flatten)]
    pub article: Article,
}
