/// Domain-level error shared by every Quill crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a missing article.
    pub fn article_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Article",
            id: id.into(),
        }
    }
}
