//! Required-field extraction for submitted forms.
//!
//! Form structs keep every field as `Option<String>` so a missing field
//! surfaces as a [`CoreError::Validation`] instead of a rejected request
//! body with an opaque message.

use crate::error::CoreError;

/// Take a required field out of a submitted form.
///
/// Empty values are accepted; only an absent field is an error.
pub fn require_field(name: &str, value: Option<String>) -> Result<String, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Missing required field '{name}'")))
}

/// Title, content and date of an article as submitted by the admin forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub date: String,
}

impl ArticleFields {
    /// Build from raw optional form values, failing on the first missing one.
    pub fn from_form(
        title: Option<String>,
        content: Option<String>,
        date: Option<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            title: require_field("title", title)?,
            content: require_field("content", content)?,
            date: require_field("date", date)?,
        })
    }
}
