//! Domain rules for Quill articles.
//!
//! - [`article`] -- article identity (slug) derivation and parsing.
//! - [`form`] -- required-field extraction for submitted forms.
//! - [`error`] -- the domain error type.

pub mod article;
pub mod error;
pub mod form;
