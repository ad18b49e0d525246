//! Repository layer -- one zero-sized struct per record type.
//!
//! Every method takes a [`Store`](crate::Store) handle and goes straight to
//! the filesystem; nothing is cached between calls.

pub mod article_repo;

pub use article_repo::ArticleRepo;
