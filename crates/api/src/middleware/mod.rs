//! Request extractors that gate access.
//!
//! - [`auth::AdminSession`] -- requires a live admin session, otherwise redirects to `/login`.

pub mod auth;
