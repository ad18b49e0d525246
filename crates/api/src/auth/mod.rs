//! Authentication primitives.
//!
//! - [`credentials`] -- the credential-checker seam and the single configured pair.
//! - [`session`] -- server-side session store keyed by the session-cookie token.
//! - [`cookie`] -- reading and writing the session cookie.

pub mod cookie;
pub mod credentials;
pub mod session;
