use std::path::PathBuf;

/// Default administrator username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Default administrator password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";
/// Default session lifetime in minutes (31 days).
const DEFAULT_SESSION_TTL_MINS: i64 = 31 * 24 * 60;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Directory holding one JSON file per article (default: `articles`).
    pub articles_dir: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// The single administrator credential pair.
    pub admin_username: String,
    pub admin_password: String,
    /// Session lifetime in minutes.
    pub session_ttl_mins: i64,
    /// Adds the `Secure` attribute to the session cookie when `true`.
    pub session_cookie_secure: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default      |
    /// |-------------------------|--------------|
    /// | `HOST`                  | `0.0.0.0`    |
    /// | `PORT`                  | `3000`       |
    /// | `ARTICLES_DIR`          | `articles`   |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`         |
    /// | `ADMIN_USERNAME`        | `admin`      |
    /// | `ADMIN_PASSWORD`        | `password`   |
    /// | `SESSION_TTL_MINS`      | `44640`      |
    /// | `SESSION_COOKIE_SECURE` | `false`      |
    ///
    /// # Panics
    ///
    /// Panics if a numeric or boolean variable cannot be parsed.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let articles_dir = std::env::var("ARTICLES_DIR")
            .unwrap_or_else(|_| "articles".into())
            .into();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.into());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into());

        let session_ttl_mins: i64 = std::env::var("SESSION_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_MINS.to_string())
            .parse()
            .expect("SESSION_TTL_MINS must be a valid i64");

        let session_cookie_secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be `true` or `false`");

        Self {
            host,
            port,
            articles_dir,
            request_timeout_secs,
            admin_username,
            admin_password,
            session_ttl_mins,
            session_cookie_secure,
        }
    }
}
