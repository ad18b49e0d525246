//! Credential checking.

/// Decides whether a username/password pair may open an admin session.
///
/// Injected into [`AppState`](crate::state::AppState) so tests can swap in
/// their own implementation.
pub trait CredentialChecker: Send + Sync {
    fn check(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one configured username/password pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl CredentialChecker for StaticCredentials {
    fn check(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_configured_pair() {
        let creds = StaticCredentials::new("admin", "password");
        assert!(creds.check("admin", "password"));
    }

    #[test]
    fn rejects_wrong_password() {
        let creds = StaticCredentials::new("admin", "password");
        assert!(!creds.check("admin", "Password"));
        assert!(!creds.check("admin", ""));
    }

    #[test]
    fn rejects_wrong_username() {
        let creds = StaticCredentials::new("admin", "password");
        assert!(!creds.check("root", "password"));
        assert!(!creds.check("ADMIN", "password"));
    }
}
