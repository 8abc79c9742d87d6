use std::fmt;
use std::time::Duration;

use auth::HashCost;
use auth::IssuedToken;

use crate::domain::user::models::User;

/// Username and plaintext password submitted at login.
///
/// Transient: never persisted, and the password never appears in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: User,
    pub token: IssuedToken,
}

/// Process-wide authentication settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub token_ttl: chrono::Duration,
    pub hash_cost: HashCost,
    pub lookup_timeout: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_ttl: chrono::Duration::hours(auth::TokenIssuer::DEFAULT_TTL_HOURS),
            hash_cost: HashCost::default(),
            lookup_timeout: Duration::from_secs(5),
        }
    }
}
