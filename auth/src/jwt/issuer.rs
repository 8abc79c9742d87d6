use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Signed access token plus its validity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issues signed, expiring access tokens.
///
/// Pure function of subject, clock and secret: no store access.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    ttl: Duration,
}

impl TokenIssuer {
    /// Default token lifetime.
    pub const DEFAULT_TTL_HOURS: i64 = 7 * 24;

    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `jwt_handler` - Handler holding the signing key
    /// * `ttl` - Lifetime of every issued token
    pub fn new(jwt_handler: JwtHandler, ttl: Duration) -> Self {
        Self { jwt_handler, ttl }
    }

    /// Issue a token for a verified identity.
    ///
    /// # Arguments
    /// * `subject` - Stable user identifier, stored as `sub`
    /// * `username` - Username, stored as a custom claim
    /// * `now` - Issuance instant
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: impl ToString,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_user(subject, username, now, self.ttl);
        let token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at: now + self.ttl,
        })
    }
}
