use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::ports::lookup_within;
use crate::domain::authentication::ports::UserLookup;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Validates bearer tokens and resolves them to live users.
pub struct TokenVerifier<L>
where
    L: UserLookup,
{
    lookup: Arc<L>,
    jwt_handler: JwtHandler,
    lookup_timeout: Duration,
}

impl<L> TokenVerifier<L>
where
    L: UserLookup,
{
    pub fn new(lookup: Arc<L>, jwt_handler: JwtHandler, lookup_timeout: Duration) -> Self {
        Self {
            lookup,
            jwt_handler,
            lookup_timeout,
        }
    }

    /// Verify a token at `now`.
    ///
    /// Structure, signature and expiry are checked before the store is
    /// touched. The user is always re-read, so a token whose user has been
    /// deleted no longer verifies.
    ///
    /// # Returns
    /// Fresh user record for the token subject
    ///
    /// # Errors
    /// * `MalformedToken` - Token cannot be parsed
    /// * `InvalidSignature` - Token was not signed with the configured secret
    /// * `TokenExpired` - `now` is at or past the token expiry
    /// * `UnknownSubject` - Subject does not resolve to a user
    /// * `StoreUnavailable` - Lookup failed or timed out
    pub async fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<User, AuthError> {
        let claims = self.jwt_handler.decode(token, now.timestamp())?;

        let subject = claims.sub.ok_or(AuthError::MalformedToken)?;
        // A correctly signed subject that is not a user id cannot name a user.
        let user_id = UserId::from_string(&subject).map_err(|_| AuthError::UnknownSubject)?;

        lookup_within(self.lookup_timeout, self.lookup.find_by_id(&user_id))
            .await?
            .ok_or(AuthError::UnknownSubject)
    }
}
