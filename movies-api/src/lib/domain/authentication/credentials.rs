use std::sync::Arc;
use std::time::Duration;

use auth::PasswordHasher;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::ports::lookup_within;
use crate::domain::authentication::ports::UserLookup;
use crate::domain::user::models::User;

// Verified in place of a real hash when the username is unknown.
const DUMMY_PASSWORD: &str = "movies-api-unknown-user";

/// Checks a username/password pair against the stored hash.
pub struct CredentialVerifier<L>
where
    L: UserLookup,
{
    lookup: Arc<L>,
    password_hasher: PasswordHasher,
    dummy_hash: String,
    lookup_timeout: Duration,
}

impl<L> CredentialVerifier<L>
where
    L: UserLookup,
{
    /// Create a credential verifier.
    ///
    /// Hashes a throwaway password once so that unknown usernames cost the
    /// same Argon2 work as known ones.
    ///
    /// # Errors
    /// * `Configuration` - The hasher cannot produce a hash
    pub fn new(
        lookup: Arc<L>,
        password_hasher: PasswordHasher,
        lookup_timeout: Duration,
    ) -> Result<Self, AuthError> {
        let dummy_hash = password_hasher
            .hash(DUMMY_PASSWORD)
            .map_err(|e| AuthError::Configuration(e.to_string()))?;

        Ok(Self {
            lookup,
            password_hasher,
            dummy_hash,
            lookup_timeout,
        })
    }

    /// Verify credentials.
    ///
    /// Username matching is exact and case-sensitive.
    ///
    /// # Returns
    /// The stored user when the password matches
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `StoreUnavailable` - Lookup failed or timed out
    /// * `Internal` - The hashing task panicked
    pub async fn verify(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let found = lookup_within(
            self.lookup_timeout,
            self.lookup.find_by_username(&credentials.username),
        )
        .await?;

        let stored_hash = found
            .as_ref()
            .map_or_else(|| self.dummy_hash.clone(), |user| user.password_hash.clone());

        let hasher = self.password_hasher.clone();
        let password = credentials.password.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        match found {
            Some(user) if matches => Ok(user),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
