use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthResult;
use crate::domain::authentication::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Read-only user lookups needed to authenticate.
///
/// Adapters report any store failure as `StoreUnavailable`.
#[async_trait]
pub trait UserLookup: Send + Sync + 'static {
    /// Find the user whose username equals `username` exactly.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store could not be queried
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError>;

    /// Find the user with the given identifier.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store could not be queried
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;
}

/// Port for the login and authorize flows used by the HTTP layer.
#[async_trait]
pub trait AuthGatewayPort: Send + Sync + 'static {
    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `StoreUnavailable` - User store failed or timed out
    /// * `Internal` - Hashing task or token signing failed
    async fn login(&self, credentials: Credentials) -> Result<AuthResult, AuthError>;

    /// Resolve a bearer token to the live user it was issued for.
    ///
    /// # Errors
    /// * `MalformedToken` / `InvalidSignature` / `TokenExpired` / `UnknownSubject`
    /// * `StoreUnavailable` - User store failed or timed out
    async fn authorize(&self, token: &str) -> Result<User, AuthError>;
}

/// Run a store lookup, failing with `StoreUnavailable` once `limit` elapses.
pub(crate) async fn lookup_within<T, F>(limit: Duration, lookup: F) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, AuthError>>,
{
    tokio::time::timeout(limit, lookup)
        .await
        .map_err(|_| AuthError::StoreUnavailable("user lookup timed out".to_string()))?
}
