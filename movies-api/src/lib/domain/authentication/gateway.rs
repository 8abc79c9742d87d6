use std::sync::Arc;

use async_trait::async_trait;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::authentication::credentials::CredentialVerifier;
use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthResult;
use crate::domain::authentication::models::AuthSettings;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::ports::AuthGatewayPort;
use crate::domain::authentication::ports::UserLookup;
use crate::domain::authentication::tokens::TokenVerifier;
use crate::domain::user::models::User;

/// Login and authorize flows.
///
/// Composes credential checking, token issuance and token verification.
/// Holds no per-request state: every call is authenticated on its own.
pub struct AuthGateway<L>
where
    L: UserLookup,
{
    credential_verifier: CredentialVerifier<L>,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier<L>,
}

impl<L> AuthGateway<L>
where
    L: UserLookup,
{
    /// Build the gateway from the process-wide secret and settings.
    ///
    /// # Arguments
    /// * `lookup` - User store used by both verifiers
    /// * `jwt_secret` - HMAC signing secret
    /// * `settings` - Token lifetime, hash cost and lookup timeout
    ///
    /// # Errors
    /// * `Configuration` - Secret missing or too short, or invalid hash cost
    pub fn new(
        lookup: Arc<L>,
        jwt_secret: &[u8],
        settings: AuthSettings,
    ) -> Result<Self, AuthError> {
        let jwt_handler = JwtHandler::new(jwt_secret)?;
        let password_hasher = PasswordHasher::with_cost(settings.hash_cost)
            .map_err(|e| AuthError::Configuration(e.to_string()))?;

        Ok(Self {
            credential_verifier: CredentialVerifier::new(
                Arc::clone(&lookup),
                password_hasher,
                settings.lookup_timeout,
            )?,
            token_issuer: TokenIssuer::new(jwt_handler.clone(), settings.token_ttl),
            token_verifier: TokenVerifier::new(lookup, jwt_handler, settings.lookup_timeout),
        })
    }

    /// Log in at an explicit instant.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `StoreUnavailable` - User store failed or timed out
    /// * `Internal` - Hashing task or token signing failed
    pub async fn login_at(
        &self,
        credentials: Credentials,
        now: DateTime<Utc>,
    ) -> Result<AuthResult, AuthError> {
        let user = self
            .credential_verifier
            .verify(&credentials)
            .await
            .inspect_err(|e| {
                tracing::warn!(username = %credentials.username, reason = %e, "Login rejected");
            })?;

        let token = self
            .token_issuer
            .issue(user.id, user.username.as_str(), now)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user.id,
            expires_at = %token.expires_at,
            "Token issued"
        );

        Ok(AuthResult { user, token })
    }

    /// Authorize a bearer token at an explicit instant.
    ///
    /// # Errors
    /// See [`TokenVerifier::verify`].
    pub async fn authorize_at(&self, token: &str, now: DateTime<Utc>) -> Result<User, AuthError> {
        self.token_verifier
            .verify(token, now)
            .await
            .inspect_err(|e| tracing::warn!(reason = %e, "Token rejected"))
    }
}

#[async_trait]
impl<L> AuthGatewayPort for AuthGateway<L>
where
    L: UserLookup,
{
    async fn login(&self, credentials: Credentials) -> Result<AuthResult, AuthError> {
        self.login_at(credentials, Utc::now()).await
    }

    async fn authorize(&self, token: &str) -> Result<User, AuthError> {
        self.authorize_at(token, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use auth::HashCost;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;
    use crate::domain::user::ports::UserRepository;
    use crate::outbound::repositories::InMemoryUserRepository;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn settings() -> AuthSettings {
        AuthSettings {
            token_ttl: chrono::Duration::days(7),
            hash_cost: HashCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
            lookup_timeout: Duration::from_secs(1),
        }
    }

    async fn seeded() -> (Arc<InMemoryUserRepository>, User) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = PasswordHasher::with_cost(settings().hash_cost).unwrap();
        let alice = User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: hasher.hash("wonderland").unwrap(),
            birthday: None,
            created_at: Utc::now(),
        };
        repository.insert(alice.clone()).await.unwrap();
        (repository, alice)
    }

    #[tokio::test]
    async fn test_new_rejects_missing_secret() {
        let repository = Arc::new(InMemoryUserRepository::new());

        let result = AuthGateway::new(repository, b"", settings());

        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_cost() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let mut settings = settings();
        settings.hash_cost.iterations = 0;

        let result = AuthGateway::new(repository, SECRET, settings);

        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_alice_scenario() {
        let (repository, alice) = seeded().await;
        let gateway = AuthGateway::new(repository, SECRET, settings()).unwrap();

        let result = gateway
            .login(Credentials::new("alice", "wonderland"))
            .await
            .unwrap();
        assert_eq!(result.user, alice);

        let authorized = gateway.authorize(&result.token.token).await.unwrap();
        assert_eq!(authorized, alice);

        let wrong_password = gateway
            .login(Credentials::new("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = gateway
            .login(Credentials::new("bob", "anything"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(unknown_user, wrong_password);
        assert_eq!(unknown_user.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn test_login_is_case_sensitive() {
        let (repository, _) = seeded().await;
        let gateway = AuthGateway::new(repository, SECRET, settings()).unwrap();

        let result = gateway.login(Credentials::new("Alice", "wonderland")).await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_token_lifetime() {
        let (repository, alice) = seeded().await;
        let gateway = AuthGateway::new(repository, SECRET, settings()).unwrap();
        let now = Utc::now();

        let result = gateway
            .login_at(Credentials::new("alice", "wonderland"), now)
            .await
            .unwrap();
        assert_eq!(result.token.issued_at, now);
        assert_eq!(result.token.expires_at, now + chrono::Duration::days(7));

        let token = &result.token.token;
        let before = result.token.expires_at - chrono::Duration::seconds(1);
        let after = result.token.expires_at + chrono::Duration::seconds(1);

        assert_eq!(gateway.authorize_at(token, before).await.unwrap(), alice);
        assert_eq!(
            gateway.authorize_at(token, after).await.unwrap_err(),
            AuthError::TokenExpired
        );
    }

    #[tokio::test]
    async fn test_authorize_after_user_deleted() {
        let (repository, alice) = seeded().await;
        let gateway = AuthGateway::new(Arc::clone(&repository), SECRET, settings()).unwrap();

        let result = gateway
            .login(Credentials::new("alice", "wonderland"))
            .await
            .unwrap();
        repository.remove(&alice.id).await.unwrap();

        let err = gateway.authorize(&result.token.token).await.unwrap_err();
        assert_eq!(err, AuthError::UnknownSubject);
    }

    #[tokio::test]
    async fn test_authorize_token_from_other_deployment() {
        let (repository, _) = seeded().await;
        let gateway = AuthGateway::new(Arc::clone(&repository), SECRET, settings()).unwrap();
        let other = AuthGateway::new(
            repository,
            b"another-secret-key-that-is-32-bytes-or-more",
            settings(),
        )
        .unwrap();

        let result = other
            .login(Credentials::new("alice", "wonderland"))
            .await
            .unwrap();

        let err = gateway.authorize(&result.token.token).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidSignature);
    }
}
