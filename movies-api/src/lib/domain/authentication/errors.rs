use auth::JwtError;
use thiserror::Error;

/// Failure kinds of the login and authorize flows.
///
/// The variant is logged server-side; the HTTP layer collapses the
/// client-caused ones into a single generic response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token subject does not resolve to a user")]
    UnknownSubject,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Authentication misconfigured: {0}")]
    Configuration(String),

    #[error("Internal authentication error: {0}")]
    Internal(String),
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::MalformedToken(_) => AuthError::MalformedToken,
            JwtError::InvalidSignature => AuthError::InvalidSignature,
            JwtError::TokenExpired => AuthError::TokenExpired,
            JwtError::MissingSecret | JwtError::SecretTooShort { .. } => {
                AuthError::Configuration(err.to_string())
            }
            JwtError::EncodingFailed(_) => AuthError::Internal(err.to_string()),
        }
    }
}
