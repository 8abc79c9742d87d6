//! Authentication utilities library
//!
//! Store-agnostic building blocks for the movies API:
//! - Password hashing (Argon2id, configurable cost)
//! - Signed, expiring access tokens (JWT, HS256)
//!
//! User lookup and the login/authorize flows live in the service, which
//! composes these pieces with its own repository ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Issuing and Checking Tokens
//! ```
//! use auth::{JwtHandler, TokenIssuer};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = TokenIssuer::new(handler.clone(), Duration::days(7));
//!
//! let now = Utc::now();
//! let issued = issuer.issue("user123", "alice", now).unwrap();
//! let claims = handler.decode(&issued.token, now.timestamp()).unwrap();
//! assert_eq!(claims.sub.as_deref(), Some("user123"));
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use password::HashCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
