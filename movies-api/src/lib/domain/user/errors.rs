use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("not a UUID: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("may only contain letters, digits, '_' and '-'")]
    InvalidCharacters,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("{0}")]
    Malformed(String),
}

/// Failures of account operations.
///
/// `Store` and `Hashing` are server faults; everything else is caused by the
/// request.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("User with the username {0} was not found")]
    NotFound(String),

    #[error("User with the username {0} already exists")]
    UsernameTaken(String),

    #[error("Email {0} already exists")]
    EmailTaken(String),

    #[error("User store failed: {0}")]
    Store(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}
