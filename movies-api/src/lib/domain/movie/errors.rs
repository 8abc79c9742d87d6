use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("not a UUID: {0}")]
    Malformed(String),
}

/// Failures of catalog and favorites operations.
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid movie id: {0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("Movie {0} was not found")]
    NotFound(String),

    #[error("Genre {0} was not found")]
    GenreNotFound(String),

    #[error("Director {0} was not found")]
    DirectorNotFound(String),

    #[error("Movie store failed: {0}")]
    Store(String),
}
