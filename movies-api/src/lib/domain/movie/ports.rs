use async_trait::async_trait;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;
use crate::movie::models::MovieId;
use crate::user::models::UserId;

/// Catalog reads and per-user favorites, called by the HTTP layer.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// # Errors
    /// * `NotFound` - No movie with this id
    async fn get_movie(&self, id: &MovieId) -> Result<Movie, MovieError>;

    /// Exact, case-sensitive match on the genre name.
    ///
    /// # Errors
    /// * `GenreNotFound` - No movie carries this genre
    async fn get_genre(&self, name: &str) -> Result<Genre, MovieError>;

    /// Exact, case-sensitive match on the director name.
    ///
    /// # Errors
    /// * `DirectorNotFound` - No movie carries this director
    async fn get_director(&self, name: &str) -> Result<Director, MovieError>;

    /// The user's favorites in the order they were added.
    async fn favorites(&self, user: &UserId) -> Result<Vec<Movie>, MovieError>;

    /// Add a movie to the user's favorites and return the new list.
    /// Adding a movie that is already a favorite changes nothing.
    ///
    /// # Errors
    /// * `NotFound` - No movie with this id
    async fn add_favorite(&self, user: &UserId, movie: &MovieId)
        -> Result<Vec<Movie>, MovieError>;

    /// Remove a movie from the user's favorites and return the new list.
    /// Removing a movie that is not a favorite changes nothing.
    async fn remove_favorite(
        &self,
        user: &UserId,
        movie: &MovieId,
    ) -> Result<Vec<Movie>, MovieError>;
}

/// Catalog and favorites storage.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Every movie, ordered by title.
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, MovieError>;

    async fn find_genre(&self, name: &str) -> Result<Option<Genre>, MovieError>;

    async fn find_director(&self, name: &str) -> Result<Option<Director>, MovieError>;

    /// Favorites of `user`, oldest addition first.
    async fn list_favorites(&self, user: &UserId) -> Result<Vec<Movie>, MovieError>;

    /// Idempotent. The movie must exist.
    async fn add_favorite(&self, user: &UserId, movie: &MovieId) -> Result<(), MovieError>;

    /// Idempotent.
    async fn remove_favorite(&self, user: &UserId, movie: &MovieId) -> Result<(), MovieError>;
}
