use std::sync::Arc;

use async_trait::async_trait;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;
use crate::movie::models::MovieId;
use crate::movie::ports::MovieRepository;
use crate::movie::ports::MovieServicePort;
use crate::user::models::UserId;

pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    repository: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<MR> MovieServicePort for MovieService<MR>
where
    MR: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.repository.list_all().await
    }

    async fn get_movie(&self, id: &MovieId) -> Result<Movie, MovieError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MovieError::NotFound(id.to_string()))
    }

    async fn get_genre(&self, name: &str) -> Result<Genre, MovieError> {
        self.repository
            .find_genre(name)
            .await?
            .ok_or_else(|| MovieError::GenreNotFound(name.to_string()))
    }

    async fn get_director(&self, name: &str) -> Result<Director, MovieError> {
        self.repository
            .find_director(name)
            .await?
            .ok_or_else(|| MovieError::DirectorNotFound(name.to_string()))
    }

    async fn favorites(&self, user: &UserId) -> Result<Vec<Movie>, MovieError> {
        self.repository.list_favorites(user).await
    }

    async fn add_favorite(
        &self,
        user: &UserId,
        movie: &MovieId,
    ) -> Result<Vec<Movie>, MovieError> {
        self.get_movie(movie).await?;
        self.repository.add_favorite(user, movie).await?;
        tracing::info!(user_id = %user, movie_id = %movie, "Favorite added");

        self.repository.list_favorites(user).await
    }

    async fn remove_favorite(
        &self,
        user: &UserId,
        movie: &MovieId,
    ) -> Result<Vec<Movie>, MovieError> {
        self.repository.remove_favorite(user, movie).await?;
        tracing::info!(user_id = %user, movie_id = %movie, "Favorite removed");

        self.repository.list_favorites(user).await
    }
}
