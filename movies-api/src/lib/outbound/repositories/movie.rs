use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;
use crate::movie::models::MovieId;
use crate::movie::ports::MovieRepository;
use crate::user::models::UserId;

const MOVIE_COLUMNS: &str = r#"
    m.id, m.title, m.description,
    m.genre_name, m.genre_description,
    m.director_name, m.director_bio, m.director_birth_year, m.director_death_year,
    m.actors, m.image_path, m.featured
"#;

#[derive(Debug, FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    description: String,
    genre_name: String,
    genre_description: String,
    director_name: String,
    director_bio: String,
    director_birth_year: Option<i32>,
    director_death_year: Option<i32>,
    actors: Vec<String>,
    image_path: Option<String>,
    featured: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: MovieId(row.id),
            title: row.title,
            description: row.description,
            genre: Genre {
                name: row.genre_name,
                description: row.genre_description,
            },
            director: Director {
                name: row.director_name,
                bio: row.director_bio,
                birth_year: row.director_birth_year,
                death_year: row.director_death_year,
            },
            actors: row.actors,
            image_path: row.image_path,
            featured: row.featured,
        }
    }
}

fn store_error(e: sqlx::Error) -> MovieError {
    MovieError::Store(e.to_string())
}

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies m ORDER BY m.title",
            MOVIE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, MovieError> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies m WHERE m.id = $1",
            MOVIE_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(Movie::from))
    }

    async fn find_genre(&self, name: &str) -> Result<Option<Genre>, MovieError> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
            SELECT genre_name, genre_description
            FROM movies
            WHERE genre_name = $1
            ORDER BY title
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|(name, description)| Genre { name, description }))
    }

    async fn find_director(&self, name: &str) -> Result<Option<Director>, MovieError> {
        let row: Option<(String, String, Option<i32>, Option<i32>)> = sqlx::query_as(
            r#"
            SELECT director_name, director_bio, director_birth_year, director_death_year
            FROM movies
            WHERE director_name = $1
            ORDER BY title
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|(name, bio, birth_year, death_year)| Director {
            name,
            bio,
            birth_year,
            death_year,
        }))
    }

    async fn list_favorites(&self, user: &UserId) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            r#"
            SELECT {}
            FROM favorite_movies f
            JOIN movies m ON m.id = f.movie_id
            WHERE f.user_id = $1
            ORDER BY f.added_at, m.title
            "#,
            MOVIE_COLUMNS
        ))
        .bind(user.0)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn add_favorite(&self, user: &UserId, movie: &MovieId) -> Result<(), MovieError> {
        sqlx::query(
            r#"
            INSERT INTO favorite_movies (user_id, movie_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, movie_id) DO NOTHING
            "#,
        )
        .bind(user.0)
        .bind(movie.0)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                MovieError::NotFound(movie.to_string())
            }
            _ => store_error(e),
        })?;

        Ok(())
    }

    async fn remove_favorite(&self, user: &UserId, movie: &MovieId) -> Result<(), MovieError> {
        sqlx::query("DELETE FROM favorite_movies WHERE user_id = $1 AND movie_id = $2")
            .bind(user.0)
            .bind(movie.0)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(())
    }
}
