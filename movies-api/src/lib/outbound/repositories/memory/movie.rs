use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::movie::errors::MovieError;
use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;
use crate::movie::models::MovieId;
use crate::movie::ports::MovieRepository;
use crate::user::models::UserId;

/// Catalog shipped with the service, mirroring the rows seeded by the
/// movies migration.
const SEED_CATALOG: &str = include_str!("../../../../../data/movies.json");

#[derive(Deserialize)]
struct CatalogEntry {
    id: Uuid,
    title: String,
    description: String,
    genre: GenreEntry,
    director: DirectorEntry,
    #[serde(default)]
    actors: Vec<String>,
    image_path: Option<String>,
    #[serde(default)]
    featured: bool,
}

#[derive(Deserialize)]
struct GenreEntry {
    name: String,
    description: String,
}

#[derive(Deserialize)]
struct DirectorEntry {
    name: String,
    bio: String,
    birth_year: Option<i32>,
    death_year: Option<i32>,
}

impl From<CatalogEntry> for Movie {
    fn from(entry: CatalogEntry) -> Self {
        Movie {
            id: MovieId(entry.id),
            title: entry.title,
            description: entry.description,
            genre: Genre {
                name: entry.genre.name,
                description: entry.genre.description,
            },
            director: Director {
                name: entry.director.name,
                bio: entry.director.bio,
                birth_year: entry.director.birth_year,
                death_year: entry.director.death_year,
            },
            actors: entry.actors,
            image_path: entry.image_path,
            featured: entry.featured,
        }
    }
}

/// Process-local catalog and favorites.
///
/// The catalog is fixed at construction; only favorites change.
pub struct InMemoryMovieRepository {
    movies: Vec<Movie>,
    favorites: RwLock<HashMap<UserId, Vec<MovieId>>>,
}

impl InMemoryMovieRepository {
    pub fn new(mut movies: Vec<Movie>) -> Self {
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        Self {
            movies,
            favorites: RwLock::new(HashMap::new()),
        }
    }

    /// Repository holding the bundled seed catalog.
    ///
    /// # Errors
    /// * `Store` - The bundled catalog does not parse
    pub fn with_seed_catalog() -> Result<Self, MovieError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(SEED_CATALOG).map_err(|e| MovieError::Store(e.to_string()))?;

        Ok(Self::new(entries.into_iter().map(Movie::from).collect()))
    }

    fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| &m.id == id)
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.movies.clone())
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, MovieError> {
        Ok(self.movie(id).cloned())
    }

    async fn find_genre(&self, name: &str) -> Result<Option<Genre>, MovieError> {
        Ok(self
            .movies
            .iter()
            .find(|m| m.genre.name == name)
            .map(|m| m.genre.clone()))
    }

    async fn find_director(&self, name: &str) -> Result<Option<Director>, MovieError> {
        Ok(self
            .movies
            .iter()
            .find(|m| m.director.name == name)
            .map(|m| m.director.clone()))
    }

    async fn list_favorites(&self, user: &UserId) -> Result<Vec<Movie>, MovieError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .get(user)
            .into_iter()
            .flatten()
            .filter_map(|id| self.movie(id).cloned())
            .collect())
    }

    async fn add_favorite(&self, user: &UserId, movie: &MovieId) -> Result<(), MovieError> {
        if self.movie(movie).is_none() {
            return Err(MovieError::NotFound(movie.to_string()));
        }

        let mut favorites = self.favorites.write().await;
        let ids = favorites.entry(*user).or_default();
        if !ids.contains(movie) {
            ids.push(*movie);
        }
        Ok(())
    }

    async fn remove_favorite(&self, user: &UserId, movie: &MovieId) -> Result<(), MovieError> {
        if let Some(ids) = self.favorites.write().await.get_mut(user) {
            ids.retain(|id| id != movie);
        }
        Ok(())
    }
}
