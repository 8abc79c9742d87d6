use serde::Serialize;

use crate::movie::models::Director;
use crate::movie::models::Genre;
use crate::movie::models::Movie;

pub mod get_director;
pub mod get_genre;
pub mod get_movie;
pub mod list_movies;

pub use get_director::get_director;
pub use get_genre::get_genre;
pub use get_movie::get_movie;
pub use list_movies::list_movies;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreData {
    pub name: String,
    pub description: String,
}

impl From<&Genre> for GenreData {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
            description: genre.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorData {
    pub name: String,
    pub bio: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl From<&Director> for DirectorData {
    fn from(director: &Director) -> Self {
        Self {
            name: director.name.clone(),
            bio: director.bio.clone(),
            birth_year: director.birth_year,
            death_year: director.death_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: GenreData,
    pub director: DirectorData,
    pub actors: Vec<String>,
    pub image_path: Option<String>,
    pub featured: bool,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            description: movie.description.clone(),
            genre: (&movie.genre).into(),
            director: (&movie.director).into(),
            actors: movie.actors.clone(),
            image_path: movie.image_path.clone(),
            featured: movie.featured,
        }
    }
}
