mod movie;
mod user;

pub use movie::InMemoryMovieRepository;
pub use user::InMemoryUserRepository;
