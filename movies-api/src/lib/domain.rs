pub mod authentication;
pub mod movie;
pub mod user;
