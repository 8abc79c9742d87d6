pub mod credentials;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod ports;
pub mod tokens;
