use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::favorites;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::movies;
use super::handlers::users;
use super::handlers::welcome::welcome;
use super::middleware::authorize;
use crate::domain::authentication::ports::AuthGatewayPort;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
    pub auth_gateway: Arc<dyn AuthGatewayPort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    movie_service: Arc<dyn MovieServicePort>,
    auth_gateway: Arc<dyn AuthGatewayPort>,
) -> Router {
    let state = AppState {
        user_service,
        movie_service,
        auth_gateway,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/api/auth/login", post(login))
        .route("/api/users", post(users::register_user));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/users", get(users::list_users))
        .route(
            "/api/users/:username",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/users/:username/movies",
            get(favorites::list_favorites),
        )
        .route(
            "/api/users/:username/movies/:movie_id",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .route("/api/movies", get(movies::list_movies))
        .route("/api/movies/:movie_id", get(movies::get_movie))
        .route("/api/movies/genre/:name", get(movies::get_genre))
        .route("/api/movies/director/:name", get(movies::get_director))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
