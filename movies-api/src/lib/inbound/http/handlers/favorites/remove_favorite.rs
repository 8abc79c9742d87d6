use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::owner_id;
use crate::inbound::http::handlers::movies::MovieData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::movie::errors::MovieError;
use crate::movie::models::MovieId;

/// Returns the favorites after the removal.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<ApiSuccess<Vec<MovieData>>, ApiError> {
    let movie_id = MovieId::parse(&movie_id).map_err(MovieError::from)?;
    let user_id = owner_id(&state, username).await?;
    let favorites = state
        .movie_service
        .remove_favorite(&user_id, &movie_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        favorites.iter().map(MovieData::from).collect(),
    ))
}
