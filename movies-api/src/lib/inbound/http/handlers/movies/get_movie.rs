use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::MovieData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::movie::errors::MovieError;
use crate::movie::models::MovieId;

pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    let movie_id = MovieId::parse(&movie_id).map_err(MovieError::from)?;
    let movie = state.movie_service.get_movie(&movie_id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, MovieData::from(&movie)))
}
