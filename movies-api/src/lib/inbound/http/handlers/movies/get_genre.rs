use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::GenreData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    let genre = state.movie_service.get_genre(&name).await?;

    Ok(ApiSuccess::new(StatusCode::OK, GenreData::from(&genre)))
}
