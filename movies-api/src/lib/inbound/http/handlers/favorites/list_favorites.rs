use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::owner_id;
use crate::inbound::http::handlers::movies::MovieData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_favorites(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<Vec<MovieData>>, ApiError> {
    let user_id = owner_id(&state, username).await?;
    let favorites = state.movie_service.favorites(&user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        favorites.iter().map(MovieData::from).collect(),
    ))
}
