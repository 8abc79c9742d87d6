use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::DirectorData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_director(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<DirectorData>, ApiError> {
    let director = state.movie_service.get_director(&name).await?;

    Ok(ApiSuccess::new(StatusCode::OK, DirectorData::from(&director)))
}
