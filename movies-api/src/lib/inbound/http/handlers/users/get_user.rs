use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::username_from_path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let username = username_from_path(username)?;
    let user = state.user_service.find(&username).await?;

    Ok(ApiSuccess::new(StatusCode::OK, UserData::from(&user)))
}
