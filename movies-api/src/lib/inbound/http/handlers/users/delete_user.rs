use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::username_from_path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

/// Tokens held by the removed account stop working on their next use.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let username = username_from_path(username)?;
    let user = state.user_service.deregister(&username).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: format!("User {} was deleted", user.username),
        },
    ))
}
