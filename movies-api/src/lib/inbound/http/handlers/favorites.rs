use crate::inbound::http::handlers::users::username_from_path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

pub mod add_favorite;
pub mod list_favorites;
pub mod remove_favorite;

pub use add_favorite::add_favorite;
pub use list_favorites::list_favorites;
pub use remove_favorite::remove_favorite;

/// Resolve the account named in the path.
async fn owner_id(state: &AppState, username: String) -> Result<UserId, ApiError> {
    let username = username_from_path(username)?;
    let user = state.user_service.find(&username).await?;
    Ok(user.id)
}
