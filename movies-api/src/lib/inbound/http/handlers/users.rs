use crate::inbound::http::handlers::ApiError;
use crate::user::errors::UserError;
use crate::user::models::Username;

pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod register_user;
pub mod update_user;

pub use delete_user::delete_user;
pub use get_user::get_user;
pub use list_users::list_users;
pub use register_user::register_user;
pub use update_user::update_user;

/// A path segment that cannot be a username cannot name an account either.
pub(crate) fn username_from_path(raw: String) -> Result<Username, ApiError> {
    Username::new(raw.clone()).map_err(|_| UserError::NotFound(raw).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_username_is_not_found() {
        assert!(username_from_path("alice".to_string()).is_ok());
        assert!(matches!(
            username_from_path("a b".to_string()),
            Err(ApiError::NotFound(_))
        ));
    }
}
