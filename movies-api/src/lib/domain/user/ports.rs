use async_trait::async_trait;

use crate::user::errors::UserError;
use crate::user::models::NewUser;
use crate::user::models::User;
use crate::user::models::UserChanges;
use crate::user::models::UserId;
use crate::user::models::Username;

/// Account operations called by the HTTP layer.
///
/// Accounts are addressed by username, the handle clients know them by.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register an account. The password is hashed before it reaches the store.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `UsernameTaken` / `EmailTaken` - Uniqueness conflict
    /// * `Store` / `Hashing` - Server fault
    async fn register(&self, new_user: NewUser) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFound` - No account with this username
    async fn find(&self, username: &Username) -> Result<User, UserError>;

    async fn list(&self) -> Result<Vec<User>, UserError>;

    /// Apply a partial update and return the stored result.
    ///
    /// A new password is re-hashed. Tokens issued before the change stay
    /// valid until they expire.
    ///
    /// # Errors
    /// * `NotFound` - No account with this username
    /// * `EmptyPassword` - New password is empty
    /// * `UsernameTaken` / `EmailTaken` - Uniqueness conflict
    async fn update(&self, username: &Username, changes: UserChanges) -> Result<User, UserError>;

    /// Remove the account and return what was removed.
    ///
    /// # Errors
    /// * `NotFound` - No account with this username
    async fn deregister(&self, username: &Username) -> Result<User, UserError>;
}

/// Account storage.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// # Errors
    /// * `UsernameTaken` / `EmailTaken` - Unique constraint violated
    async fn insert(&self, user: User) -> Result<User, UserError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Every account, oldest first.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Overwrite the record that has `user.id`.
    ///
    /// # Errors
    /// * `NotFound` - The record vanished since it was read
    /// * `UsernameTaken` / `EmailTaken` - Unique constraint violated
    async fn save(&self, user: User) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFound` - No record with this id
    async fn remove(&self, id: &UserId) -> Result<(), UserError>;
}
