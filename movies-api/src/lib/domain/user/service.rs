use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::user::errors::UserError;
use crate::user::models::NewUser;
use crate::user::models::User;
use crate::user::models::UserChanges;
use crate::user::models::UserId;
use crate::user::models::Username;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Account service over any [`UserRepository`].
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Argon2id is CPU-bound, so it runs on the blocking pool.
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        if password.is_empty() {
            return Err(UserError::EmptyPassword);
        }

        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Hashing(e.to_string()))?
            .map_err(|e| UserError::Hashing(e.to_string()))
    }

    async fn existing(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, new_user: NewUser) -> Result<User, UserError> {
        let password_hash = self.hash_password(new_user.password).await?;

        let user = self
            .repository
            .insert(User {
                id: UserId::new(),
                username: new_user.username,
                email: new_user.email,
                password_hash,
                birthday: new_user.birthday,
                created_at: Utc::now(),
            })
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn find(&self, username: &Username) -> Result<User, UserError> {
        self.existing(username).await
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update(&self, username: &Username, changes: UserChanges) -> Result<User, UserError> {
        let UserChanges {
            username: new_username,
            email,
            password,
            birthday,
        } = changes;

        let mut user = self.existing(username).await?;
        if let Some(password) = password {
            user.password_hash = self.hash_password(password).await?;
        }
        if let Some(new_username) = new_username {
            user.username = new_username;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if birthday.is_some() {
            user.birthday = birthday;
        }

        let user = self.repository.save(user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User updated");

        Ok(user)
    }

    async fn deregister(&self, username: &Username) -> Result<User, UserError> {
        let user = self.existing(username).await?;
        self.repository.remove(&user.id).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User deregistered");

        Ok(user)
    }
}
