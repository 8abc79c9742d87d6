use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::ports::UserLookup;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Used when no database URL is configured, and by tests.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(users: &HashMap<UserId, User>, candidate: &User) -> Result<(), UserError> {
        for existing in users.values().filter(|u| u.id != candidate.id) {
            if existing.username == candidate.username {
                return Err(UserError::UsernameTaken(candidate.username.to_string()));
            }
            if existing.email == candidate.email {
                return Err(UserError::EmailTaken(candidate.email.as_str().to_string()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn save(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn remove(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl UserLookup for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    fn user(username: &str, email: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            birthday: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicates() {
        let repository = InMemoryUserRepository::new();
        repository
            .insert(user("alice", "alice@example.com"))
            .await
            .unwrap();

        let same_name = repository.insert(user("alice", "other@example.com")).await;
        assert!(matches!(same_name, Err(UserError::UsernameTaken(_))));

        let same_email = repository.insert(user("alice2", "alice@example.com")).await;
        assert!(matches!(same_email, Err(UserError::EmailTaken(_))));
    }

    #[tokio::test]
    async fn test_lookup_by_username_is_exact() {
        let repository = InMemoryUserRepository::new();
        let alice = repository
            .insert(user("alice", "alice@example.com"))
            .await
            .unwrap();

        let found = UserLookup::find_by_username(&repository, "alice").await.unwrap();
        assert_eq!(found, Some(alice.clone()));

        let upper = UserLookup::find_by_username(&repository, "ALICE").await.unwrap();
        assert_eq!(upper, None);

        let name = Username::new("alice".to_string()).unwrap();
        let found = UserRepository::find_by_username(&repository, &name)
            .await
            .unwrap();
        assert_eq!(found, Some(alice));
    }

    #[tokio::test]
    async fn test_list_all_is_oldest_first() {
        let repository = InMemoryUserRepository::new();
        let mut older = user("alice", "alice@example.com");
        older.created_at = Utc::now() - chrono::Duration::minutes(5);
        repository.insert(user("bob", "bob@example.com")).await.unwrap();
        repository.insert(older).await.unwrap();

        let names: Vec<String> = repository
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|u| u.username.to_string())
            .collect();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_save_and_remove() {
        let repository = InMemoryUserRepository::new();
        let mut alice = repository
            .insert(user("alice", "alice@example.com"))
            .await
            .unwrap();
        repository.insert(user("bob", "bob@example.com")).await.unwrap();

        alice.email = EmailAddress::new("bob@example.com".to_string()).unwrap();
        assert!(matches!(
            repository.save(alice.clone()).await,
            Err(UserError::EmailTaken(_))
        ));

        alice.email = EmailAddress::new("alice@wonderland.org".to_string()).unwrap();
        repository.save(alice.clone()).await.unwrap();
        let stored = UserLookup::find_by_id(&repository, &alice.id).await.unwrap();
        assert_eq!(stored, Some(alice.clone()));

        repository.remove(&alice.id).await.unwrap();
        assert!(matches!(
            repository.remove(&alice.id).await,
            Err(UserError::NotFound(_))
        ));
        assert_eq!(UserLookup::find_by_id(&repository, &alice.id).await.unwrap(), None);
    }
}
