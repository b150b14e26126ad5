use async_trait::async_trait;

use models::User;

use super::errors::AuthError;

/// Repository abstraction for the user store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError>;
    /// Append a user. Fails with `Conflict` if the username is taken.
    async fn create_user(&self, user: User) -> Result<(), AuthError>;
    async fn count(&self) -> usize;
}

/// Process-wide user store kept in registration order.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: RwLock<Vec<User>>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Start from a seed set. Later duplicates of a username are dropped.
        pub fn with_users(seed: impl IntoIterator<Item = User>) -> Self {
            let mut users: Vec<User> = Vec::new();
            for u in seed {
                if !users.iter().any(|existing| existing.username == u.username) {
                    users.push(u);
                }
            }
            Self { users: RwLock::new(users) }
        }

    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
            let users = self.users.read().await;
            Ok(users.iter().find(|u| u.username == username).cloned())
        }

        async fn create_user(&self, user: User) -> Result<(), AuthError> {
            let mut users = self.users.write().await;
            if users.iter().any(|u| u.username == user.username) {
                return Err(AuthError::Conflict);
            }
            users.push(user);
            Ok(())
        }

        async fn count(&self) -> usize {
            self.users.read().await.len()
        }
    }

}
