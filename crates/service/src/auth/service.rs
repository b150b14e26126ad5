use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::{validate, User};

use super::domain::{AuthSession, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::repository::UserRepository;

/// Auth business service independent of web framework
pub struct AuthService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn repository(&self) -> &Arc<R> { &self.repo }

    /// Register a new user. Both fields must be non-empty and the username unused.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::memory::InMemoryUserRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(InMemoryUserRepository::new()));
    /// let input = RegisterInput { username: Some("alice".into()), password: Some("pw".into()) };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.username, "alice");
    /// ```
    #[instrument(skip(self, input), fields(username = input.username.as_deref().unwrap_or_default()))]
    pub async fn register(&self, input: RegisterInput) -> Result<User, AuthError> {
        let (username, password) = validate::both_present(input.username.as_deref(), input.password.as_deref())
            .ok_or(AuthError::Validation)?;

        if self.repo.find_by_username(username).await?.is_some() {
            debug!("username taken");
            return Err(AuthError::Conflict);
        }

        let user = User::new(username, password);
        // the repository re-checks under its write lock
        self.repo.create_user(user.clone()).await?;
        info!(username = %user.username, "user_registered");
        Ok(user)
    }

    /// Check credentials against the user store.
    ///
    /// Nothing is issued on success: later review calls name the user in
    /// their body and are not linked to this login.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::memory::InMemoryUserRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(InMemoryUserRepository::new()));
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: Some("u".into()), password: Some("p".into()) }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: Some("u".into()), password: Some("p".into()) })).unwrap();
    /// assert_eq!(session.username, "u");
    /// ```
    #[instrument(skip(self, input), fields(username = input.username.as_deref().unwrap_or_default()))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let (username, password) = validate::both_present(input.username.as_deref(), input.password.as_deref())
            .ok_or(AuthError::Validation)?;

        let user = self.repo
            .find_by_username(username)
            .await?
            .filter(|u| u.matches(username, password))
            .ok_or(AuthError::Unauthorized)?;

        info!("user_logged_in");
        Ok(AuthSession { username: user.username })
    }
}
