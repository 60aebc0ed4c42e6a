use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{CurrentUser, LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserChanges, UserResponse};
use super::repository::UserRepository;
use crate::errors::ServiceError;
use models::errors::ModelError;

const WRONG_CREDENTIALS: &str = "Username or password is wrong";

/// User business service independent of web framework
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new user with an argon2-hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::user::{UserService, domain::RegisterUserRequest};
    /// use service::memory::MemoryRepository;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MemoryRepository::default()));
    /// let req = RegisterUserRequest { username: Some("alice".into()), password: Some("secret".into()), name: Some("Alice".into()) };
    /// let user = tokio_test::block_on(svc.register(req)).unwrap();
    /// assert_eq!(user.username, "alice");
    /// assert!(user.token.is_none());
    /// ```
    #[instrument(skip(self, request), fields(username = ?request.username))]
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, ServiceError> {
        let new = request.validate()?;
        if self.repo.find_by_username(&new.username).await?.is_some() {
            debug!("username taken");
            return Err(ServiceError::Conflict("Username already exists".into()));
        }

        let hash = hash_password(&new.password)?;
        // a concurrent registration can still win between lookup and insert
        let created = match self.repo.insert(&new.username, &hash, &new.name).await {
            Err(ServiceError::Model(ModelError::Duplicate(_))) => {
                return Err(ServiceError::Conflict("Username already exists".into()))
            }
            other => other?,
        };
        info!(username = %created.username, "user_registered");
        Ok(UserResponse::from_model(created))
    }

    /// Verify credentials and issue a fresh session token.
    #[instrument(skip(self, request), fields(username = ?request.username))]
    pub async fn login(&self, request: LoginUserRequest) -> Result<UserResponse, ServiceError> {
        let creds = request.validate()?;
        let user = self
            .repo
            .find_by_username(&creds.username)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized(WRONG_CREDENTIALS.into()))?;

        if !verify_password(&creds.password, &user.password)? {
            return Err(ServiceError::Unauthorized(WRONG_CREDENTIALS.into()));
        }

        let token = Uuid::new_v4().to_string();
        let changes = UserChanges { token: Some(Some(token.clone())), ..Default::default() };
        let user = self
            .repo
            .update(&user.username, changes)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized(WRONG_CREDENTIALS.into()))?;
        info!(username = %user.username, "user_logged_in");
        Ok(UserResponse { username: user.username, name: user.name, token: Some(token) })
    }

    /// Resolve a session token to the caller. Empty or unknown tokens are rejected.
    pub async fn authenticate(&self, token: &str) -> Result<CurrentUser, ServiceError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServiceError::unauthorized());
        }
        let user = self.repo.find_by_token(token).await?.ok_or_else(ServiceError::unauthorized)?;
        Ok(CurrentUser::from(user))
    }

    pub async fn current(&self, user: &CurrentUser) -> Result<UserResponse, ServiceError> {
        let found = self
            .repo
            .find_by_username(&user.username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        Ok(UserResponse::from_model(found))
    }

    #[instrument(skip(self, user, request), fields(username = %user.username))]
    pub async fn update(&self, user: &CurrentUser, request: UpdateUserRequest) -> Result<UserResponse, ServiceError> {
        let request = request.validate()?;
        let password_hash = match request.password.as_deref() {
            Some(p) => Some(hash_password(p)?),
            None => None,
        };
        let changes = UserChanges { name: request.name, password_hash, token: None };
        let updated = self
            .repo
            .update(&user.username, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        info!("user_updated");
        Ok(UserResponse::from_model(updated))
    }

    /// Clear the stored token so it no longer authenticates.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn logout(&self, user: &CurrentUser) -> Result<(), ServiceError> {
        let changes = UserChanges { token: Some(None), ..Default::default() };
        self.repo
            .update(&user.username, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        info!("user_logged_out");
        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::Internal(e.to_string()))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, stored: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(stored).map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRepository;

    fn svc() -> UserService<MemoryRepository> {
        UserService::new(Arc::new(MemoryRepository::default()))
    }

    fn register_req(username: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: Some(username.into()),
            password: Some(password.into()),
            name: Some("Alice".into()),
        }
    }

    fn login_req(username: &str, password: &str) -> LoginUserRequest {
        LoginUserRequest { username: Some(username.into()), password: Some(password.into()) }
    }

    #[tokio::test]
    async fn register_then_login_issues_token() {
        let svc = svc();
        svc.register(register_req("alice", "secret")).await.unwrap();
        let session = svc.login(login_req("alice", "secret")).await.unwrap();
        let token = session.token.expect("token");
        assert!(token.len() <= models::user::MAX_LEN);

        let me = svc.authenticate(&token).await.unwrap();
        assert_eq!(me, CurrentUser { username: "alice".into(), name: "Alice".into() });
    }

    #[tokio::test]
    async fn register_duplicate_is_conflict() {
        let svc = svc();
        svc.register(register_req("alice", "secret")).await.unwrap();
        let err = svc.register(register_req("alice", "other")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    /// Lookup never sees existing users, as when another registration lands
    /// between the existence check and the insert.
    struct StaleLookup(MemoryRepository);

    #[async_trait::async_trait]
    impl UserRepository for StaleLookup {
        async fn find_by_username(&self, _username: &str) -> Result<Option<models::user::Model>, ServiceError> {
            Ok(None)
        }
        async fn find_by_token(&self, token: &str) -> Result<Option<models::user::Model>, ServiceError> {
            UserRepository::find_by_token(&self.0, token).await
        }
        async fn insert(&self, username: &str, password_hash: &str, name: &str) -> Result<models::user::Model, ServiceError> {
            UserRepository::insert(&self.0, username, password_hash, name).await
        }
        async fn update(&self, username: &str, changes: UserChanges) -> Result<Option<models::user::Model>, ServiceError> {
            UserRepository::update(&self.0, username, changes).await
        }
    }

    #[tokio::test]
    async fn register_losing_insert_race_is_conflict() {
        let svc = UserService::new(Arc::new(StaleLookup(MemoryRepository::default())));
        svc.register(register_req("alice", "secret")).await.unwrap();
        let err = svc.register(register_req("alice", "other")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Username already exists"));
    }

    #[tokio::test]
    async fn register_validates_fields() {
        let svc = svc();
        let err = svc
            .register(RegisterUserRequest { username: Some("alice".into()), password: Some("pw".into()), name: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "name is required"));

        let err = svc.register(register_req(&"u".repeat(101), "pw")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_user() {
        let svc = svc();
        svc.register(register_req("alice", "secret")).await.unwrap();
        assert!(matches!(svc.login(login_req("alice", "nope")).await, Err(ServiceError::Unauthorized(_))));
        assert!(matches!(svc.login(login_req("bob", "secret")).await, Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn stored_password_is_hashed() {
        let repo = Arc::new(MemoryRepository::default());
        let svc = UserService::new(repo.clone());
        svc.register(register_req("alice", "secret")).await.unwrap();
        let stored = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(stored.password, "secret");
        assert!(stored.password.starts_with("$argon2"));
        assert!(stored.password.len() <= models::user::MAX_LEN);
    }

    #[tokio::test]
    async fn logout_invalidates_token() {
        let svc = svc();
        svc.register(register_req("alice", "secret")).await.unwrap();
        let token = svc.login(login_req("alice", "secret")).await.unwrap().token.unwrap();
        let me = svc.authenticate(&token).await.unwrap();
        svc.logout(&me).await.unwrap();
        assert!(matches!(svc.authenticate(&token).await, Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn second_login_revokes_first_token() {
        let svc = svc();
        svc.register(register_req("alice", "secret")).await.unwrap();
        let first = svc.login(login_req("alice", "secret")).await.unwrap().token.unwrap();
        let second = svc.login(login_req("alice", "secret")).await.unwrap().token.unwrap();
        assert_ne!(first, second);
        assert!(matches!(svc.authenticate(&first).await, Err(ServiceError::Unauthorized(_))));
        assert_eq!(svc.authenticate(&second).await.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn authenticate_rejects_blank_token() {
        assert!(matches!(svc().authenticate("  ").await, Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn update_changes_name_and_password() {
        let svc = svc();
        svc.register(register_req("alice", "secret")).await.unwrap();
        let token = svc.login(login_req("alice", "secret")).await.unwrap().token.unwrap();
        let me = svc.authenticate(&token).await.unwrap();

        let updated = svc
            .update(&me, UpdateUserRequest { name: Some("Alicia".into()), password: Some("fresh".into()) })
            .await
            .unwrap();
        assert_eq!(updated.name, "Alicia");

        // token survives a profile update
        assert_eq!(svc.authenticate(&token).await.unwrap().name, "Alicia");
        assert!(svc.login(login_req("alice", "secret")).await.is_err());
        assert!(svc.login(login_req("alice", "fresh")).await.is_ok());

        let current = svc.current(&me).await.unwrap();
        assert_eq!(current, UserResponse { username: "alice".into(), name: "Alicia".into(), token: None });
    }

    #[tokio::test]
    async fn update_rejects_blank_name() {
        let svc = svc();
        svc.register(register_req("alice", "secret")).await.unwrap();
        let me = CurrentUser { username: "alice".into(), name: "Alice".into() };
        let err = svc.update(&me, UpdateUserRequest { name: Some("".into()), password: None }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
