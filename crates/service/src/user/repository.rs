use async_trait::async_trait;

use super::domain::UserChanges;
use crate::errors::ServiceError;

/// Persistence for the `user` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<models::user::Model>, ServiceError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<models::user::Model>, ServiceError>;
    async fn insert(&self, username: &str, password_hash: &str, name: &str) -> Result<models::user::Model, ServiceError>;
    /// Returns `None` when the user does not exist.
    async fn update(&self, username: &str, changes: UserChanges) -> Result<Option<models::user::Model>, ServiceError>;
}
