use async_trait::async_trait;

use super::domain::{ContactChanges, NewContact};
use crate::errors::ServiceError;

/// Persistence for the `contact` table. Every lookup and mutation is keyed
/// by the owning username as well as the id.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, username: &str, contact: NewContact) -> Result<models::contact::Model, ServiceError>;
    async fn find_owned(&self, username: &str, id: i32) -> Result<Option<models::contact::Model>, ServiceError>;
    async fn update_owned(&self, username: &str, id: i32, changes: ContactChanges) -> Result<Option<models::contact::Model>, ServiceError>;
    /// Removes the contact and its addresses.
    async fn delete_owned(&self, username: &str, id: i32) -> Result<bool, ServiceError>;
}
