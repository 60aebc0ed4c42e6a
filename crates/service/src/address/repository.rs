use async_trait::async_trait;

use super::domain::{AddressChanges, NewAddress};
use crate::errors::ServiceError;

/// Persistence for the `address` table, always scoped by contact id.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn insert(&self, contact_id: i32, address: NewAddress) -> Result<models::address::Model, ServiceError>;
    async fn find(&self, contact_id: i32, id: i32) -> Result<Option<models::address::Model>, ServiceError>;
    async fn list(&self, contact_id: i32) -> Result<Vec<models::address::Model>, ServiceError>;
    async fn update(&self, contact_id: i32, id: i32, changes: AddressChanges) -> Result<Option<models::address::Model>, ServiceError>;
    async fn delete(&self, contact_id: i32, id: i32) -> Result<bool, ServiceError>;
}
