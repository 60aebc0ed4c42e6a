use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{AddressResponse, CreateAddressRequest, UpdateAddressRequest};
use super::repository::AddressRepository;
use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::user::domain::CurrentUser;

pub struct AddressService<A: AddressRepository, C: ContactRepository> {
    addresses: Arc<A>,
    contacts: Arc<C>,
}

impl<A: AddressRepository, C: ContactRepository> AddressService<A, C> {
    pub fn new(addresses: Arc<A>, contacts: Arc<C>) -> Self { Self { addresses, contacts } }

    #[instrument(skip(self, user, request), fields(username = %user.username))]
    pub async fn create(&self, user: &CurrentUser, contact_id: i32, request: CreateAddressRequest) -> Result<AddressResponse, ServiceError> {
        let new = request.validate()?;
        self.check_contact_must_exist(user, contact_id).await?;
        let created = self.addresses.insert(contact_id, new).await?;
        info!(address_id = created.id, "address_created");
        Ok(AddressResponse::from(created))
    }

    pub async fn get(&self, user: &CurrentUser, contact_id: i32, address_id: i32) -> Result<AddressResponse, ServiceError> {
        self.check_contact_must_exist(user, contact_id).await?;
        let found = self
            .addresses
            .find(contact_id, address_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Address"))?;
        Ok(AddressResponse::from(found))
    }

    pub async fn list(&self, user: &CurrentUser, contact_id: i32) -> Result<Vec<AddressResponse>, ServiceError> {
        self.check_contact_must_exist(user, contact_id).await?;
        let rows = self.addresses.list(contact_id).await?;
        Ok(rows.into_iter().map(AddressResponse::from).collect())
    }

    #[instrument(skip(self, user, request), fields(username = %user.username))]
    pub async fn update(
        &self,
        user: &CurrentUser,
        contact_id: i32,
        address_id: i32,
        request: UpdateAddressRequest,
    ) -> Result<AddressResponse, ServiceError> {
        let changes = request.validate()?;
        self.check_contact_must_exist(user, contact_id).await?;
        let updated = self
            .addresses
            .update(contact_id, address_id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Address"))?;
        info!(address_id, "address_updated");
        Ok(AddressResponse::from(updated))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn remove(&self, user: &CurrentUser, contact_id: i32, address_id: i32) -> Result<(), ServiceError> {
        self.check_contact_must_exist(user, contact_id).await?;
        if !self.addresses.delete(contact_id, address_id).await? {
            return Err(ServiceError::not_found("Address"));
        }
        info!(address_id, "address_removed");
        Ok(())
    }

    async fn check_contact_must_exist(&self, user: &CurrentUser, contact_id: i32) -> Result<(), ServiceError> {
        self.contacts
            .find_owned(&user.username, contact_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Contact"))
    }
}
