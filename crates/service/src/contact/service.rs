use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{ContactResponse, CreateContactRequest, UpdateContactRequest};
use super::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::user::domain::CurrentUser;

/// Application service encapsulating contact business rules.
/// Validation and the ownership check both happen here, before storage.
pub struct ContactService<R: ContactRepository> {
    repo: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a contact owned by the caller.
    ///
    /// # Examples
    /// ```
    /// use service::contact::{ContactService, domain::CreateContactRequest};
    /// use service::memory::MemoryRepository;
    /// use service::user::domain::CurrentUser;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MemoryRepository::default());
    /// repo.seed_user("alice", "Alice");
    /// let svc = ContactService::new(repo);
    /// let alice = CurrentUser { username: "alice".into(), name: "Alice".into() };
    /// let req = CreateContactRequest { first_name: Some("Ann".into()), email: Some("ann@x.com".into()), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(&alice, req)).unwrap();
    /// assert_eq!(created.first_name, "Ann");
    /// assert_eq!(created.last_name, None);
    /// ```
    #[instrument(skip(self, user, request), fields(username = %user.username))]
    pub async fn create(&self, user: &CurrentUser, request: CreateContactRequest) -> Result<ContactResponse, ServiceError> {
        let new = request.validate()?;
        let created = self.repo.insert(&user.username, new).await?;
        info!(contact_id = created.id, "contact_created");
        Ok(ContactResponse::from(created))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn get(&self, user: &CurrentUser, contact_id: i32) -> Result<ContactResponse, ServiceError> {
        let found = self.check_contact_must_exist(&user.username, contact_id).await?;
        Ok(ContactResponse::from(found))
    }

    /// Apply the supplied fields; omitted fields keep their stored value.
    #[instrument(skip(self, user, request), fields(username = %user.username, contact_id = request.id))]
    pub async fn update(&self, user: &CurrentUser, request: UpdateContactRequest) -> Result<ContactResponse, ServiceError> {
        let (id, changes) = request.validate()?;
        self.check_contact_must_exist(&user.username, id).await?;
        // a concurrent remove between check and update leaves nothing to update
        let updated = self
            .repo
            .update_owned(&user.username, id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Contact"))?;
        info!("contact_updated");
        Ok(ContactResponse::from(updated))
    }

    /// Delete the contact and its addresses.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn remove(&self, user: &CurrentUser, contact_id: i32) -> Result<(), ServiceError> {
        self.check_contact_must_exist(&user.username, contact_id).await?;
        if !self.repo.delete_owned(&user.username, contact_id).await? {
            return Err(ServiceError::not_found("Contact"));
        }
        info!(contact_id, "contact_removed");
        Ok(())
    }

    /// Ownership check shared by every operation on an existing contact.
    pub async fn check_contact_must_exist(&self, username: &str, contact_id: i32) -> Result<models::contact::Model, ServiceError> {
        match self.repo.find_owned(username, contact_id).await? {
            Some(c) => Ok(c),
            None => {
                debug!(contact_id, "contact not found for caller");
                Err(ServiceError::not_found("Contact"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRepository;

    fn alice() -> CurrentUser { CurrentUser { username: "alice".into(), name: "Alice".into() } }
    fn bob() -> CurrentUser { CurrentUser { username: "bob".into(), name: "Bob".into() } }

    fn setup() -> ContactService<MemoryRepository> {
        let repo = Arc::new(MemoryRepository::default());
        repo.seed_user("alice", "Alice");
        repo.seed_user("bob", "Bob");
        ContactService::new(repo)
    }

    fn ann() -> CreateContactRequest {
        CreateContactRequest { first_name: Some("Ann".into()), email: Some("ann@x.com".into()), ..Default::default() }
    }

    fn is_not_found<T: std::fmt::Debug>(r: Result<T, ServiceError>) -> bool {
        matches!(r, Err(ServiceError::NotFound(ref m)) if m == "Contact is not found")
    }

    #[tokio::test]
    async fn create_then_get_returns_same_dto() {
        let svc = setup();
        let created = svc.create(&alice(), ann()).await.unwrap();
        assert_eq!(
            created,
            ContactResponse { id: created.id, first_name: "Ann".into(), last_name: None, email: Some("ann@x.com".into()), phone: None }
        );
        assert_eq!(svc.get(&alice(), created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_username() {
        let svc = setup();
        let req = CreateContactRequest { username: Some("bob".into()), ..ann() };
        let created = svc.create(&alice(), req).await.unwrap();
        assert!(svc.get(&alice(), created.id).await.is_ok());
        assert!(is_not_found(svc.get(&bob(), created.id).await));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_writing() {
        let svc = setup();
        let err = svc.create(&alice(), CreateContactRequest::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "first_name is required"));

        let bad_email = CreateContactRequest { email: Some("not-an-email".into()), ..ann() };
        assert!(matches!(svc.create(&alice(), bad_email).await, Err(ServiceError::Validation(_))));

        let long = CreateContactRequest { phone: Some("1".repeat(101)), ..ann() };
        assert!(matches!(svc.create(&alice(), long).await, Err(ServiceError::Validation(_))));

        // nothing was inserted: the first real contact gets id 1
        assert_eq!(svc.create(&alice(), ann()).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn foreign_and_missing_ids_are_not_found() {
        let svc = setup();
        let created = svc.create(&alice(), ann()).await.unwrap();

        for (who, id) in [(bob(), created.id), (alice(), created.id + 100)] {
            assert!(is_not_found(svc.get(&who, id).await));
            let upd = UpdateContactRequest { id, last_name: Some("X".into()), ..Default::default() };
            assert!(is_not_found(svc.update(&who, upd).await));
            assert!(is_not_found(svc.remove(&who, id).await));
        }
        // alice's contact is untouched
        assert_eq!(svc.get(&alice(), created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let svc = setup();
        let created = svc.create(&alice(), ann()).await.unwrap();
        let upd = UpdateContactRequest { id: created.id, last_name: Some("Lee".into()), ..Default::default() };
        let updated = svc.update(&alice(), upd).await.unwrap();
        assert_eq!(
            updated,
            ContactResponse { id: created.id, first_name: "Ann".into(), last_name: Some("Lee".into()), email: Some("ann@x.com".into()), phone: None }
        );
        assert_eq!(svc.get(&alice(), created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let svc = setup();
        let created = svc.create(&alice(), ann()).await.unwrap();
        let blank = UpdateContactRequest { id: created.id, first_name: Some("  ".into()), ..Default::default() };
        assert!(matches!(svc.update(&alice(), blank).await, Err(ServiceError::Validation(_))));
        let no_id = UpdateContactRequest { id: 0, ..Default::default() };
        assert!(matches!(svc.update(&alice(), no_id).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn blank_optional_fields_are_rejected() {
        let svc = setup();
        let blank_last = CreateContactRequest { last_name: Some("".into()), ..ann() };
        let err = svc.create(&alice(), blank_last).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "last_name must not be empty"));
        let blank_phone = CreateContactRequest { phone: Some("   ".into()), ..ann() };
        assert!(matches!(svc.create(&alice(), blank_phone).await, Err(ServiceError::Validation(_))));

        let created = svc.create(&alice(), ann()).await.unwrap();
        let upd = UpdateContactRequest { id: created.id, last_name: Some("".into()), ..Default::default() };
        let err = svc.update(&alice(), upd).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "last_name must not be empty"));
        assert_eq!(svc.get(&alice(), created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn remove_then_get_is_not_found() {
        let svc = setup();
        let created = svc.create(&alice(), ann()).await.unwrap();
        svc.remove(&alice(), created.id).await.unwrap();
        assert!(is_not_found(svc.get(&alice(), created.id).await));
        assert!(is_not_found(svc.remove(&alice(), created.id).await));
    }
}
