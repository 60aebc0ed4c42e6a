use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, Set};

use crate::address::domain::{AddressChanges, NewAddress};
use crate::address::repository::AddressRepository;
use crate::contact::domain::{ContactChanges, NewContact};
use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::user::domain::UserChanges;
use crate::user::repository::UserRepository;

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[derive(Clone)]
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

#[derive(Clone)]
pub struct SeaOrmAddressRepository {
    pub db: DatabaseConnection,
}

fn set_some<T: Into<sea_orm::Value>>(v: Option<T>) -> sea_orm::ActiveValue<T> {
    v.map_or(NotSet, Set)
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<models::user::Model>, ServiceError> {
        Ok(models::user::find_by_username(&self.db, username).await?)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<models::user::Model>, ServiceError> {
        Ok(models::user::find_by_token(&self.db, token).await?)
    }

    async fn insert(&self, username: &str, password_hash: &str, name: &str) -> Result<models::user::Model, ServiceError> {
        Ok(models::user::create(&self.db, username, password_hash, name).await?)
    }

    async fn update(&self, username: &str, changes: UserChanges) -> Result<Option<models::user::Model>, ServiceError> {
        Ok(models::user::update(&self.db, username, changes.name, changes.password_hash, changes.token).await?)
    }
}

#[async_trait::async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn insert(&self, username: &str, c: NewContact) -> Result<models::contact::Model, ServiceError> {
        let am = models::contact::ActiveModel {
            id: NotSet,
            first_name: Set(c.first_name),
            last_name: Set(c.last_name),
            email: Set(c.email),
            phone: Set(c.phone),
            username: Set(username.to_string()),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_owned(&self, username: &str, id: i32) -> Result<Option<models::contact::Model>, ServiceError> {
        Ok(models::contact::find_owned(&self.db, username, id).await?)
    }

    async fn update_owned(&self, username: &str, id: i32, changes: ContactChanges) -> Result<Option<models::contact::Model>, ServiceError> {
        let am = models::contact::ActiveModel {
            id: NotSet,
            first_name: set_some(changes.first_name),
            last_name: set_some(changes.last_name.map(Some)),
            email: set_some(changes.email.map(Some)),
            phone: set_some(changes.phone.map(Some)),
            username: NotSet,
        };
        Ok(models::contact::update_owned(&self.db, username, id, am).await?)
    }

    async fn delete_owned(&self, username: &str, id: i32) -> Result<bool, ServiceError> {
        Ok(models::contact::delete_owned(&self.db, username, id).await?)
    }
}

#[async_trait::async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn insert(&self, contact_id: i32, a: NewAddress) -> Result<models::address::Model, ServiceError> {
        let am = models::address::ActiveModel {
            id: NotSet,
            street: Set(a.street),
            city: Set(a.city),
            province: Set(a.province),
            country: Set(a.country),
            postal_code: Set(a.postal_code),
            contact_id: Set(contact_id),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find(&self, contact_id: i32, id: i32) -> Result<Option<models::address::Model>, ServiceError> {
        Ok(models::address::find_in_contact(&self.db, contact_id, id).await?)
    }

    async fn list(&self, contact_id: i32) -> Result<Vec<models::address::Model>, ServiceError> {
        Ok(models::address::list_by_contact(&self.db, contact_id).await?)
    }

    async fn update(&self, contact_id: i32, id: i32, changes: AddressChanges) -> Result<Option<models::address::Model>, ServiceError> {
        let am = models::address::ActiveModel {
            id: NotSet,
            street: set_some(changes.street.map(Some)),
            city: set_some(changes.city.map(Some)),
            province: set_some(changes.province.map(Some)),
            country: set_some(changes.country),
            postal_code: set_some(changes.postal_code),
            contact_id: NotSet,
        };
        Ok(models::address::update_in_contact(&self.db, contact_id, id, am).await?)
    }

    async fn delete(&self, contact_id: i32, id: i32) -> Result<bool, ServiceError> {
        Ok(models::address::delete_in_contact(&self.db, contact_id, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::address::{domain::CreateAddressRequest, AddressService};
    use crate::contact::{domain::{CreateContactRequest, UpdateContactRequest}, ContactService};
    use crate::test_support::get_db;
    use crate::user::{domain::{CurrentUser, LoginUserRequest, RegisterUserRequest}, UserService};

    #[tokio::test]
    async fn contact_workflow_against_database() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let users = UserService::new(Arc::new(SeaOrmUserRepository { db: db.clone() }));
        let contact_repo = Arc::new(SeaOrmContactRepository { db: db.clone() });
        let contacts = ContactService::new(contact_repo.clone());
        let addresses = AddressService::new(Arc::new(SeaOrmAddressRepository { db: db.clone() }), contact_repo);

        for name in ["alice", "bob"] {
            users
                .register(RegisterUserRequest { username: Some(name.into()), password: Some("secret".into()), name: Some(name.into()) })
                .await?;
        }
        let token = users
            .login(LoginUserRequest { username: Some("alice".into()), password: Some("secret".into()) })
            .await?
            .token
            .unwrap_or_default();
        let alice = users.authenticate(&token).await?;
        let bob = CurrentUser { username: "bob".into(), name: "bob".into() };

        let created = contacts
            .create(&alice, CreateContactRequest { first_name: Some("Ann".into()), email: Some("ann@x.com".into()), ..Default::default() })
            .await?;
        assert_eq!(created.last_name, None);
        assert_eq!(contacts.get(&alice, created.id).await?, created);
        assert!(matches!(contacts.get(&bob, created.id).await, Err(ServiceError::NotFound(_))));

        let updated = contacts
            .update(&alice, UpdateContactRequest { id: created.id, last_name: Some("Lee".into()), ..Default::default() })
            .await?;
        assert_eq!(updated.first_name, "Ann");
        assert_eq!(updated.last_name.as_deref(), Some("Lee"));
        assert_eq!(updated.email.as_deref(), Some("ann@x.com"));

        let addr = addresses
            .create(&alice, created.id, CreateAddressRequest { country: Some("ID".into()), postal_code: Some("10220".into()), ..Default::default() })
            .await?;
        assert_eq!(addresses.list(&alice, created.id).await?.len(), 1);

        contacts.remove(&alice, created.id).await?;
        assert!(matches!(contacts.get(&alice, created.id).await, Err(ServiceError::NotFound(_))));
        assert!(models::address::find_in_contact(&db, created.id, addr.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let users = UserService::new(Arc::new(SeaOrmUserRepository { db }));
        let req = RegisterUserRequest { username: Some("alice".into()), password: Some("pw".into()), name: Some("A".into()) };
        users.register(req.clone()).await?;
        assert!(matches!(users.register(req).await, Err(ServiceError::Conflict(_))));
        Ok(())
    }
}
