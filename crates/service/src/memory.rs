//! In-process repository used by unit tests and doc examples.
//!
//! One store backs all three repository traits so that contact removal can
//! cascade to addresses the same way the database does.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use models::errors::ModelError;
use models::{address, contact, user};

use crate::address::domain::{AddressChanges, NewAddress};
use crate::address::repository::AddressRepository;
use crate::contact::domain::{ContactChanges, NewContact};
use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::user::domain::UserChanges;
use crate::user::repository::UserRepository;

#[derive(Default)]
struct State {
    users: BTreeMap<String, user::Model>,
    contacts: BTreeMap<i32, contact::Model>,
    addresses: BTreeMap<i32, address::Model>,
    last_contact_id: i32,
    last_address_id: i32,
}

#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

impl MemoryRepository {
    fn state(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
        self.state.lock().map_err(|_| ServiceError::Db("memory store lock poisoned".into()))
    }

    /// Insert a user row directly, bypassing registration.
    pub fn seed_user(&self, username: &str, name: &str) {
        if let Ok(mut s) = self.state.lock() {
            s.users.insert(
                username.to_string(),
                user::Model { username: username.to_string(), password: String::new(), name: name.to_string(), token: None },
            );
        }
    }
}

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(self.state()?.users.get(username).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<user::Model>, ServiceError> {
        let s = self.state()?;
        Ok(s.users.values().find(|u| u.token.as_deref() == Some(token)).cloned())
    }

    async fn insert(&self, username: &str, password_hash: &str, name: &str) -> Result<user::Model, ServiceError> {
        let mut s = self.state()?;
        if s.users.contains_key(username) {
            return Err(ModelError::Duplicate(format!("user.username = {username}")).into());
        }
        let m = user::Model {
            username: username.to_string(),
            password: password_hash.to_string(),
            name: name.to_string(),
            token: None,
        };
        s.users.insert(m.username.clone(), m.clone());
        Ok(m)
    }

    async fn update(&self, username: &str, changes: UserChanges) -> Result<Option<user::Model>, ServiceError> {
        let mut s = self.state()?;
        let Some(u) = s.users.get_mut(username) else { return Ok(None) };
        if let Some(name) = changes.name { u.name = name; }
        if let Some(hash) = changes.password_hash { u.password = hash; }
        if let Some(token) = changes.token { u.token = token; }
        Ok(Some(u.clone()))
    }
}

#[async_trait]
impl ContactRepository for MemoryRepository {
    async fn insert(&self, username: &str, c: NewContact) -> Result<contact::Model, ServiceError> {
        let mut s = self.state()?;
        if !s.users.contains_key(username) {
            return Err(ServiceError::Db("FOREIGN KEY constraint failed".into()));
        }
        s.last_contact_id += 1;
        let m = contact::Model {
            id: s.last_contact_id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            username: username.to_string(),
        };
        s.contacts.insert(m.id, m.clone());
        Ok(m)
    }

    async fn find_owned(&self, username: &str, id: i32) -> Result<Option<contact::Model>, ServiceError> {
        let s = self.state()?;
        Ok(s.contacts.get(&id).filter(|c| c.username == username).cloned())
    }

    async fn update_owned(&self, username: &str, id: i32, changes: ContactChanges) -> Result<Option<contact::Model>, ServiceError> {
        let mut s = self.state()?;
        let Some(c) = s.contacts.get_mut(&id).filter(|c| c.username == username) else { return Ok(None) };
        if let Some(v) = changes.first_name { c.first_name = v; }
        if let Some(v) = changes.last_name { c.last_name = Some(v); }
        if let Some(v) = changes.email { c.email = Some(v); }
        if let Some(v) = changes.phone { c.phone = Some(v); }
        Ok(Some(c.clone()))
    }

    async fn delete_owned(&self, username: &str, id: i32) -> Result<bool, ServiceError> {
        let mut s = self.state()?;
        if !s.contacts.get(&id).is_some_and(|c| c.username == username) {
            return Ok(false);
        }
        s.contacts.remove(&id);
        s.addresses.retain(|_, a| a.contact_id != id);
        Ok(true)
    }
}

#[async_trait]
impl AddressRepository for MemoryRepository {
    async fn insert(&self, contact_id: i32, a: NewAddress) -> Result<address::Model, ServiceError> {
        let mut s = self.state()?;
        if !s.contacts.contains_key(&contact_id) {
            return Err(ServiceError::Db("FOREIGN KEY constraint failed".into()));
        }
        s.last_address_id += 1;
        let m = address::Model {
            id: s.last_address_id,
            street: a.street,
            city: a.city,
            province: a.province,
            country: a.country,
            postal_code: a.postal_code,
            contact_id,
        };
        s.addresses.insert(m.id, m.clone());
        Ok(m)
    }

    async fn find(&self, contact_id: i32, id: i32) -> Result<Option<address::Model>, ServiceError> {
        let s = self.state()?;
        Ok(s.addresses.get(&id).filter(|a| a.contact_id == contact_id).cloned())
    }

    async fn list(&self, contact_id: i32) -> Result<Vec<address::Model>, ServiceError> {
        let s = self.state()?;
        Ok(s.addresses.values().filter(|a| a.contact_id == contact_id).cloned().collect())
    }

    async fn update(&self, contact_id: i32, id: i32, changes: AddressChanges) -> Result<Option<address::Model>, ServiceError> {
        let mut s = self.state()?;
        let Some(a) = s.addresses.get_mut(&id).filter(|a| a.contact_id == contact_id) else { return Ok(None) };
        if let Some(v) = changes.street { a.street = Some(v); }
        if let Some(v) = changes.city { a.city = Some(v); }
        if let Some(v) = changes.province { a.province = Some(v); }
        if let Some(v) = changes.country { a.country = v; }
        if let Some(v) = changes.postal_code { a.postal_code = v; }
        Ok(Some(a.clone()))
    }

    async fn delete(&self, contact_id: i32, id: i32) -> Result<bool, ServiceError> {
        let mut s = self.state()?;
        if !s.addresses.get(&id).is_some_and(|a| a.contact_id == contact_id) {
            return Ok(false);
        }
        s.addresses.remove(&id);
        Ok(true)
    }
}
