use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::address::AddressService;
use service::contact::ContactService;
use service::repo::{SeaOrmAddressRepository, SeaOrmContactRepository, SeaOrmUserRepository};
use service::user::UserService;

pub type Users = UserService<SeaOrmUserRepository>;
pub type Contacts = ContactService<SeaOrmContactRepository>;
pub type Addresses = AddressService<SeaOrmAddressRepository, SeaOrmContactRepository>;

/// Shared handler state: one service per workflow, all over the same pool.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<Users>,
    pub contacts: Arc<Contacts>,
    pub addresses: Arc<Addresses>,
}

impl ServerState {
    pub fn from_db(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(SeaOrmUserRepository { db: db.clone() });
        let contact_repo = Arc::new(SeaOrmContactRepository { db: db.clone() });
        let address_repo = Arc::new(SeaOrmAddressRepository { db });
        Self {
            users: Arc::new(UserService::new(user_repo)),
            contacts: Arc::new(ContactService::new(Arc::clone(&contact_repo))),
            addresses: Arc::new(AddressService::new(address_repo, contact_repo)),
        }
    }
}
