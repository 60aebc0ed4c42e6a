use sea_orm::{entity::prelude::*, ConnectionTrait, DatabaseConnection, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::{address, errors, user};

pub const MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Address,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::Username)
                .to(user::Column::Username)
                .into(),
            Relation::Address => Entity::has_many(address::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// First contact matching both `username` and `id`.
pub async fn find_owned<C: ConnectionTrait>(db: &C, username: &str, id: i32) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::Username.eq(username))
        .filter(Column::Id.eq(id))
        .one(db)
        .await?;
    Ok(found)
}

/// Apply the `Set` columns of `changes` to the row keyed by (`id`, `username`).
/// Returns `None` when no such row exists.
pub async fn update_owned<C: ConnectionTrait>(
    db: &C,
    username: &str,
    id: i32,
    changes: ActiveModel,
) -> Result<Option<Model>, errors::ModelError> {
    let touched = changes.first_name.is_set()
        || changes.last_name.is_set()
        || changes.email.is_set()
        || changes.phone.is_set();
    if touched {
        let res = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .filter(Column::Username.eq(username))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
    }
    find_owned(db, username, id).await
}

/// Delete the contact keyed by (`id`, `username`) together with its addresses,
/// in one transaction. Returns whether a contact row was removed.
pub async fn delete_owned(db: &DatabaseConnection, username: &str, id: i32) -> Result<bool, errors::ModelError> {
    let txn = db.begin().await?;
    if find_owned(&txn, username, id).await?.is_none() {
        txn.rollback().await?;
        return Ok(false);
    }
    address::Entity::delete_many()
        .filter(address::Column::ContactId.eq(id))
        .exec(&txn)
        .await?;
    let res = Entity::delete_many()
        .filter(Column::Id.eq(id))
        .filter(Column::Username.eq(username))
        .exec(&txn)
        .await?;
    txn.commit().await?;
    Ok(res.rows_affected > 0)
}
