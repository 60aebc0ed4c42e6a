use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::{contact, errors};

/// Column width shared by every `user` string column.
pub const MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    /// argon2 PHC string
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contact,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Contact => Entity::has_many(contact::Entity).into() }
    }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, username: &str, password_hash: &str, name: &str) -> Result<Model, errors::ModelError> {
    if username.trim().is_empty() { return Err(errors::ModelError::Validation("username required".into())); }
    if password_hash.trim().is_empty() { return Err(errors::ModelError::Validation("password hash required".into())); }
    let am = ActiveModel {
        username: Set(username.to_string()),
        password: Set(password_hash.to_string()),
        name: Set(name.to_string()),
        token: Set(None),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(username.to_string()).one(db).await?)
}

pub async fn find_by_token<C: ConnectionTrait>(db: &C, token: &str) -> Result<Option<Model>, errors::ModelError> {
    if token.is_empty() { return Ok(None); }
    let found = Entity::find().filter(Column::Token.eq(token)).one(db).await?;
    Ok(found)
}

/// Partial update keyed by username; `None` arguments leave the column untouched.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    username: &str,
    name: Option<String>,
    password_hash: Option<String>,
    token: Option<Option<String>>,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = find_by_username(db, username).await? else { return Ok(None) };
    if name.is_none() && password_hash.is_none() && token.is_none() {
        return Ok(Some(found));
    }
    let am = ActiveModel {
        username: Set(found.username),
        password: password_hash.map_or(NotSet, Set),
        name: name.map_or(NotSet, Set),
        token: token.map_or(NotSet, Set),
    };
    Ok(Some(am.update(db).await?))
}
