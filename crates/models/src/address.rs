use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{contact, errors};

pub const STREET_MAX_LEN: usize = 255;
pub const MAX_LEN: usize = 100;
pub const POSTAL_CODE_MAX_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
    pub contact_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contact,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Contact => Entity::belongs_to(contact::Entity)
                .from(Column::ContactId)
                .to(contact::Column::Id)
                .into(),
        }
    }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_in_contact<C: ConnectionTrait>(db: &C, contact_id: i32, id: i32) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::ContactId.eq(contact_id))
        .filter(Column::Id.eq(id))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn list_by_contact<C: ConnectionTrait>(db: &C, contact_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::ContactId.eq(contact_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Apply the `Set` columns of `changes` to the row keyed by (`id`, `contact_id`).
pub async fn update_in_contact<C: ConnectionTrait>(
    db: &C,
    contact_id: i32,
    id: i32,
    changes: ActiveModel,
) -> Result<Option<Model>, errors::ModelError> {
    let touched = changes.street.is_set()
        || changes.city.is_set()
        || changes.province.is_set()
        || changes.country.is_set()
        || changes.postal_code.is_set();
    if touched {
        let res = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .filter(Column::ContactId.eq(contact_id))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
    }
    find_in_contact(db, contact_id, id).await
}

pub async fn delete_in_contact<C: ConnectionTrait>(db: &C, contact_id: i32, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::Id.eq(id))
        .filter(Column::ContactId.eq(contact_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
