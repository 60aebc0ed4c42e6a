//! Create `contact` table with FK to `user`.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20220101_000012_create_user::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string_len(Contact::FirstName, 100))
                    .col(string_len_null(Contact::LastName, 100))
                    .col(string_len_null(Contact::Email, 100))
                    .col(string_len_null(Contact::Phone, 100))
                    .col(string_len(Contact::Username, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_user")
                            .from(Contact::Table, Contact::Username)
                            .to(User::Table, User::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Contact { Table, Id, FirstName, LastName, Email, Phone, Username }
