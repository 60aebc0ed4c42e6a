//! Create `address` table with FK to `contact`.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20220101_000013_create_contact::Contact;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(string_len_null(Address::Street, 255))
                    .col(string_len_null(Address::City, 100))
                    .col(string_len_null(Address::Province, 100))
                    .col(string_len(Address::Country, 100))
                    .col(string_len(Address::PostalCode, 10))
                    .col(integer(Address::ContactId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_contact")
                            .from(Address::Table, Address::ContactId)
                            .to(Contact::Table, Contact::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Address { Table, Id, Street, City, Province, Country, PostalCode, ContactId }
