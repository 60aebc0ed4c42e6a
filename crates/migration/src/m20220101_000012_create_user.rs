//! Create `user` table keyed by username.
//!
//! `token` holds the current session token and is cleared on logout.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string_len(User::Username, 100).primary_key())
                    .col(string_len(User::Password, 100))
                    .col(string_len(User::Name, 100))
                    .col(string_len_null(User::Token, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum User { Table, Username, Password, Name, Token }
