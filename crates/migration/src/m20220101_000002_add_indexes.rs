use sea_orm_migration::prelude::*;

use crate::m20220101_000012_create_user::User;
use crate::m20220101_000013_create_contact::Contact;
use crate::m20220101_000014_create_address::Address;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // User: token lookup on every authenticated request
        manager
            .create_index(
                Index::create()
                    .name("idx_user_token")
                    .table(User::Table)
                    .col(User::Token)
                    .to_owned(),
            )
            .await?;

        // Contact: ownership filter (username, id)
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_username")
                    .table(Contact::Table)
                    .col(Contact::Username)
                    .to_owned(),
            )
            .await?;

        // Address: scoped by contact
        manager
            .create_index(
                Index::create()
                    .name("idx_address_contact")
                    .table(Address::Table)
                    .col(Address::ContactId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_address_contact").table(Address::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_username").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_token").table(User::Table).to_owned())
            .await?;
        Ok(())
    }
}
