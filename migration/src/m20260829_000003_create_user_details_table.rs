use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(UserDetails::UserId))
                    .col(string_null(UserDetails::Name))
                    .col(string_null(UserDetails::Address))
                    .col(string_null(UserDetails::PhoneNumber))
                    .col(string_null(UserDetails::Email))
                    .col(boolean_null(UserDetails::IsStudent))
                    .col(boolean(UserDetails::IsArchived).default(false))
                    .col(timestamp(UserDetails::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserDetails {
    Table,
    UserId,
    Name,
    Address,
    PhoneNumber,
    Email,
    IsStudent,
    IsArchived,
    CreatedAt,
}
