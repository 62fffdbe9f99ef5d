use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryData::Table)
                    .if_not_exists()
                    .col(pk_auto(CategoryData::Id))
                    .col(string(CategoryData::CategoryType))
                    .col(json_binary(CategoryData::Attributes))
                    .col(timestamp(CategoryData::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryData::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CategoryData {
    Table,
    Id,
    CategoryType,
    Attributes,
    CreatedAt,
}
