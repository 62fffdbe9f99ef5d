use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_create_category_data_table::CategoryData;

static FK_AD_CATEGORY_ID: &str = "fk_ads_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ads::Table)
                    .if_not_exists()
                    .col(pk_auto(Ads::AdId))
                    .col(string(Ads::CategoryType))
                    .col(integer(Ads::CategoryId))
                    .col(string(Ads::Title))
                    .col(text(Ads::Description))
                    .col(big_integer(Ads::Price))
                    .col(string(Ads::Location))
                    .col(boolean(Ads::IsArchived).default(false))
                    .col(timestamp(Ads::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AD_CATEGORY_ID)
                    .from_tbl(Ads::Table)
                    .from_col(Ads::CategoryId)
                    .to_tbl(CategoryData::Table)
                    .to_col(CategoryData::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AD_CATEGORY_ID)
                    .table(Ads::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ads::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ads {
    Table,
    AdId,
    CategoryType,
    CategoryId,
    Title,
    Description,
    Price,
    Location,
    IsArchived,
    CreatedAt,
}
