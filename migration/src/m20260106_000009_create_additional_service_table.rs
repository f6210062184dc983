use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdditionalService::Table)
                    .if_not_exists()
                    .col(pk_auto(AdditionalService::Id))
                    .col(string_uniq(AdditionalService::Name))
                    .col(text_null(AdditionalService::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdditionalService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdditionalService {
    Table,
    Id,
    Name,
    Description,
}
