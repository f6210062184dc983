use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentType::Table)
                    .if_not_exists()
                    .col(pk_auto(EquipmentType::Id))
                    .col(string_uniq(EquipmentType::Name))
                    .col(text_null(EquipmentType::Description))
                    .col(string_null(EquipmentType::Brand))
                    .col(string_null(EquipmentType::Model))
                    .col(integer_null(EquipmentType::Year))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EquipmentType {
    Table,
    Id,
    Name,
    Description,
    Brand,
    Model,
    Year,
}
