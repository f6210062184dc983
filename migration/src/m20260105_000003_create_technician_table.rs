use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technician::Table)
                    .if_not_exists()
                    .col(pk_auto(Technician::Id))
                    .col(integer_uniq(Technician::UserId))
                    .col(string_null(Technician::Specialty))
                    .col(boolean(Technician::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_technician_user_id")
                            .from(Technician::Table, Technician::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Technician::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Technician {
    Table,
    Id,
    UserId,
    Specialty,
    Active,
}
