use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_department_table::Department;

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
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string_len(User::Role, 32))
                    .col(integer_null(User::DepartmentId))
                    .col(boolean(User::Active).default(true))
                    .col(timestamp(User::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_department_id")
                            .from(User::Table, User::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Role,
    DepartmentId,
    Active,
    CreatedAt,
}
