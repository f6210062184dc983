use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_department_table::Department;
use super::m20260105_000003_create_technician_table::Technician;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::DepartmentId))
                    .col(integer(Room::ResponsibleTechnicianId))
                    .col(string(Room::Name))
                    .col(string_null(Room::Location))
                    .col(integer_null(Room::MinCapacity))
                    .col(integer(Room::MaxCapacity))
                    .col(string_null(Room::ImageUrl))
                    .col(boolean(Room::Available).default(true))
                    .col(text_null(Room::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_department_id")
                            .from(Room::Table, Room::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_responsible_technician_id")
                            .from(Room::Table, Room::ResponsibleTechnicianId)
                            .to(Technician::Table, Technician::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    DepartmentId,
    ResponsibleTechnicianId,
    Name,
    Location,
    MinCapacity,
    MaxCapacity,
    ImageUrl,
    Available,
    Notes,
}
