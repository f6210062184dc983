use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_room_table::Room;
use super::m20260105_000005_create_equipment_type_table::EquipmentType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomEquipment::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomEquipment::Id))
                    .col(integer(RoomEquipment::RoomId))
                    .col(integer(RoomEquipment::EquipmentTypeId))
                    .col(integer(RoomEquipment::Quantity).default(1))
                    .col(string_len(RoomEquipment::Status, 32))
                    .col(string_null(RoomEquipment::SerialNumber))
                    .col(date_null(RoomEquipment::AcquiredOn))
                    .col(date_null(RoomEquipment::LastInspection))
                    .col(text_null(RoomEquipment::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_equipment_room_id")
                            .from(RoomEquipment::Table, RoomEquipment::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_equipment_equipment_type_id")
                            .from(RoomEquipment::Table, RoomEquipment::EquipmentTypeId)
                            .to(EquipmentType::Table, EquipmentType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomEquipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomEquipment {
    Table,
    Id,
    RoomId,
    EquipmentTypeId,
    Quantity,
    Status,
    SerialNumber,
    AcquiredOn,
    LastInspection,
    Notes,
}
