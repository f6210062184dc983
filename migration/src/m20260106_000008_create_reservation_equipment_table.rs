use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_equipment_type_table::EquipmentType;
use super::m20260106_000007_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationEquipment::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationEquipment::Id))
                    .col(integer(ReservationEquipment::ReservationId))
                    .col(integer(ReservationEquipment::EquipmentTypeId))
                    .col(integer(ReservationEquipment::Quantity).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_equipment_reservation_id")
                            .from(ReservationEquipment::Table, ReservationEquipment::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_equipment_equipment_type_id")
                            .from(
                                ReservationEquipment::Table,
                                ReservationEquipment::EquipmentTypeId,
                            )
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
            .drop_table(Table::drop().table(ReservationEquipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationEquipment {
    Table,
    Id,
    ReservationId,
    EquipmentTypeId,
    Quantity,
}
