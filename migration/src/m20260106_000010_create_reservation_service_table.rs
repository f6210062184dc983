use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000007_create_reservation_table::Reservation;
use super::m20260106_000009_create_additional_service_table::AdditionalService;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationService::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationService::Id))
                    .col(integer(ReservationService::ReservationId))
                    .col(integer(ReservationService::AdditionalServiceId))
                    .col(integer_null(ReservationService::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_service_reservation_id")
                            .from(ReservationService::Table, ReservationService::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_service_additional_service_id")
                            .from(
                                ReservationService::Table,
                                ReservationService::AdditionalServiceId,
                            )
                            .to(AdditionalService::Table, AdditionalService::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationService {
    Table,
    Id,
    ReservationId,
    AdditionalServiceId,
    Quantity,
}
