use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000007_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdditionalParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(AdditionalParticipant::Id))
                    .col(integer(AdditionalParticipant::ReservationId))
                    .col(string(AdditionalParticipant::Name))
                    .col(string(AdditionalParticipant::Email))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_additional_participant_reservation_id")
                            .from(
                                AdditionalParticipant::Table,
                                AdditionalParticipant::ReservationId,
                            )
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_additional_participant_reservation_email")
                    .table(AdditionalParticipant::Table)
                    .col(AdditionalParticipant::ReservationId)
                    .col(AdditionalParticipant::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdditionalParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdditionalParticipant {
    Table,
    Id,
    ReservationId,
    Name,
    Email,
}
