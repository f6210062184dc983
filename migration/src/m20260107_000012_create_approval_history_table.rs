use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_user_table::User;
use super::m20260106_000007_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApprovalHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ApprovalHistory::Id))
                    .col(integer(ApprovalHistory::ReservationId))
                    .col(integer(ApprovalHistory::ActorId))
                    .col(string_len(ApprovalHistory::Action, 32))
                    .col(string_len_null(ApprovalHistory::PreviousStatus, 32))
                    .col(string_len(ApprovalHistory::NewStatus, 32))
                    .col(text_null(ApprovalHistory::Reason))
                    .col(timestamp(ApprovalHistory::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_approval_history_reservation_id")
                            .from(ApprovalHistory::Table, ApprovalHistory::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_approval_history_actor_id")
                            .from(ApprovalHistory::Table, ApprovalHistory::ActorId)
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
            .drop_table(Table::drop().table(ApprovalHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApprovalHistory {
    Table,
    Id,
    ReservationId,
    ActorId,
    Action,
    PreviousStatus,
    NewStatus,
    Reason,
    CreatedAt,
}
