use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_user_table::User;
use super::m20260105_000003_create_technician_table::Technician;
use super::m20260105_000004_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string_uniq(Reservation::Number))
                    .col(integer(Reservation::RequesterId))
                    .col(integer_null(Reservation::AssignedTechnicianId))
                    .col(integer(Reservation::RoomId))
                    .col(string(Reservation::EventName))
                    .col(string_len(Reservation::EventType, 32))
                    .col(date(Reservation::EventDate))
                    .col(time(Reservation::StartTime))
                    .col(time(Reservation::EndTime))
                    .col(integer(Reservation::ExpectedAttendees))
                    .col(integer_null(Reservation::ActualAttendees))
                    .col(string_len(Reservation::Status, 32))
                    .col(string_len(Reservation::Recurrence, 32))
                    .col(date_null(Reservation::RecurrenceEnd))
                    .col(text_null(Reservation::Notes))
                    .col(string_null(Reservation::MeetingLink))
                    .col(text_null(Reservation::ReportedFailures))
                    .col(timestamp(Reservation::CreatedAt))
                    .col(timestamp_null(Reservation::UpdatedAt))
                    .col(integer_null(Reservation::UpdatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_requester_id")
                            .from(Reservation::Table, Reservation::RequesterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_assigned_technician_id")
                            .from(Reservation::Table, Reservation::AssignedTechnicianId)
                            .to(Technician::Table, Technician::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_date")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .col(Reservation::EventDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Number,
    RequesterId,
    AssignedTechnicianId,
    RoomId,
    EventName,
    EventType,
    EventDate,
    StartTime,
    EndTime,
    ExpectedAttendees,
    ActualAttendees,
    Status,
    Recurrence,
    RecurrenceEnd,
    Notes,
    MeetingLink,
    ReportedFailures,
    CreatedAt,
    UpdatedAt,
    UpdatedBy,
}
