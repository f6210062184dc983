use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EventType, Recurrence, ReservationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub number: String,
    pub requester_id: i32,
    pub assigned_technician_id: Option<i32>,
    pub room_id: i32,
    pub event_name: String,
    pub event_type: EventType,
    pub event_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub expected_attendees: i32,
    pub actual_attendees: Option<i32>,
    pub status: ReservationStatus,
    pub recurrence: Recurrence,
    pub recurrence_end: Option<Date>,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
    pub reported_failures: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    pub updated_by: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RequesterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Requester,
    #[sea_orm(
        belongs_to = "super::technician::Entity",
        from = "Column::AssignedTechnicianId",
        to = "super::technician::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    AssignedTechnician,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Room,
    #[sea_orm(has_many = "super::additional_participant::Entity")]
    AdditionalParticipant,
    #[sea_orm(has_many = "super::approval_history::Entity")]
    ApprovalHistory,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::additional_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdditionalParticipant.def()
    }
}

impl Related<super::approval_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApprovalHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
