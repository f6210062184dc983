//! Reservation domain models and parameters.
//!
//! Covers the reservation itself, the parameters for creating and updating one,
//! the read models served by history/detail/pending endpoints, and the approval
//! audit trail.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::{ApprovalAction, EventType, Recurrence, ReservationStatus};

use crate::{
    model::{
        api::ConflictDto,
        reservation::{
            ApprovalActionDto, ApprovalDecisionDto, ApprovalHistoryEntryDto, ApprovalRequestDto,
            AttendanceDto, CreateReservationDto, EventTypeDto, PendingReservationDto,
            RecurrenceDto, RequestedEquipmentDetailDto, RequestedServiceDetailDto,
            RequesterDto, ReservationDetailDto, ReservationDto, ReservationStatusDto,
            ReservationSummaryDto, UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        model::{
            department::Department, participant::Participant, room::Room,
            technician::Technician, user::Person,
        },
        util::time::{format_hh_mm, parse_hh_mm},
    },
};

use super::enum_mapping;

enum_mapping!(EventType <=> EventTypeDto {
    Meeting,
    Videoconference,
    Presentation,
    Training,
    Conference,
    Other,
});

enum_mapping!(ReservationStatus <=> ReservationStatusDto {
    Pending,
    Approved,
    Rejected,
    Cancelled,
});

enum_mapping!(Recurrence <=> RecurrenceDto {
    Single,
    Daily,
    Weekly,
    Monthly,
});

enum_mapping!(ApprovalAction <=> ApprovalActionDto {
    Created,
    Approved,
    Rejected,
    Cancelled,
    Updated,
});

/// Reservation statuses that occupy a room's time slot.
pub const BLOCKING_STATUSES: [ReservationStatus; 2] =
    [ReservationStatus::Pending, ReservationStatus::Approved];

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub number: String,
    pub requester_id: i32,
    pub assigned_technician_id: Option<i32>,
    pub room_id: i32,
    pub event_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub expected_attendees: i32,
    pub actual_attendees: Option<i32>,
    pub status: ReservationStatus,
    pub recurrence: Recurrence,
    pub recurrence_end: Option<NaiveDate>,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
    pub reported_failures: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<i32>,
}

impl Reservation {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            requester_id: entity.requester_id,
            assigned_technician_id: entity.assigned_technician_id,
            room_id: entity.room_id,
            event_name: entity.event_name,
            event_type: entity.event_type,
            event_date: entity.event_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            expected_attendees: entity.expected_attendees,
            actual_attendees: entity.actual_attendees,
            status: entity.status,
            recurrence: entity.recurrence,
            recurrence_end: entity.recurrence_end,
            notes: entity.notes,
            meeting_link: entity.meeting_link,
            reported_failures: entity.reported_failures,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            updated_by: entity.updated_by,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            number: self.number,
            requester_id: self.requester_id,
            assigned_technician_id: self.assigned_technician_id,
            room_id: self.room_id,
            event_name: self.event_name,
            event_type: self.event_type.into(),
            event_date: self.event_date,
            start_time: format_hh_mm(self.start_time),
            end_time: format_hh_mm(self.end_time),
            expected_attendees: self.expected_attendees,
            actual_attendees: self.actual_attendees,
            status: self.status.into(),
            recurrence: self.recurrence.into(),
            recurrence_end: self.recurrence_end,
            notes: self.notes,
            meeting_link: self.meeting_link,
            reported_failures: self.reported_failures,
            created_at: self.created_at,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
        }
    }

    /// Whether this reservation occupies its room's time slot.
    pub fn is_blocking(&self) -> bool {
        BLOCKING_STATUSES.contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestedEquipment {
    pub equipment_type_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestedEquipmentDetail {
    pub equipment_type_id: i32,
    pub name: String,
    pub quantity: i32,
}

impl RequestedEquipmentDetail {
    pub fn into_dto(self) -> RequestedEquipmentDetailDto {
        RequestedEquipmentDetailDto {
            equipment_type_id: self.equipment_type_id,
            name: self.name,
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestedService {
    pub additional_service_id: i32,
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestedServiceDetail {
    pub additional_service_id: i32,
    pub name: String,
    pub quantity: Option<i32>,
}

impl RequestedServiceDetail {
    pub fn into_dto(self) -> RequestedServiceDetailDto {
        RequestedServiceDetailDto {
            additional_service_id: self.additional_service_id,
            name: self.name,
            quantity: self.quantity,
        }
    }
}

/// Parameters for creating a reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    /// Supplied reservation number; generated when `None`
    pub number: Option<String>,
    pub requester_id: i32,
    pub room_id: i32,
    pub event_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub expected_attendees: i32,
    pub recurrence: Recurrence,
    pub recurrence_end: Option<NaiveDate>,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
    pub equipment: Vec<RequestedEquipment>,
    pub services: Vec<RequestedService>,
}

impl CreateReservationParams {
    /// Converts a validated DTO into service parameters, parsing clock times.
    ///
    /// # Returns
    /// - `Ok(CreateReservationParams)` - Parsed parameters
    /// - `Err(AppError::BadRequest)` - A time field is not `HH:MM`
    pub fn from_dto(requester_id: i32, dto: CreateReservationDto) -> Result<Self, AppError> {
        Ok(Self {
            number: dto.number.map(|n| n.trim().to_string()),
            requester_id,
            room_id: dto.room_id,
            event_name: dto.event_name.trim().to_string(),
            event_type: dto.event_type.into(),
            event_date: dto.event_date,
            start_time: parse_hh_mm(&dto.start_time)?,
            end_time: parse_hh_mm(&dto.end_time)?,
            expected_attendees: dto.expected_attendees,
            recurrence: dto.recurrence.into(),
            recurrence_end: dto.recurrence_end,
            notes: dto.notes,
            meeting_link: dto.meeting_link,
            equipment: dto
                .equipment
                .into_iter()
                .map(|e| RequestedEquipment {
                    equipment_type_id: e.equipment_type_id,
                    quantity: e.quantity,
                })
                .collect(),
            services: dto
                .services
                .into_iter()
                .map(|s| RequestedService {
                    additional_service_id: s.additional_service_id,
                    quantity: s.quantity,
                })
                .collect(),
        })
    }
}

/// Fully resolved row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub number: String,
    pub assigned_technician_id: Option<i32>,
    pub params: CreateReservationParams,
}

/// Partial update of a reservation; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParams {
    pub room_id: Option<i32>,
    /// Set by the service when a room change re-routes the reservation
    pub assigned_technician_id: Option<i32>,
    pub event_name: Option<String>,
    pub event_type: Option<EventType>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub expected_attendees: Option<i32>,
    pub actual_attendees: Option<i32>,
    pub status: Option<ReservationStatus>,
    pub recurrence: Option<Recurrence>,
    pub recurrence_end: Option<NaiveDate>,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
    pub reported_failures: Option<String>,
}

impl UpdateReservationParams {
    pub fn from_dto(dto: UpdateReservationDto) -> Result<Self, AppError> {
        Ok(Self {
            room_id: dto.room_id,
            assigned_technician_id: None,
            event_name: dto.event_name.map(|n| n.trim().to_string()),
            event_type: dto.event_type.map(Into::into),
            event_date: dto.event_date,
            start_time: dto.start_time.as_deref().map(parse_hh_mm).transpose()?,
            end_time: dto.end_time.as_deref().map(parse_hh_mm).transpose()?,
            expected_attendees: dto.expected_attendees,
            actual_attendees: dto.actual_attendees,
            status: dto.status.map(Into::into),
            recurrence: dto.recurrence.map(Into::into),
            recurrence_end: dto.recurrence_end,
            notes: dto.notes,
            meeting_link: dto.meeting_link,
            reported_failures: dto.reported_failures,
        })
    }

    /// Whether the update touches the room, date, times, recurrence or attendees.
    pub fn changes_schedule(&self) -> bool {
        self.room_id.is_some()
            || self.event_date.is_some()
            || self.start_time.is_some()
            || self.end_time.is_some()
            || self.recurrence.is_some()
            || self.recurrence_end.is_some()
            || self.expected_attendees.is_some()
    }
}

/// A reservation in a user's history list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationSummary {
    pub number: String,
    pub event_name: String,
    pub room_id: i32,
    pub room_name: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
}

impl ReservationSummary {
    pub fn from_entity(
        entity: entity::reservation::Model,
        room: Option<entity::room::Model>,
    ) -> Self {
        Self {
            number: entity.number,
            event_name: entity.event_name,
            room_id: entity.room_id,
            room_name: room.map(|r| r.name).unwrap_or_default(),
            event_date: entity.event_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> ReservationSummaryDto {
        ReservationSummaryDto {
            number: self.number,
            event_name: self.event_name,
            room_id: self.room_id,
            room_name: self.room_name,
            event_date: self.event_date,
            start_time: format_hh_mm(self.start_time),
            end_time: format_hh_mm(self.end_time),
            status: self.status.into(),
        }
    }
}

/// Full view of a reservation with everything attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetail {
    pub reservation: Reservation,
    pub requester: Person,
    pub department: Option<Department>,
    pub room: Room,
    pub equipment: Vec<RequestedEquipmentDetail>,
    pub services: Vec<RequestedServiceDetail>,
    pub participants: Vec<Participant>,
}

impl ReservationDetail {
    pub fn into_dto(self) -> ReservationDetailDto {
        ReservationDetailDto {
            reservation: self.reservation.into_dto(),
            requester: self.requester.into_dto(),
            department: self.department.map(Department::into_dto),
            room: self.room.into_dto(),
            equipment: self.equipment.into_iter().map(|e| e.into_dto()).collect(),
            services: self.services.into_iter().map(|s| s.into_dto()).collect(),
            participants: self.participants.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}

/// Which pending reservations an approver may see.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingScope {
    /// Every pending reservation
    All,
    /// Reservations in any of `room_ids`, or assigned to `technician_id`
    Scoped {
        room_ids: Vec<i32>,
        technician_id: Option<i32>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Requester {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

/// A pending reservation awaiting a decision, as shown to approvers.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReservation {
    pub reservation: Reservation,
    pub room_name: String,
    pub requester: Requester,
    pub technician: Option<Technician>,
    pub participant_count: u64,
}

impl PendingReservation {
    pub fn into_dto(self) -> PendingReservationDto {
        let r = self.reservation;
        PendingReservationDto {
            id: r.id,
            number: r.number,
            event_name: r.event_name,
            event_type: r.event_type.into(),
            event_date: r.event_date,
            start_time: format_hh_mm(r.start_time),
            end_time: format_hh_mm(r.end_time),
            expected_attendees: r.expected_attendees,
            room_id: r.room_id,
            room_name: self.room_name,
            requester: RequesterDto {
                name: self.requester.name,
                email: self.requester.email,
                department: self.requester.department,
            },
            technician: self.technician.map(Technician::into_brief_dto),
            participant_count: self.participant_count,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub reservation_id: i32,
    pub number: String,
    pub expected_attendees: i32,
    pub actual_attendees: Option<i32>,
}

impl Attendance {
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            reservation_id: self.reservation_id,
            number: self.number,
            expected_attendees: self.expected_attendees,
            actual_attendees: self.actual_attendees,
        }
    }
}

/// Decision taken on a pending reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalDecision {
    Approve,
    Reject,
}

impl From<ApprovalDecisionDto> for ApprovalDecision {
    fn from(dto: ApprovalDecisionDto) -> Self {
        match dto {
            ApprovalDecisionDto::Approve => Self::Approve,
            ApprovalDecisionDto::Reject => Self::Reject,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApprovalParams {
    pub number: String,
    pub decision: ApprovalDecision,
    pub reason: Option<String>,
}

impl ApprovalParams {
    pub fn from_dto(dto: ApprovalRequestDto) -> Self {
        Self {
            number: dto.number.trim().to_string(),
            decision: dto.action.into(),
            reason: dto
                .reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        }
    }
}

/// Audit entry to record against a reservation.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub reservation_id: i32,
    pub actor_id: i32,
    pub action: ApprovalAction,
    pub previous_status: Option<ReservationStatus>,
    pub new_status: ReservationStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalHistoryEntry {
    pub id: i32,
    pub reservation_id: i32,
    pub actor_id: i32,
    pub action: ApprovalAction,
    pub previous_status: Option<ReservationStatus>,
    pub new_status: ReservationStatus,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ApprovalHistoryEntry {
    pub fn from_entity(entity: entity::approval_history::Model) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            actor_id: entity.actor_id,
            action: entity.action,
            previous_status: entity.previous_status,
            new_status: entity.new_status,
            reason: entity.reason,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ApprovalHistoryEntryDto {
        ApprovalHistoryEntryDto {
            id: self.id,
            reservation_id: self.reservation_id,
            actor_id: self.actor_id,
            action: self.action.into(),
            previous_status: self.previous_status.map(Into::into),
            new_status: self.new_status.into(),
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}

/// An existing booking that overlaps a requested window on `event_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictingReservation {
    pub reservation_number: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
}

impl ConflictingReservation {
    pub fn into_dto(self) -> ConflictDto {
        ConflictDto {
            reservation_number: self.reservation_number,
            event_name: self.event_name,
            event_date: self.event_date,
            start_time: format_hh_mm(self.start_time),
            end_time: format_hh_mm(self.end_time),
            status: self.status.into(),
        }
    }
}
