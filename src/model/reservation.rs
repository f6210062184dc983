use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::model::{
    department::DepartmentDto, participant::ParticipantDto, room::RoomDto, user::PersonDto,
};

/// Validates a 24-hour `HH:MM` clock time.
pub fn validate_hh_mm(value: &str) -> Result<(), ValidationError> {
    if value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("time_format").with_message("expected HH:MM".into()))
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventTypeDto {
    Meeting,
    Videoconference,
    Presentation,
    Training,
    Conference,
    Other,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatusDto {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceDto {
    #[default]
    Single,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalActionDto {
    Created,
    Approved,
    Rejected,
    Cancelled,
    Updated,
}

/// Decision submitted by an approver.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecisionDto {
    Approve,
    Reject,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RequestedEquipmentDto {
    pub equipment_type_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RequestedEquipmentDetailDto {
    pub equipment_type_id: i32,
    pub name: String,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RequestedServiceDto {
    pub additional_service_id: i32,
    pub quantity: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RequestedServiceDetailDto {
    pub additional_service_id: i32,
    pub name: String,
    pub quantity: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateReservationDto {
    /// Generated as `RES-YYYYMMDD-XXXXXX` when omitted
    #[validate(length(min = 1, max = 50))]
    pub number: Option<String>,
    /// Defaults to the authenticated user; only admins may book for someone else
    pub requester_id: Option<i32>,
    pub room_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub event_name: String,
    pub event_type: EventTypeDto,
    pub event_date: NaiveDate,
    #[validate(custom(function = "validate_hh_mm"))]
    pub start_time: String,
    #[validate(custom(function = "validate_hh_mm"))]
    pub end_time: String,
    #[validate(range(min = 0))]
    pub expected_attendees: i32,
    #[serde(default)]
    pub recurrence: RecurrenceDto,
    pub recurrence_end: Option<NaiveDate>,
    pub notes: Option<String>,
    #[validate(url)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub equipment: Vec<RequestedEquipmentDto>,
    #[serde(default)]
    pub services: Vec<RequestedServiceDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct UpdateReservationDto {
    pub room_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub event_name: Option<String>,
    pub event_type: Option<EventTypeDto>,
    pub event_date: Option<NaiveDate>,
    #[validate(custom(function = "validate_hh_mm"))]
    pub start_time: Option<String>,
    #[validate(custom(function = "validate_hh_mm"))]
    pub end_time: Option<String>,
    #[validate(range(min = 0))]
    pub expected_attendees: Option<i32>,
    #[validate(range(min = 0))]
    pub actual_attendees: Option<i32>,
    pub status: Option<ReservationStatusDto>,
    pub recurrence: Option<RecurrenceDto>,
    pub recurrence_end: Option<NaiveDate>,
    pub notes: Option<String>,
    #[validate(url)]
    pub meeting_link: Option<String>,
    pub reported_failures: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub number: String,
    pub requester_id: i32,
    pub assigned_technician_id: Option<i32>,
    pub room_id: i32,
    pub event_name: String,
    pub event_type: EventTypeDto,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub expected_attendees: i32,
    pub actual_attendees: Option<i32>,
    pub status: ReservationStatusDto,
    pub recurrence: RecurrenceDto,
    pub recurrence_end: Option<NaiveDate>,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
    pub reported_failures: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationSummaryDto {
    pub number: String,
    pub event_name: String,
    pub room_id: i32,
    pub room_name: String,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: ReservationStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationHistoryDto {
    /// Present when the user has no reservations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub reservations: Vec<ReservationSummaryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDetailDto {
    pub reservation: ReservationDto,
    pub requester: PersonDto,
    pub department: Option<DepartmentDto>,
    pub room: RoomDto,
    pub equipment: Vec<RequestedEquipmentDetailDto>,
    pub services: Vec<RequestedServiceDetailDto>,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct ApprovalRequestDto {
    #[validate(length(min = 1, max = 50))]
    pub number: String,
    pub action: ApprovalDecisionDto,
    #[validate(length(max = 1000))]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RequesterDto {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TechnicianBriefDto {
    pub id: i32,
    pub name: String,
    pub specialty: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PendingReservationDto {
    pub id: i32,
    pub number: String,
    pub event_name: String,
    pub event_type: EventTypeDto,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub expected_attendees: i32,
    pub room_id: i32,
    pub room_name: String,
    pub requester: RequesterDto,
    pub technician: Option<TechnicianBriefDto>,
    pub participant_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceDto {
    pub reservation_id: i32,
    pub number: String,
    pub expected_attendees: i32,
    pub actual_attendees: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApprovalHistoryEntryDto {
    pub id: i32,
    pub reservation_id: i32,
    pub actor_id: i32,
    pub action: ApprovalActionDto,
    pub previous_status: Option<ReservationStatusDto>,
    pub new_status: ReservationStatusDto,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
