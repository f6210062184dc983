use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{
    participant::ParticipantDto,
    reservation::{
        validate_hh_mm, EventTypeDto, RequestedEquipmentDetailDto, RequestedServiceDetailDto,
    },
    user::PersonDto,
};

fn default_available() -> bool {
    true
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatusDto {
    Operational,
    NonOperational,
    UnderMaintenance,
    Damaged,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub department_id: i32,
    pub responsible_technician_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub min_capacity: Option<i32>,
    pub max_capacity: i32,
    pub image_url: Option<String>,
    pub available: bool,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateRoomDto {
    pub department_id: i32,
    pub responsible_technician_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(range(min = 0))]
    pub min_capacity: Option<i32>,
    #[validate(range(min = 1))]
    pub max_capacity: i32,
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    pub notes: Option<String>,
}

/// Request for rooms free during a window, which may span several days.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AvailableRoomsDto {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Restricts the search to these rooms when non-empty
    #[serde(default)]
    pub room_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct ValidateAvailabilityDto {
    pub room_id: i32,
    pub date: NaiveDate,
    #[validate(custom(function = "validate_hh_mm"))]
    pub start_time: String,
    #[validate(custom(function = "validate_hh_mm"))]
    pub end_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConflictTypeDto {
    RoomBlocked,
    ExistingReservation,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TimeSlotDto {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConflictDetailsDto {
    pub message: String,
    pub event_name: Option<String>,
    pub reservation_number: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SuggestionsDto {
    pub next_available: Option<TimeSlotDto>,
    pub alternatives: Vec<TimeSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConflictReportDto {
    pub has_conflict: bool,
    pub conflict_type: Option<ConflictTypeDto>,
    pub conflict_details: Option<ConflictDetailsDto>,
    pub suggestions: Option<SuggestionsDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DailyAvailabilityDto {
    pub room_id: i32,
    pub room_name: String,
    pub location: Option<String>,
    pub max_capacity: i32,
    pub is_available: bool,
    pub booked_slots: Vec<TimeSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomWithHistoryDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub max_capacity: i32,
    pub available: bool,
    pub total_events: u64,
    pub last_used: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomUsageDto {
    pub reservation_id: i32,
    pub number: String,
    pub event_name: String,
    pub event_type: EventTypeDto,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub expected_attendees: i32,
    pub actual_attendees: Option<i32>,
    pub reported_failures: Option<String>,
    pub requester: PersonDto,
    pub equipment: Vec<RequestedEquipmentDetailDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDetailDto {
    pub room: RoomDto,
    pub usage: RoomUsageDto,
    pub participants: Vec<ParticipantDto>,
    pub services: Vec<RequestedServiceDetailDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EquipmentItemDto {
    pub id: i32,
    pub room_id: i32,
    pub equipment_type_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: i32,
    pub status: EquipmentStatusDto,
    pub serial_number: Option<String>,
    pub last_inspection: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
pub struct UpdateEquipmentDto {
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    pub status: Option<EquipmentStatusDto>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct StatusCountsDto {
    pub operational: i32,
    pub non_operational: i32,
    pub under_maintenance: i32,
    pub damaged: i32,
    pub total: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InventoryItemDto {
    pub item: String,
    pub counts: StatusCountsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InventoryDto {
    pub room_id: i32,
    pub room_name: String,
    pub items: Vec<InventoryItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct InventoryUpdateItemDto {
    #[validate(length(min = 1, max = 50))]
    pub item: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub status: EquipmentStatusDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct UpdateInventoryDto {
    /// Must match the room in the path when given
    pub room_id: Option<i32>,
    #[validate(length(min = 1), nested)]
    pub items: Vec<InventoryUpdateItemDto>,
}
