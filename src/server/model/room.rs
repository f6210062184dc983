//! Room, availability, usage history and equipment inventory domain models.

use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::{EquipmentStatus, EventType};

use crate::{
    model::room::{
        ConflictDetailsDto, ConflictReportDto, ConflictTypeDto, CreateRoomDto,
        DailyAvailabilityDto, EquipmentItemDto, EquipmentStatusDto, EventDetailDto,
        InventoryDto, InventoryItemDto, InventoryUpdateItemDto, RoomDto, RoomUsageDto,
        RoomWithHistoryDto, StatusCountsDto, SuggestionsDto, TimeSlotDto, UpdateEquipmentDto,
    },
    server::{
        model::{
            participant::Participant,
            reservation::{RequestedEquipmentDetail, RequestedServiceDetail},
            user::Person,
        },
        util::time::format_hh_mm,
    },
};

use super::enum_mapping;

enum_mapping!(EquipmentStatus <=> EquipmentStatusDto {
    Operational,
    NonOperational,
    UnderMaintenance,
    Damaged,
});

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
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

impl Room {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            department_id: entity.department_id,
            responsible_technician_id: entity.responsible_technician_id,
            name: entity.name,
            location: entity.location,
            min_capacity: entity.min_capacity,
            max_capacity: entity.max_capacity,
            image_url: entity.image_url,
            available: entity.available,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            department_id: self.department_id,
            responsible_technician_id: self.responsible_technician_id,
            name: self.name,
            location: self.location,
            min_capacity: self.min_capacity,
            max_capacity: self.max_capacity,
            image_url: self.image_url,
            available: self.available,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
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

impl CreateRoomParams {
    pub fn from_dto(dto: CreateRoomDto) -> Self {
        Self {
            department_id: dto.department_id,
            responsible_technician_id: dto.responsible_technician_id,
            name: dto.name.trim().to_string(),
            location: dto.location,
            min_capacity: dto.min_capacity,
            max_capacity: dto.max_capacity,
            image_url: dto.image_url,
            available: dto.available,
            notes: dto.notes,
        }
    }
}

/// A window of time on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn into_dto(self) -> TimeSlotDto {
        TimeSlotDto {
            start_time: format_hh_mm(self.start),
            end_time: format_hh_mm(self.end),
        }
    }
}

/// Why a requested slot cannot be booked.
#[derive(Debug, Clone, PartialEq)]
pub enum AvailabilityConflict {
    RoomBlocked,
    ExistingReservation {
        event_name: String,
        reservation_number: String,
        slot: TimeSlot,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions {
    pub next_available: Option<TimeSlot>,
    pub alternatives: Vec<TimeSlot>,
}

impl Suggestions {
    /// Builds suggestions from free slots in chronological order.
    pub fn from_free_slots(slots: Vec<TimeSlot>) -> Self {
        Self {
            next_available: slots.first().copied(),
            alternatives: slots,
        }
    }

    pub fn into_dto(self) -> SuggestionsDto {
        SuggestionsDto {
            next_available: self.next_available.map(TimeSlot::into_dto),
            alternatives: self.alternatives.into_iter().map(TimeSlot::into_dto).collect(),
        }
    }
}

/// Outcome of checking a room for a slot on a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictReport {
    pub conflict: Option<AvailabilityConflict>,
    pub suggestions: Option<Suggestions>,
}

impl ConflictReport {
    pub fn clear() -> Self {
        Self {
            conflict: None,
            suggestions: None,
        }
    }

    pub fn has_conflict(&self) -> bool {
        self.conflict.is_some()
    }

    pub fn into_dto(self) -> ConflictReportDto {
        let has_conflict = self.has_conflict();
        let (conflict_type, conflict_details) = match self.conflict {
            None => (None, None),
            Some(AvailabilityConflict::RoomBlocked) => (
                Some(ConflictTypeDto::RoomBlocked),
                Some(ConflictDetailsDto {
                    message: "Room is blocked".to_string(),
                    event_name: None,
                    reservation_number: None,
                    start_time: None,
                    end_time: None,
                }),
            ),
            Some(AvailabilityConflict::ExistingReservation {
                event_name,
                reservation_number,
                slot,
            }) => (
                Some(ConflictTypeDto::ExistingReservation),
                Some(ConflictDetailsDto {
                    message: "Room already booked for the requested time".to_string(),
                    event_name: Some(event_name),
                    reservation_number: Some(reservation_number),
                    start_time: Some(format_hh_mm(slot.start)),
                    end_time: Some(format_hh_mm(slot.end)),
                }),
            ),
        };

        ConflictReportDto {
            has_conflict,
            conflict_type,
            conflict_details,
            suggestions: self.suggestions.map(Suggestions::into_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyAvailability {
    pub room: Room,
    pub is_available: bool,
    pub booked_slots: Vec<TimeSlot>,
}

impl DailyAvailability {
    pub fn into_dto(self) -> DailyAvailabilityDto {
        DailyAvailabilityDto {
            room_id: self.room.id,
            room_name: self.room.name,
            location: self.room.location,
            max_capacity: self.room.max_capacity,
            is_available: self.is_available,
            booked_slots: self.booked_slots.into_iter().map(TimeSlot::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomWithHistory {
    pub room: Room,
    pub total_events: u64,
    pub last_used: Option<NaiveDate>,
}

impl RoomWithHistory {
    pub fn into_dto(self) -> RoomWithHistoryDto {
        RoomWithHistoryDto {
            id: self.room.id,
            name: self.room.name,
            location: self.room.location,
            max_capacity: self.room.max_capacity,
            available: self.room.available,
            total_events: self.total_events,
            last_used: self.last_used,
        }
    }
}

/// An approved reservation as it appears in a room's usage history.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomUsage {
    pub reservation_id: i32,
    pub number: String,
    pub event_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub expected_attendees: i32,
    pub actual_attendees: Option<i32>,
    pub reported_failures: Option<String>,
    pub requester: Person,
    pub equipment: Vec<RequestedEquipmentDetail>,
}

impl RoomUsage {
    pub fn into_dto(self) -> RoomUsageDto {
        RoomUsageDto {
            reservation_id: self.reservation_id,
            number: self.number,
            event_name: self.event_name,
            event_type: self.event_type.into(),
            event_date: self.event_date,
            start_time: format_hh_mm(self.start_time),
            end_time: format_hh_mm(self.end_time),
            expected_attendees: self.expected_attendees,
            actual_attendees: self.actual_attendees,
            reported_failures: self.reported_failures,
            requester: self.requester.into_dto(),
            equipment: self.equipment.into_iter().map(|e| e.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub room: Room,
    pub usage: RoomUsage,
    pub participants: Vec<Participant>,
    pub services: Vec<RequestedServiceDetail>,
}

impl EventDetail {
    pub fn into_dto(self) -> EventDetailDto {
        EventDetailDto {
            room: self.room.into_dto(),
            usage: self.usage.into_dto(),
            participants: self.participants.into_iter().map(|p| p.into_dto()).collect(),
            services: self.services.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}

/// A kind of equipment rooms can hold.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentType {
    pub id: i32,
    pub name: String,
}

impl EquipmentType {
    pub fn from_entity(entity: entity::equipment_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// A room's equipment row joined with its equipment type.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentItem {
    pub id: i32,
    pub room_id: i32,
    pub equipment_type_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub quantity: i32,
    pub status: EquipmentStatus,
    pub serial_number: Option<String>,
    pub last_inspection: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl EquipmentItem {
    pub fn from_entity(
        entity: entity::room_equipment::Model,
        equipment_type: Option<entity::equipment_type::Model>,
    ) -> Self {
        let (name, description, brand, model) = match equipment_type {
            Some(t) => (t.name, t.description, t.brand, t.model),
            None => (String::new(), None, None, None),
        };

        Self {
            id: entity.id,
            room_id: entity.room_id,
            equipment_type_id: entity.equipment_type_id,
            name,
            description,
            brand,
            model,
            quantity: entity.quantity,
            status: entity.status,
            serial_number: entity.serial_number,
            last_inspection: entity.last_inspection,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> EquipmentItemDto {
        EquipmentItemDto {
            id: self.id,
            room_id: self.room_id,
            equipment_type_id: self.equipment_type_id,
            name: self.name,
            description: self.description,
            brand: self.brand,
            model: self.model,
            quantity: self.quantity,
            status: self.status.into(),
            serial_number: self.serial_number,
            last_inspection: self.last_inspection,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEquipmentParams {
    pub quantity: Option<i32>,
    pub status: Option<EquipmentStatus>,
    pub notes: Option<String>,
}

impl UpdateEquipmentParams {
    pub fn from_dto(dto: UpdateEquipmentDto) -> Self {
        Self {
            quantity: dto.quantity,
            status: dto.status.map(Into::into),
            notes: dto.notes,
        }
    }
}

/// Quantities of one inventory item broken down by equipment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub operational: i32,
    pub non_operational: i32,
    pub under_maintenance: i32,
    pub damaged: i32,
}

impl StatusCounts {
    pub fn add(&mut self, status: EquipmentStatus, quantity: i32) {
        match status {
            EquipmentStatus::Operational => self.operational += quantity,
            EquipmentStatus::NonOperational => self.non_operational += quantity,
            EquipmentStatus::UnderMaintenance => self.under_maintenance += quantity,
            EquipmentStatus::Damaged => self.damaged += quantity,
        }
    }

    pub fn total(&self) -> i32 {
        self.operational + self.non_operational + self.under_maintenance + self.damaged
    }

    pub fn into_dto(self) -> StatusCountsDto {
        StatusCountsDto {
            operational: self.operational,
            non_operational: self.non_operational,
            under_maintenance: self.under_maintenance,
            damaged: self.damaged,
            total: self.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub item: String,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub room_id: i32,
    pub room_name: String,
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn into_dto(self) -> InventoryDto {
        InventoryDto {
            room_id: self.room_id,
            room_name: self.room_name,
            items: self
                .items
                .into_iter()
                .map(|i| InventoryItemDto {
                    item: i.item,
                    counts: i.counts.into_dto(),
                })
                .collect(),
        }
    }
}

/// One line of an inventory update request.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryUpdate {
    pub item: String,
    pub quantity: i32,
    pub status: EquipmentStatus,
}

impl InventoryUpdate {
    pub fn from_dto(dto: InventoryUpdateItemDto) -> Self {
        Self {
            item: dto.item,
            quantity: dto.quantity,
            status: dto.status.into(),
        }
    }
}
