//! Reservation factory for creating test reservation entities.
//!
//! Defaults produce a single pending meeting on 2030-01-15 from 09:00 to 10:00,
//! far enough in the future to never collide with "today" in date-based tests.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::{EventType, Recurrence, ReservationStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, requester.id, room.id)
///     .times(at(14, 0), at(15, 30))
///     .status(ReservationStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    room_id: i32,
    number: String,
    event_name: String,
    event_type: EventType,
    event_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    expected_attendees: i32,
    actual_attendees: Option<i32>,
    status: ReservationStatus,
    recurrence: Recurrence,
    recurrence_end: Option<NaiveDate>,
    assigned_technician_id: Option<i32>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - number: `"RES-TEST-{id}"`
    /// - event_name: `"Event {id}"`
    /// - event_type: `EventType::Meeting`
    /// - event_date: 2030-01-15, 09:00 to 10:00
    /// - expected_attendees: `5`
    /// - status: `ReservationStatus::Pending`
    /// - recurrence: `Recurrence::Single`
    pub fn new(db: &'a DatabaseConnection, requester_id: i32, room_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            requester_id,
            room_id,
            number: format!("RES-TEST-{}", id),
            event_name: format!("Event {}", id),
            event_type: EventType::Meeting,
            event_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap_or_default(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            expected_attendees: 5,
            actual_attendees: None,
            status: ReservationStatus::Pending,
            recurrence: Recurrence::Single,
            recurrence_end: None,
            assigned_technician_id: None,
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.event_date = event_date;
        self
    }

    /// Sets the start and end time of the booking.
    pub fn times(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn expected_attendees(mut self, expected_attendees: i32) -> Self {
        self.expected_attendees = expected_attendees;
        self
    }

    pub fn actual_attendees(mut self, actual_attendees: Option<i32>) -> Self {
        self.actual_attendees = actual_attendees;
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the recurrence pattern and its inclusive end date.
    pub fn recurrence(mut self, recurrence: Recurrence, recurrence_end: Option<NaiveDate>) -> Self {
        self.recurrence = recurrence;
        self.recurrence_end = recurrence_end;
        self
    }

    pub fn assigned_technician_id(mut self, assigned_technician_id: Option<i32>) -> Self {
        self.assigned_technician_id = assigned_technician_id;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            number: ActiveValue::Set(self.number),
            requester_id: ActiveValue::Set(self.requester_id),
            assigned_technician_id: ActiveValue::Set(self.assigned_technician_id),
            room_id: ActiveValue::Set(self.room_id),
            event_name: ActiveValue::Set(self.event_name),
            event_type: ActiveValue::Set(self.event_type),
            event_date: ActiveValue::Set(self.event_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            expected_attendees: ActiveValue::Set(self.expected_attendees),
            actual_attendees: ActiveValue::Set(self.actual_attendees),
            status: ActiveValue::Set(self.status),
            recurrence: ActiveValue::Set(self.recurrence),
            recurrence_end: ActiveValue::Set(self.recurrence_end),
            notes: ActiveValue::Set(None),
            meeting_link: ActiveValue::Set(None),
            reported_failures: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            updated_by: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending reservation with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
    requester_id: i32,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, requester_id, room_id)
        .build()
        .await
}
