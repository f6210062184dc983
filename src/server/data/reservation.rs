//! Reservation data repository for database operations.
//!
//! This module provides the `ReservationRepository`. Writes that touch more than one
//! table (the reservation, its requested equipment and services, and its history entry)
//! run inside a single transaction so a failed insert never leaves a half-created
//! reservation behind.
//!
//! The repository works over a plain connection or an open transaction. Callers that
//! must check for double bookings and write in one step build it over their own
//! transaction; the writes below then nest as savepoints.

use std::collections::HashMap;

use crate::server::{
    data::approval_history::ApprovalHistoryRepository,
    model::reservation::{
        NewHistoryEntry, NewReservation, PendingScope, RequestedEquipmentDetail,
        RequestedServiceDetail, Reservation, ReservationSummary, UpdateReservationParams,
    },
};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionSession, TransactionTrait,
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C> ReservationRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    /// Creates a new ReservationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `ReservationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending reservation with its requested equipment and services.
    ///
    /// Inserts the reservation row, one row per requested equipment type and service,
    /// and a `Created` history entry attributed to `actor_id`, all in one transaction.
    ///
    /// # Arguments
    /// - `new` - Resolved reservation fields including number and routed technician
    /// - `actor_id` - User performing the creation
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, new: &NewReservation, actor_id: i32) -> Result<Reservation, DbErr> {
        let params = &new.params;
        let txn = self.db.begin().await?;

        let entity = entity::reservation::ActiveModel {
            number: ActiveValue::Set(new.number.clone()),
            requester_id: ActiveValue::Set(params.requester_id),
            assigned_technician_id: ActiveValue::Set(new.assigned_technician_id),
            room_id: ActiveValue::Set(params.room_id),
            event_name: ActiveValue::Set(params.event_name.clone()),
            event_type: ActiveValue::Set(params.event_type),
            event_date: ActiveValue::Set(params.event_date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            expected_attendees: ActiveValue::Set(params.expected_attendees),
            actual_attendees: ActiveValue::Set(None),
            status: ActiveValue::Set(ReservationStatus::Pending),
            recurrence: ActiveValue::Set(params.recurrence),
            recurrence_end: ActiveValue::Set(params.recurrence_end),
            notes: ActiveValue::Set(params.notes.clone()),
            meeting_link: ActiveValue::Set(params.meeting_link.clone()),
            reported_failures: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            updated_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for equipment in &params.equipment {
            entity::reservation_equipment::ActiveModel {
                reservation_id: ActiveValue::Set(entity.id),
                equipment_type_id: ActiveValue::Set(equipment.equipment_type_id),
                quantity: ActiveValue::Set(equipment.quantity),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        for service in &params.services {
            entity::reservation_service::ActiveModel {
                reservation_id: ActiveValue::Set(entity.id),
                additional_service_id: ActiveValue::Set(service.additional_service_id),
                quantity: ActiveValue::Set(service.quantity),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        ApprovalHistoryRepository::insert(
            &txn,
            &NewHistoryEntry {
                reservation_id: entity.id,
                actor_id,
                action: entity::sea_orm_active_enums::ApprovalAction::Created,
                previous_status: None,
                new_status: ReservationStatus::Pending,
                reason: None,
            },
        )
        .await?;

        txn.commit().await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Applies a partial update and records the matching history entry.
    ///
    /// Fields left as `None` in `params` are unchanged. `updated_at` is set to now and
    /// `updated_by` to the entry's actor.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Updated reservation
    /// - `Ok(None)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn update(
        &self,
        id: i32,
        params: &UpdateReservationParams,
        entry: &NewHistoryEntry,
    ) -> Result<Option<Reservation>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Reservation::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(room_id) = params.room_id {
            active.room_id = ActiveValue::Set(room_id);
        }
        if let Some(technician_id) = params.assigned_technician_id {
            active.assigned_technician_id = ActiveValue::Set(Some(technician_id));
        }
        if let Some(event_name) = &params.event_name {
            active.event_name = ActiveValue::Set(event_name.clone());
        }
        if let Some(event_type) = params.event_type {
            active.event_type = ActiveValue::Set(event_type);
        }
        if let Some(event_date) = params.event_date {
            active.event_date = ActiveValue::Set(event_date);
        }
        if let Some(start_time) = params.start_time {
            active.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = params.end_time {
            active.end_time = ActiveValue::Set(end_time);
        }
        if let Some(expected) = params.expected_attendees {
            active.expected_attendees = ActiveValue::Set(expected);
        }
        if let Some(actual) = params.actual_attendees {
            active.actual_attendees = ActiveValue::Set(Some(actual));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(recurrence) = params.recurrence {
            active.recurrence = ActiveValue::Set(recurrence);
        }
        if let Some(recurrence_end) = params.recurrence_end {
            active.recurrence_end = ActiveValue::Set(Some(recurrence_end));
        }
        if let Some(notes) = &params.notes {
            active.notes = ActiveValue::Set(Some(notes.clone()));
        }
        if let Some(link) = &params.meeting_link {
            active.meeting_link = ActiveValue::Set(Some(link.clone()));
        }
        if let Some(failures) = &params.reported_failures {
            active.reported_failures = ActiveValue::Set(Some(failures.clone()));
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));
        active.updated_by = ActiveValue::Set(Some(entry.actor_id));

        let updated = active.update(&txn).await?;
        ApprovalHistoryRepository::insert(&txn, entry).await?;
        txn.commit().await?;

        Ok(Some(Reservation::from_entity(updated)))
    }

    /// Moves a reservation to the entry's new status and records the entry.
    ///
    /// # Arguments
    /// - `id` - Reservation ID
    /// - `entry` - History entry; its `new_status` becomes the reservation status
    /// - `assign_technician` - Replaces the assigned technician when `Some`
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Updated reservation
    /// - `Ok(None)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn set_status(
        &self,
        id: i32,
        entry: &NewHistoryEntry,
        assign_technician: Option<i32>,
    ) -> Result<Option<Reservation>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Reservation::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(entry.new_status);
        if let Some(technician_id) = assign_technician {
            active.assigned_technician_id = ActiveValue::Set(Some(technician_id));
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));
        active.updated_by = ActiveValue::Set(Some(entry.actor_id));

        let updated = active.update(&txn).await?;
        ApprovalHistoryRepository::insert(&txn, entry).await?;
        txn.commit().await?;

        Ok(Some(Reservation::from_entity(updated)))
    }

    /// Finds a reservation by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found
    /// - `Ok(None)` - No reservation with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Finds a reservation by its unique number.
    pub async fn find_by_number(&self, number: &str) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Number.eq(number))
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    pub async fn number_exists(&self, number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Number.eq(number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all reservations, optionally within an inclusive event date range.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Reservations ordered by event date then start time
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(from) = date_from {
            query = query.filter(entity::reservation::Column::EventDate.gte(from));
        }
        if let Some(to) = date_to {
            query = query.filter(entity::reservation::Column::EventDate.lte(to));
        }

        let entities = query
            .order_by_asc(entity::reservation::Column::EventDate)
            .order_by_asc(entity::reservation::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets a user's reservations joined with room names, newest first.
    pub async fn get_by_requester(
        &self,
        requester_id: i32,
    ) -> Result<Vec<ReservationSummary>, DbErr> {
        let results = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RequesterId.eq(requester_id))
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::reservation::Column::EventDate)
            .order_by_desc(entity::reservation::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(reservation, room)| ReservationSummary::from_entity(reservation, room))
            .collect())
    }

    /// Gets reservations in the given statuses that may occupy the given rooms between
    /// `from` and `to` inclusive.
    ///
    /// A recurring reservation is included when its series overlaps the date range;
    /// callers expand occurrences to decide whether a given day is actually occupied.
    ///
    /// # Arguments
    /// - `room_ids` - Rooms to search
    /// - `statuses` - Statuses that count as occupying
    /// - `from` / `to` - Inclusive date range
    /// - `exclude_id` - Reservation to leave out, used when re-checking an update
    pub async fn get_blocking(
        &self,
        room_ids: &[i32],
        statuses: &[ReservationStatus],
        from: NaiveDate,
        to: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        if room_ids.is_empty() || statuses.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.is_in(room_ids.iter().copied()))
            .filter(entity::reservation::Column::Status.is_in(statuses.iter().copied()))
            .filter(entity::reservation::Column::EventDate.lte(to))
            .filter(
                Condition::any()
                    .add(entity::reservation::Column::EventDate.gte(from))
                    .add(entity::reservation::Column::RecurrenceEnd.gte(from)),
            );

        if let Some(id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(id));
        }

        let entities = query
            .order_by_asc(entity::reservation::Column::EventDate)
            .order_by_asc(entity::reservation::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets pending reservations visible within a scope, oldest request first.
    pub async fn get_pending(&self, scope: &PendingScope) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Pending));

        if let PendingScope::Scoped {
            room_ids,
            technician_id,
        } = scope
        {
            if room_ids.is_empty() && technician_id.is_none() {
                return Ok(Vec::new());
            }

            let mut condition = Condition::any();
            if !room_ids.is_empty() {
                condition = condition
                    .add(entity::reservation::Column::RoomId.is_in(room_ids.iter().copied()));
            }
            if let Some(technician_id) = technician_id {
                condition = condition
                    .add(entity::reservation::Column::AssignedTechnicianId.eq(*technician_id));
            }
            query = query.filter(condition);
        }

        let entities = query
            .order_by_asc(entity::reservation::Column::CreatedAt)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets the equipment requested for a reservation with type names.
    pub async fn get_equipment(
        &self,
        reservation_id: i32,
    ) -> Result<Vec<RequestedEquipmentDetail>, DbErr> {
        let results = entity::prelude::ReservationEquipment::find()
            .filter(entity::reservation_equipment::Column::ReservationId.eq(reservation_id))
            .find_also_related(entity::prelude::EquipmentType)
            .order_by_asc(entity::reservation_equipment::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(row, kind)| RequestedEquipmentDetail {
                equipment_type_id: row.equipment_type_id,
                name: kind.map(|k| k.name).unwrap_or_default(),
                quantity: row.quantity,
            })
            .collect())
    }

    /// Gets the additional services requested for a reservation with service names.
    pub async fn get_services(
        &self,
        reservation_id: i32,
    ) -> Result<Vec<RequestedServiceDetail>, DbErr> {
        let results = entity::prelude::ReservationService::find()
            .filter(entity::reservation_service::Column::ReservationId.eq(reservation_id))
            .find_also_related(entity::prelude::AdditionalService)
            .order_by_asc(entity::reservation_service::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(row, service)| RequestedServiceDetail {
                additional_service_id: row.additional_service_id,
                name: service.map(|s| s.name).unwrap_or_default(),
                quantity: row.quantity,
            })
            .collect())
    }

    /// Gets approved reservations of a room, newest first, one page at a time.
    ///
    /// # Arguments
    /// - `room_id` - Room whose usage is listed
    /// - `limit` - Maximum rows to return
    /// - `offset` - Rows to skip
    pub async fn get_approved_for_room(
        &self,
        room_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Approved))
            .order_by_desc(entity::reservation::Column::EventDate)
            .order_by_desc(entity::reservation::Column::StartTime)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets, per room, the number of approved reservations and the latest approved event
    /// date. Rooms without approved reservations are absent from the map.
    pub async fn get_approved_stats(&self) -> Result<HashMap<i32, (u64, NaiveDate)>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Approved))
            .all(self.db)
            .await?;

        let mut stats: HashMap<i32, (u64, NaiveDate)> = HashMap::new();
        for reservation in entities {
            stats
                .entry(reservation.room_id)
                .and_modify(|(count, last)| {
                    *count += 1;
                    if reservation.event_date > *last {
                        *last = reservation.event_date;
                    }
                })
                .or_insert((1, reservation.event_date));
        }

        Ok(stats)
    }
}
