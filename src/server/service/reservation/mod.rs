//! Reservation service: creation, rescheduling, cancellation and read models.
//!
//! Approval routing and decisions live in [`approval`], visibility rules in [`access`]
//! and the scheduling rules used to detect double bookings in [`conflict`].

pub mod access;
pub mod approval;
pub mod conflict;

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{ApprovalAction, ReservationStatus, UserRole};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        additional_service::AdditionalServiceRepository,
        approval_history::ApprovalHistoryRepository, department::DepartmentRepository,
        equipment::EquipmentRepository, participant::ParticipantRepository,
        reservation::ReservationRepository, room::RoomRepository,
        technician::TechnicianRepository, user::UserRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        reservation::{
            ApprovalHistoryEntry, Attendance, CreateReservationParams, NewHistoryEntry,
            NewReservation, Reservation, ReservationDetail, ReservationSummary,
            UpdateReservationParams, BLOCKING_STATUSES,
        },
        room::Room,
        user::{Person, User},
    },
    service::notification::{dispatch, Notification, Notifier, Recipient},
};

use self::conflict::{find_conflicts, generate_number, Schedule};

/// Generated numbers tried before giving up on finding a free one.
const MAX_NUMBER_ATTEMPTS: usize = 5;

pub(crate) fn status_label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "pending",
        ReservationStatus::Approved => "approved",
        ReservationStatus::Rejected => "rejected",
        ReservationStatus::Cancelled => "cancelled",
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Reservation not found".to_string())
}

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Creates a pending reservation routed to the room's responsible technician.
    ///
    /// Validates the schedule, the room (exists, bookable, large enough), the requester
    /// and the requested equipment and services, resolves a unique reservation number
    /// and rejects the request when any occurrence overlaps a pending or approved
    /// booking of the room.
    ///
    /// # Arguments
    /// - `actor` - Authenticated user; only admins may book for another requester
    /// - `params` - Parsed reservation fields
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(AppError::BadRequest)` - Invalid schedule, blocked room, capacity exceeded
    ///   or unknown equipment/service
    /// - `Err(AppError::NotFound)` - Room or requester does not exist
    /// - `Err(AppError::Conflict)` - Supplied reservation number already used
    /// - `Err(AppError::ReservationConflict)` - Overlapping bookings
    pub async fn create(
        &self,
        actor: &User,
        params: CreateReservationParams,
    ) -> Result<Reservation, AppError> {
        if params.requester_id != actor.id && actor.role != UserRole::Admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("booking on behalf of user {}", params.requester_id),
            )
            .into());
        }

        let schedule = Schedule {
            event_date: params.event_date,
            start_time: params.start_time,
            end_time: params.end_time,
            recurrence: params.recurrence,
            recurrence_end: params.recurrence_end,
        };
        schedule.validate()?;

        let room = self
            .bookable_room(params.room_id, params.expected_attendees)
            .await?;

        let requester = UserRepository::new(self.db)
            .find_by_id(params.requester_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Requester not found".to_string()))?;

        self.validate_line_items(&params).await?;

        let number = self.resolve_number(params.number.as_deref()).await?;

        let new = NewReservation {
            number,
            assigned_technician_id: Some(room.responsible_technician_id),
            params,
        };

        let txn = self.db.begin().await?;
        self.ensure_no_conflicts(&txn, room.id, &schedule, &BLOCKING_STATUSES, None)
            .await?;
        let reservation = ReservationRepository::new(&txn).create(&new, actor.id).await?;
        txn.commit().await?;

        tracing::info!(
            number = %reservation.number,
            room_id = room.id,
            requester_id = requester.id,
            "Reservation created"
        );

        let mut notifications = vec![Notification::request_received(
            &recipient(&requester),
            &reservation,
            &room.name,
        )];
        if let Some(technician) = self.technician_recipient(&reservation, &room).await? {
            notifications.push(Notification::approval_requested(
                &technician,
                &reservation,
                &room.name,
            ));
        }
        dispatch(self.notifier, notifications).await;

        Ok(reservation)
    }

    /// Lists reservations, optionally within an inclusive event date range.
    pub async fn list(
        &self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<Reservation>, AppError> {
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "date_from must not be after date_to".to_string(),
                ));
            }
        }

        Ok(ReservationRepository::new(self.db)
            .get_all(date_from, date_to)
            .await?)
    }

    /// Gets a user's reservations newest first. Users see their own history; admins
    /// see anyone's.
    pub async fn history_for_user(
        &self,
        actor: &User,
        user_id: i32,
    ) -> Result<Vec<ReservationSummary>, AppError> {
        if actor.id != user_id && actor.role != UserRole::Admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("reading reservation history of user {}", user_id),
            )
            .into());
        }

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(ReservationRepository::new(self.db)
            .get_by_requester(user_id)
            .await?)
    }

    /// Gets a reservation by number if the actor may see it.
    pub async fn get_by_number(&self, actor: &User, number: &str) -> Result<Reservation, AppError> {
        let reservation = self.load(number).await?;
        let room = self.load_room(reservation.room_id).await?;
        self.ensure_visible(actor, &reservation, &room).await?;

        Ok(reservation)
    }

    /// Gets a reservation with requester, department, room, requested equipment and
    /// services and participants.
    ///
    /// # Returns
    /// - `Ok(ReservationDetail)` - Full detail
    /// - `Err(AppError::NotFound)` - Unknown reservation, or one the actor may not see
    pub async fn detail(&self, actor: &User, id: i32) -> Result<ReservationDetail, AppError> {
        let repo = ReservationRepository::new(self.db);

        let reservation = repo.find_by_id(id).await?.ok_or_else(not_found)?;
        let room = self.load_room(reservation.room_id).await?;
        self.ensure_visible(actor, &reservation, &room).await?;

        let requester = UserRepository::new(self.db)
            .find_by_id(reservation.requester_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Requester not found".to_string()))?;
        let department = match requester.department_id {
            Some(department_id) => {
                DepartmentRepository::new(self.db)
                    .find_by_id(department_id)
                    .await?
            }
            None => None,
        };

        let equipment = repo.get_equipment(reservation.id).await?;
        let services = repo.get_services(reservation.id).await?;
        let participants = ParticipantRepository::new(self.db)
            .get_by_reservation(reservation.id)
            .await?;

        Ok(ReservationDetail {
            reservation,
            requester: Person::from_user(&requester),
            department,
            room,
            equipment,
            services,
            participants,
        })
    }

    /// Applies a partial update to a reservation.
    ///
    /// Only the requester or an admin may update. Room, date, times, recurrence and
    /// expected attendees may only change while the reservation is pending, and such
    /// changes are re-checked for conflicts excluding the reservation itself. The only
    /// status reachable through an update is `Cancelled`.
    pub async fn update(
        &self,
        actor: &User,
        number: &str,
        mut params: UpdateReservationParams,
    ) -> Result<Reservation, AppError> {
        let reservation = self.load(number).await?;
        ensure_owner_or_admin(actor, &reservation)?;

        if reservation.status == ReservationStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Cancelled reservations cannot be modified".to_string(),
            ));
        }

        let cancelling = match params.status {
            None => false,
            Some(ReservationStatus::Cancelled) => {
                if reservation.status == ReservationStatus::Rejected {
                    return Err(AppError::BadRequest(
                        "Reservation is already rejected".to_string(),
                    ));
                }
                true
            }
            Some(_) => {
                return Err(AppError::BadRequest(
                    "Status can only be changed to cancelled".to_string(),
                ))
            }
        };

        let mut reschedule = None;
        if params.changes_schedule() {
            if reservation.status != ReservationStatus::Pending {
                return Err(AppError::BadRequest(
                    "Only pending reservations can be rescheduled".to_string(),
                ));
            }

            let schedule = Schedule {
                event_date: params.event_date.unwrap_or(reservation.event_date),
                start_time: params.start_time.unwrap_or(reservation.start_time),
                end_time: params.end_time.unwrap_or(reservation.end_time),
                recurrence: params.recurrence.unwrap_or(reservation.recurrence),
                recurrence_end: params.recurrence_end.or(reservation.recurrence_end),
            };
            schedule.validate()?;

            let room_id = params.room_id.unwrap_or(reservation.room_id);
            let attendees = params
                .expected_attendees
                .unwrap_or(reservation.expected_attendees);
            let room = self.bookable_room(room_id, attendees).await?;

            if room.id != reservation.room_id {
                params.assigned_technician_id = Some(room.responsible_technician_id);
            }
            reschedule = Some((room.id, schedule));
        }

        let new_status = params.status.unwrap_or(reservation.status);
        let entry = NewHistoryEntry {
            reservation_id: reservation.id,
            actor_id: actor.id,
            action: if cancelling {
                ApprovalAction::Cancelled
            } else {
                ApprovalAction::Updated
            },
            previous_status: Some(reservation.status),
            new_status,
            reason: None,
        };

        let txn = self.db.begin().await?;
        if let Some((room_id, schedule)) = &reschedule {
            self.ensure_no_conflicts(
                &txn,
                *room_id,
                schedule,
                &BLOCKING_STATUSES,
                Some(reservation.id),
            )
            .await?;
        }
        let updated = ReservationRepository::new(&txn)
            .update(reservation.id, &params, &entry)
            .await?
            .ok_or_else(not_found)?;
        txn.commit().await?;

        tracing::info!(number = %updated.number, actor_id = actor.id, "Reservation updated");

        if cancelling {
            self.notify_cancelled(&updated).await?;
        }

        Ok(updated)
    }

    /// Cancels a pending or approved reservation.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The cancelled reservation
    /// - `Err(AppError::BadRequest)` - Reservation already rejected or cancelled
    /// - `Err(AppError::AuthErr)` - Actor is neither the requester nor an admin
    pub async fn cancel(&self, actor: &User, number: &str) -> Result<Reservation, AppError> {
        let reservation = self.load(number).await?;
        ensure_owner_or_admin(actor, &reservation)?;

        if !reservation.is_blocking() {
            return Err(AppError::BadRequest(format!(
                "Reservation is already {}",
                status_label(reservation.status)
            )));
        }

        let entry = NewHistoryEntry {
            reservation_id: reservation.id,
            actor_id: actor.id,
            action: ApprovalAction::Cancelled,
            previous_status: Some(reservation.status),
            new_status: ReservationStatus::Cancelled,
            reason: None,
        };
        let cancelled = ReservationRepository::new(self.db)
            .set_status(reservation.id, &entry, None)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!(number = %cancelled.number, actor_id = actor.id, "Reservation cancelled");

        self.notify_cancelled(&cancelled).await?;

        Ok(cancelled)
    }

    /// Gets expected and actual attendance of a reservation.
    pub async fn attendance(&self, actor: &User, id: i32) -> Result<Attendance, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;
        let room = self.load_room(reservation.room_id).await?;
        self.ensure_visible(actor, &reservation, &room).await?;

        Ok(Attendance {
            reservation_id: reservation.id,
            number: reservation.number,
            expected_attendees: reservation.expected_attendees,
            actual_attendees: reservation.actual_attendees,
        })
    }

    /// Gets the audit trail of a reservation, oldest first.
    pub async fn approval_history(
        &self,
        actor: &User,
        number: &str,
    ) -> Result<Vec<ApprovalHistoryEntry>, AppError> {
        let reservation = self.load(number).await?;
        let room = self.load_room(reservation.room_id).await?;
        self.ensure_visible(actor, &reservation, &room).await?;

        Ok(ApprovalHistoryRepository::new(self.db)
            .get_by_reservation(reservation.id)
            .await?)
    }

    async fn load(&self, number: &str) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_number(number)
            .await?
            .ok_or_else(not_found)
    }

    async fn load_room(&self, room_id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Loads a room and checks it can host `attendees` people.
    async fn bookable_room(&self, room_id: i32, attendees: i32) -> Result<Room, AppError> {
        let room = self.load_room(room_id).await?;

        if !room.available {
            return Err(AppError::BadRequest("Room is blocked".to_string()));
        }
        if attendees < 0 {
            return Err(AppError::BadRequest(
                "Expected attendees must not be negative".to_string(),
            ));
        }
        if attendees > room.max_capacity {
            return Err(AppError::BadRequest(format!(
                "Expected attendees exceed room capacity of {}",
                room.max_capacity
            )));
        }

        Ok(room)
    }

    async fn validate_line_items(&self, params: &CreateReservationParams) -> Result<(), AppError> {
        if params.equipment.iter().any(|e| e.quantity < 1)
            || params.services.iter().any(|s| s.quantity.is_some_and(|q| q < 1))
        {
            return Err(AppError::BadRequest(
                "Requested quantities must be at least 1".to_string(),
            ));
        }

        let equipment_ids: HashSet<i32> =
            params.equipment.iter().map(|e| e.equipment_type_id).collect();
        if params.equipment.len() != equipment_ids.len() {
            return Err(AppError::BadRequest(
                "Each equipment type may be requested once".to_string(),
            ));
        }
        let equipment_ids: Vec<i32> = equipment_ids.into_iter().collect();
        let found = EquipmentRepository::new(self.db)
            .count_types(&equipment_ids)
            .await?;
        if found as usize != equipment_ids.len() {
            return Err(AppError::BadRequest(
                "Unknown equipment type requested".to_string(),
            ));
        }

        let service_ids: HashSet<i32> = params
            .services
            .iter()
            .map(|s| s.additional_service_id)
            .collect();
        if params.services.len() != service_ids.len() {
            return Err(AppError::BadRequest(
                "Each service may be requested once".to_string(),
            ));
        }
        let service_ids: Vec<i32> = service_ids.into_iter().collect();
        let found = AdditionalServiceRepository::new(self.db)
            .count_existing(&service_ids)
            .await?;
        if found as usize != service_ids.len() {
            return Err(AppError::BadRequest(
                "Unknown additional service requested".to_string(),
            ));
        }

        Ok(())
    }

    /// Uses the supplied number when free, otherwise generates one from today's date.
    async fn resolve_number(&self, supplied: Option<&str>) -> Result<String, AppError> {
        let repo = ReservationRepository::new(self.db);

        if let Some(number) = supplied {
            if number.is_empty() {
                return Err(AppError::BadRequest(
                    "Reservation number must not be empty".to_string(),
                ));
            }
            if repo.number_exists(number).await? {
                return Err(AppError::Conflict(format!(
                    "Reservation number {} already exists",
                    number
                )));
            }
            return Ok(number.to_string());
        }

        let today = Utc::now().date_naive();
        for _ in 0..MAX_NUMBER_ATTEMPTS {
            let candidate = generate_number(today);
            if !repo.number_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(InternalError::ReservationNumberExhausted {
            attempts: MAX_NUMBER_ATTEMPTS,
        }
        .into())
    }

    /// Fails with the overlapping bookings when any occurrence of `schedule` collides
    /// with a reservation of the room in one of `statuses`.
    ///
    /// Runs on `conn` so the check shares the transaction of the write it guards.
    async fn ensure_no_conflicts<C>(
        &self,
        conn: &C,
        room_id: i32,
        schedule: &Schedule,
        statuses: &[ReservationStatus],
        exclude_id: Option<i32>,
    ) -> Result<(), AppError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let existing = ReservationRepository::new(conn)
            .get_blocking(
                &[room_id],
                statuses,
                schedule.event_date,
                schedule.series_end(),
                exclude_id,
            )
            .await?;

        let conflicts = find_conflicts(schedule, &existing);
        if conflicts.is_empty() {
            Ok(())
        } else {
            tracing::debug!(room_id, conflicts = conflicts.len(), "Reservation conflict");
            Err(AppError::ReservationConflict(conflicts))
        }
    }

    /// The technician handling the reservation: the assigned one, else the room's.
    async fn technician_recipient(
        &self,
        reservation: &Reservation,
        room: &Room,
    ) -> Result<Option<Recipient>, AppError> {
        let technician_id = reservation
            .assigned_technician_id
            .unwrap_or(room.responsible_technician_id);

        let technician = TechnicianRepository::new(self.db)
            .find_by_id(technician_id)
            .await?;

        Ok(technician.map(|t| Recipient {
            name: t.name,
            email: t.email,
        }))
    }

    async fn notify_cancelled(&self, reservation: &Reservation) -> Result<(), AppError> {
        let room = self.load_room(reservation.room_id).await?;
        let mut notifications = Vec::new();

        if let Some(requester) = UserRepository::new(self.db)
            .find_by_id(reservation.requester_id)
            .await?
        {
            notifications.push(Notification::cancelled(
                &recipient(&requester),
                reservation,
                &room.name,
            ));
        }
        if let Some(technician) = self.technician_recipient(reservation, &room).await? {
            notifications.push(Notification::cancelled(&technician, reservation, &room.name));
        }

        dispatch(self.notifier, notifications).await;
        Ok(())
    }
}

fn recipient(user: &User) -> Recipient {
    Recipient {
        name: user.full_name(),
        email: user.email.clone(),
    }
}

fn ensure_owner_or_admin(actor: &User, reservation: &Reservation) -> Result<(), AppError> {
    if reservation.requester_id == actor.id || actor.role == UserRole::Admin {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(
            actor.id,
            format!("modifying reservation {}", reservation.number),
        )
        .into())
    }
}
