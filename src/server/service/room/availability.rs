//! Room availability queries and usage history.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::server::{
    data::{
        participant::ParticipantRepository, reservation::ReservationRepository,
        room::RoomRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        reservation::{RequestedEquipmentDetail, Reservation, BLOCKING_STATUSES},
        room::{
            AvailabilityConflict, ConflictReport, DailyAvailability, EventDetail, Room,
            RoomUsage, RoomWithHistory, Suggestions, TimeSlot,
        },
        user::{Person, User},
    },
    service::reservation::{
        access::ReservationAccess,
        conflict::{free_slots, occupies_window, windows_overlap, Schedule},
    },
};

use super::RoomService;

/// Page size used for usage history when the caller gives none.
pub const DEFAULT_HISTORY_LIMIT: u64 = 50;

impl RoomService<'_> {
    /// Gets bookable rooms with no pending or approved occurrence overlapping
    /// `[start, end)`.
    ///
    /// # Arguments
    /// - `start` / `end` - Requested window, may span several days
    /// - `room_ids` - Restricts the search to these rooms when non-empty
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Free rooms ordered by name
    /// - `Err(AppError::BadRequest)` - `start` is not before `end`
    pub async fn available_in_window(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        room_ids: &[i32],
    ) -> Result<Vec<Room>, AppError> {
        if start >= end {
            return Err(AppError::BadRequest(
                "Start must be before end".to_string(),
            ));
        }

        let rooms = RoomRepository::new(self.db).get_bookable(room_ids).await?;
        let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();

        let reservations = ReservationRepository::new(self.db)
            .get_blocking(&ids, &BLOCKING_STATUSES, start.date(), end.date(), None)
            .await?;

        Ok(rooms
            .into_iter()
            .filter(|room| {
                !reservations
                    .iter()
                    .filter(|r| r.room_id == room.id)
                    .any(|r| occupies_window(&Schedule::of(r), start, end))
            })
            .collect())
    }

    /// Checks whether a room can host `[start, end)` on `date`.
    ///
    /// A blocked room reports `RoomBlocked`. Otherwise the earliest overlapping booking
    /// is reported together with the free slots left on that day.
    pub async fn validate_availability(
        &self,
        room_id: i32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<ConflictReport, AppError> {
        if start >= end {
            return Err(AppError::BadRequest(
                "Start time must be before end time".to_string(),
            ));
        }

        let room = self.load(room_id).await?;
        if !room.available {
            return Ok(ConflictReport {
                conflict: Some(AvailabilityConflict::RoomBlocked),
                suggestions: None,
            });
        }

        let bookings = self.bookings_on(&[room.id], date).await?;
        let Some(clash) = bookings
            .iter()
            .find(|r| windows_overlap(r.start_time, r.end_time, start, end))
        else {
            return Ok(ConflictReport::clear());
        };

        let booked: Vec<TimeSlot> = bookings
            .iter()
            .map(|r| TimeSlot::new(r.start_time, r.end_time))
            .collect();

        Ok(ConflictReport {
            conflict: Some(AvailabilityConflict::ExistingReservation {
                event_name: clash.event_name.clone(),
                reservation_number: clash.number.clone(),
                slot: TimeSlot::new(clash.start_time, clash.end_time),
            }),
            suggestions: Some(Suggestions::from_free_slots(free_slots(&booked))),
        })
    }

    /// Reports for every room whether a free slot of at least an hour remains within
    /// business hours on `date`. Blocked rooms are never available.
    pub async fn daily_availability(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DailyAvailability>, AppError> {
        let rooms = RoomRepository::new(self.db).get_all().await?;
        let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
        let bookings = self.bookings_on(&ids, date).await?;

        let mut booked_by_room: HashMap<i32, Vec<TimeSlot>> = HashMap::new();
        for reservation in &bookings {
            booked_by_room
                .entry(reservation.room_id)
                .or_default()
                .push(TimeSlot::new(reservation.start_time, reservation.end_time));
        }

        Ok(rooms
            .into_iter()
            .map(|room| {
                let booked_slots = booked_by_room.remove(&room.id).unwrap_or_default();
                let is_available = room.available && !free_slots(&booked_slots).is_empty();

                DailyAvailability {
                    room,
                    is_available,
                    booked_slots,
                }
            })
            .collect())
    }

    /// Gets every room with its count of approved events and the last date it was used.
    pub async fn rooms_with_history(&self) -> Result<Vec<RoomWithHistory>, AppError> {
        let rooms = RoomRepository::new(self.db).get_all().await?;
        let stats = ReservationRepository::new(self.db)
            .get_approved_stats()
            .await?;

        Ok(rooms
            .into_iter()
            .map(|room| {
                let (total_events, last_used) = match stats.get(&room.id) {
                    Some((count, last)) => (*count, Some(*last)),
                    None => (0, None),
                };

                RoomWithHistory {
                    room,
                    total_events,
                    last_used,
                }
            })
            .collect())
    }

    /// Gets approved reservations held in a room, newest first.
    ///
    /// # Arguments
    /// - `room_id` - Room whose history is listed
    /// - `limit` - Page size, defaults to [`DEFAULT_HISTORY_LIMIT`]
    /// - `offset` - Entries to skip, defaults to 0
    ///
    /// # Returns
    /// - `Ok(Vec<RoomUsage>)` - Usage entries with requester and requested equipment
    /// - `Err(AppError::NotFound)` - Unknown room
    pub async fn usage_history(
        &self,
        room_id: i32,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<RoomUsage>, AppError> {
        self.load(room_id).await?;

        let repo = ReservationRepository::new(self.db);
        let reservations = repo
            .get_approved_for_room(
                room_id,
                limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
                offset.unwrap_or(0),
            )
            .await?;

        let mut requester_ids: Vec<i32> = reservations.iter().map(|r| r.requester_id).collect();
        requester_ids.sort_unstable();
        requester_ids.dedup();
        let requesters: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(&requester_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut usage = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            let requester = requester_person(reservation.requester_id, &requesters);
            let equipment = repo.get_equipment(reservation.id).await?;
            usage.push(room_usage(reservation, requester, equipment));
        }

        Ok(usage)
    }

    /// Gets one event held in a room with its participants and services.
    ///
    /// # Returns
    /// - `Ok(EventDetail)` - The event
    /// - `Err(AppError::NotFound)` - Unknown reservation, or one the actor may not see
    pub async fn event_detail(
        &self,
        actor: &User,
        reservation_id: i32,
    ) -> Result<EventDetail, AppError> {
        let (reservation, room) = ReservationAccess::new(self.db)
            .visible_by_id(actor, reservation_id)
            .await?;
        let repo = ReservationRepository::new(self.db);

        let requesters: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_id(reservation.requester_id)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let requester = requester_person(reservation.requester_id, &requesters);

        let equipment = repo.get_equipment(reservation.id).await?;
        let services = repo.get_services(reservation.id).await?;
        let participants = ParticipantRepository::new(self.db)
            .get_by_reservation(reservation.id)
            .await?;

        Ok(EventDetail {
            room,
            usage: room_usage(reservation, requester, equipment),
            participants,
            services,
        })
    }

    /// Pending and approved bookings occurring on `date` in the given rooms, by start time.
    async fn bookings_on(
        &self,
        room_ids: &[i32],
        date: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        let mut bookings: Vec<Reservation> = ReservationRepository::new(self.db)
            .get_blocking(room_ids, &BLOCKING_STATUSES, date, date, None)
            .await?
            .into_iter()
            .filter(|r| Schedule::of(r).occurs_on(date))
            .collect();
        bookings.sort_by_key(|r| (r.start_time, r.end_time));

        Ok(bookings)
    }
}

fn requester_person(requester_id: i32, requesters: &HashMap<i32, User>) -> Person {
    match requesters.get(&requester_id) {
        Some(user) => Person::from_user(user),
        None => Person {
            id: requester_id,
            name: String::new(),
            email: String::new(),
        },
    }
}

fn room_usage(
    reservation: Reservation,
    requester: Person,
    equipment: Vec<RequestedEquipmentDetail>,
) -> RoomUsage {
    RoomUsage {
        reservation_id: reservation.id,
        number: reservation.number,
        event_name: reservation.event_name,
        event_type: reservation.event_type,
        event_date: reservation.event_date,
        start_time: reservation.start_time,
        end_time: reservation.end_time,
        expected_attendees: reservation.expected_attendees,
        actual_attendees: reservation.actual_attendees,
        reported_failures: reservation.reported_failures,
        requester,
        equipment,
    }
}
