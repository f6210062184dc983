//! Scheduling rules shared by reservation creation, approval and room availability.
//!
//! A reservation occupies its room on each occurrence date for the half-open window
//! `[start_time, end_time)`. Recurring series are expanded eagerly and bounded by
//! [`MAX_OCCURRENCES`].

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use entity::sea_orm_active_enums::Recurrence;
use rand::Rng;

use crate::server::{
    error::AppError,
    model::{
        reservation::{ConflictingReservation, Reservation},
        room::TimeSlot,
    },
};

/// Upper bound on the number of dates a recurring series may expand to.
pub const MAX_OCCURRENCES: usize = 366;

/// Shortest gap that is offered as a free slot.
pub const MIN_FREE_SLOT_MINUTES: i64 = 60;

pub fn business_open() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub fn business_close() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// When and how often a reservation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub recurrence: Recurrence,
    pub recurrence_end: Option<NaiveDate>,
}

impl Schedule {
    pub fn of(reservation: &Reservation) -> Self {
        Self {
            event_date: reservation.event_date,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            recurrence: reservation.recurrence,
            recurrence_end: reservation.recurrence_end,
        }
    }

    /// Last date the series may occur on.
    pub fn series_end(&self) -> NaiveDate {
        match self.recurrence {
            Recurrence::Single => self.event_date,
            _ => self.recurrence_end.unwrap_or(self.event_date),
        }
    }

    /// Checks the schedule is bookable.
    ///
    /// # Returns
    /// - `Ok(())` - Times are ordered and any recurrence is bounded
    /// - `Err(AppError::BadRequest)` - Start not before end, recurring series without
    ///   an end date, end before the event date, or more than [`MAX_OCCURRENCES`] dates
    pub fn validate(&self) -> Result<(), AppError> {
        if self.start_time >= self.end_time {
            return Err(AppError::BadRequest(
                "Start time must be before end time".to_string(),
            ));
        }

        if self.recurrence == Recurrence::Single {
            return Ok(());
        }

        let Some(end) = self.recurrence_end else {
            return Err(AppError::BadRequest(
                "Recurring reservations require a recurrence end date".to_string(),
            ));
        };
        if end < self.event_date {
            return Err(AppError::BadRequest(
                "Recurrence end must not be before the event date".to_string(),
            ));
        }
        if expand(self, MAX_OCCURRENCES + 1).len() > MAX_OCCURRENCES {
            return Err(AppError::BadRequest(format!(
                "Recurring reservations are limited to {} occurrences",
                MAX_OCCURRENCES
            )));
        }

        Ok(())
    }

    /// Dates the schedule occurs on, in order.
    pub fn occurrences(&self) -> Vec<NaiveDate> {
        expand(self, MAX_OCCURRENCES)
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        date >= self.event_date && date <= self.series_end() && self.occurrences().contains(&date)
    }
}

fn expand(schedule: &Schedule, limit: usize) -> Vec<NaiveDate> {
    let start = schedule.event_date;
    let end = schedule.series_end();

    match schedule.recurrence {
        Recurrence::Single => vec![start],
        Recurrence::Daily => step_days(start, end, 1, limit),
        Recurrence::Weekly => step_days(start, end, 7, limit),
        Recurrence::Monthly => monthly(start, end, limit),
    }
}

fn step_days(start: NaiveDate, end: NaiveDate, step: i64, limit: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;

    while current <= end && dates.len() < limit {
        dates.push(current);
        current += Duration::days(step);
    }

    dates
}

/// Same day of month as `start`; months without that day are skipped.
fn monthly(start: NaiveDate, end: NaiveDate, limit: usize) -> Vec<NaiveDate> {
    let day = start.day();
    let mut dates = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());

    while dates.len() < limit {
        let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
            break;
        };
        if first_of_month > end {
            break;
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            if date > end {
                break;
            }
            dates.push(date);
        }

        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    dates
}

/// Half-open interval overlap; back-to-back windows do not overlap.
pub fn windows_overlap<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && a_end > b_start
}

/// Finds existing reservations that share an occurrence date with `candidate` and whose
/// windows overlap on that date. Each conflicting reservation is reported once, on the
/// first date it collides.
pub fn find_conflicts(
    candidate: &Schedule,
    existing: &[Reservation],
) -> Vec<ConflictingReservation> {
    let candidate_dates = candidate.occurrences();

    existing
        .iter()
        .filter(|other| {
            windows_overlap(
                candidate.start_time,
                candidate.end_time,
                other.start_time,
                other.end_time,
            )
        })
        .filter_map(|other| {
            let schedule = Schedule::of(other);
            let other_dates = schedule.occurrences();
            candidate_dates
                .iter()
                .find(|date| other_dates.binary_search(date).is_ok())
                .map(|date| ConflictingReservation {
                    reservation_number: other.number.clone(),
                    event_name: other.event_name.clone(),
                    event_date: *date,
                    start_time: other.start_time,
                    end_time: other.end_time,
                    status: other.status,
                })
        })
        .collect()
}

/// Whether any occurrence of the schedule overlaps the window `[start, end)`, which
/// may span several days.
pub fn occupies_window(schedule: &Schedule, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    schedule
        .occurrences()
        .into_iter()
        .filter(|date| *date >= start.date() && *date <= end.date())
        .any(|date| {
            windows_overlap(
                date.and_time(schedule.start_time),
                date.and_time(schedule.end_time),
                start,
                end,
            )
        })
}

/// Free gaps of at least [`MIN_FREE_SLOT_MINUTES`] within business hours, given the
/// slots already booked on that day.
///
/// Bookings are clipped to business hours and merged, so overlapping bookings count
/// as one busy block.
pub fn free_slots(booked: &[TimeSlot]) -> Vec<TimeSlot> {
    let open = business_open();
    let close = business_close();
    let min_gap = Duration::minutes(MIN_FREE_SLOT_MINUTES);

    let mut busy: Vec<TimeSlot> = booked
        .iter()
        .map(|slot| TimeSlot::new(slot.start.max(open), slot.end.min(close)))
        .filter(|slot| slot.start < slot.end)
        .collect();
    busy.sort_by_key(|slot| slot.start);

    let mut free = Vec::new();
    let mut cursor = open;
    for slot in busy {
        if slot.start > cursor && slot.start - cursor >= min_gap {
            free.push(TimeSlot::new(cursor, slot.start));
        }
        cursor = cursor.max(slot.end);
    }
    if close > cursor && close - cursor >= min_gap {
        free.push(TimeSlot::new(cursor, close));
    }

    free
}

/// Generates a reservation number of the form `RES-YYYYMMDD-XXXXXX`.
pub fn generate_number(date: NaiveDate) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    const SUFFIX_LENGTH: usize = 6;

    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("RES-{}-{}", date.format("%Y%m%d"), suffix)
}
