use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{
        CreateReservationParams, NewHistoryEntry, NewReservation, PendingScope,
        RequestedEquipment, RequestedService, UpdateReservationParams,
    },
};
use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::{ApprovalAction, EventType, Recurrence, ReservationStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::reservation::ReservationFactory};

mod create;
mod get_all;
mod get_approved;
mod get_blocking;
mod get_pending;
mod set_status;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn new_reservation(requester_id: i32, room_id: i32, number: &str) -> NewReservation {
    NewReservation {
        number: number.to_string(),
        assigned_technician_id: None,
        params: CreateReservationParams {
            number: None,
            requester_id,
            room_id,
            event_name: "Quarterly review".to_string(),
            event_type: EventType::Meeting,
            event_date: date(2030, 3, 4),
            start_time: time(9, 0),
            end_time: time(10, 30),
            expected_attendees: 8,
            recurrence: Recurrence::Single,
            recurrence_end: None,
            notes: None,
            meeting_link: None,
            equipment: Vec::new(),
            services: Vec::new(),
        },
    }
}

fn history(
    reservation_id: i32,
    actor_id: i32,
    from: ReservationStatus,
    to: ReservationStatus,
    action: ApprovalAction,
) -> NewHistoryEntry {
    NewHistoryEntry {
        reservation_id,
        actor_id,
        action,
        previous_status: Some(from),
        new_status: to,
        reason: None,
    }
}
