use entity::sea_orm_active_enums::{ApprovalAction, Recurrence, ReservationStatus, UserRole};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{reservation::ReservationFactory, room::RoomFactory, user::UserFactory},
};

use super::{actor, date, reservation_params, time};
use crate::server::{
    error::{auth::AuthError, AppError},
    model::reservation::{
        ApprovalDecision, ApprovalParams, RequestedEquipment, UpdateReservationParams,
    },
    service::{
        notification::{
            testing::{FailingNotifier, RecordingNotifier},
            NotificationKind,
        },
        reservation::ReservationService,
    },
};

mod cancel;
mod pending;
mod update;
