use entity::sea_orm_active_enums::{EquipmentStatus, ReservationStatus};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{
        reservation::ReservationFactory, room::RoomFactory,
        room_equipment::RoomEquipmentFactory,
    },
};

use super::{actor, date, time};
use crate::server::{
    error::AppError,
    model::room::{
        AvailabilityConflict, CreateRoomParams, InventoryUpdate, StatusCounts, TimeSlot,
        UpdateEquipmentParams,
    },
    service::room::RoomService,
};

mod availability;
mod create;
mod inventory;
