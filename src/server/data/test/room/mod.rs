use crate::server::{data::room::RoomRepository, model::room::CreateRoomParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_bookable;
mod get_ids;
