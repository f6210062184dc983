use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::reservation::ReservationStatusDto;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// A booking that overlaps the requested time window.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConflictDto {
    pub reservation_number: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: ReservationStatusDto,
}

/// 409 body returned when a reservation cannot be placed.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ConflictErrorDto {
    pub error: String,
    pub conflicts: Vec<ConflictDto>,
}
