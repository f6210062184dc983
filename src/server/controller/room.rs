use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        room::{
            AvailableRoomsDto, ConflictReportDto, CreateRoomDto, DailyAvailabilityDto,
            EquipmentItemDto, EventDetailDto, InventoryDto, RoomDto, RoomUsageDto,
            RoomWithHistoryDto, UpdateEquipmentDto, UpdateInventoryDto, ValidateAvailabilityDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        model::room::{CreateRoomParams, InventoryUpdate, UpdateEquipmentParams},
        service::room::RoomService,
        state::AppState,
        util::time::parse_hh_mm,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

#[derive(Deserialize)]
pub struct DailyAvailabilityParams {
    pub date: NaiveDate,
}

#[derive(Deserialize)]
pub struct HistoryPaginationParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// List every room by name.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let rooms: Vec<RoomDto> = RoomService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(rooms)))
}

/// Create a room.
///
/// # Access Control
/// - `ManageRooms` - Admins and technicians
///
/// # Returns
/// - `201 Created` - The created room
/// - `400 Bad Request` - Invalid capacities or room data
/// - `403 Forbidden` - Caller cannot manage rooms
/// - `404 Not Found` - Unknown department or technician
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage rooms", body = ErrorDto),
        (status = 404, description = "Department or technician not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_room(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManageRooms])
        .await?;

    payload.validate()?;

    let room = RoomService::new(&state.db)
        .create(CreateRoomParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// Find rooms with no pending or approved booking during a window.
///
/// The window may span several days. Blocked rooms are never returned.
#[utoipa::path(
    post,
    path = "/api/rooms/available",
    tag = ROOM_TAG,
    request_body = AvailableRoomsDto,
    responses(
        (status = 200, description = "Free rooms", body = Vec<RoomDto>),
        (status = 400, description = "Start is not before end", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<AvailableRoomsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let rooms: Vec<RoomDto> = RoomService::new(&state.db)
        .available_in_window(payload.start, payload.end, &payload.room_ids)
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(rooms)))
}

/// Check whether a room can host a time slot on a date.
///
/// A conflict is reported in the body rather than as an error status, together
/// with free slots of at least an hour within business hours on that date.
#[utoipa::path(
    post,
    path = "/api/rooms/validate-availability",
    tag = ROOM_TAG,
    request_body = ValidateAvailabilityDto,
    responses(
        (status = 200, description = "Conflict report", body = ConflictReportDto),
        (status = 400, description = "Invalid times", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn validate_availability(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<ValidateAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    payload.validate()?;

    let report = RoomService::new(&state.db)
        .validate_availability(
            payload.room_id,
            payload.date,
            parse_hh_mm(&payload.start_time)?,
            parse_hh_mm(&payload.end_time)?,
        )
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Get every room's availability and booked slots on a date.
#[utoipa::path(
    get,
    path = "/api/rooms/daily-availability",
    tag = ROOM_TAG,
    params(
        ("date" = NaiveDate, Query, description = "Date to check (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Availability per room", body = Vec<DailyAvailabilityDto>),
        (status = 400, description = "Missing or invalid date", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_daily_availability(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Query(params): Query<DailyAvailabilityParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let availability: Vec<DailyAvailabilityDto> = RoomService::new(&state.db)
        .daily_availability(params.date)
        .await?
        .into_iter()
        .map(|a| a.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(availability)))
}

/// Get every room with its number of approved events and last use.
#[utoipa::path(
    get,
    path = "/api/rooms/history",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Rooms with usage summary", body = Vec<RoomWithHistoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rooms_with_history(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let rooms: Vec<RoomWithHistoryDto> = RoomService::new(&state.db)
        .rooms_with_history()
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(rooms)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_room(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let room = RoomService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Get approved events held in a room, newest first.
///
/// # Arguments
/// - `params` - `limit` (default 50) and `offset` (default 0)
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/history",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID"),
        ("limit" = Option<u64>, Query, description = "Page size (default: 50)"),
        ("offset" = Option<u64>, Query, description = "Entries to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Usage history", body = Vec<RoomUsageDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_room_usage_history(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
    Query(params): Query<HistoryPaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let usage: Vec<RoomUsageDto> = RoomService::new(&state.db)
        .usage_history(id, params.limit, params.offset)
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(usage)))
}

/// Get one event with its room, participants and services.
///
/// Events the caller may not see answer 404.
#[utoipa::path(
    get,
    path = "/api/rooms/events/{reservation_id}",
    tag = ROOM_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Event detail", body = EventDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_event_detail(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let detail = RoomService::new(&state.db)
        .event_detail(&user, reservation_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}/equipment",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Equipment in the room", body = Vec<EquipmentItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_room_equipment(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let equipment: Vec<EquipmentItemDto> = RoomService::new(&state.db)
        .list_equipment(id)
        .await?
        .into_iter()
        .map(|e| e.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(equipment)))
}

/// Update quantity, status or notes of one equipment row.
///
/// # Access Control
/// - `ManageRooms` - Admins and technicians
#[utoipa::path(
    put,
    path = "/api/rooms/equipment/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room equipment ID")
    ),
    request_body = UpdateEquipmentDto,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentItemDto),
        (status = 400, description = "Negative quantity", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage rooms", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManageRooms])
        .await?;

    payload.validate()?;

    let equipment = RoomService::new(&state.db)
        .update_equipment(id, UpdateEquipmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(equipment.into_dto())))
}

/// Get the standard inventory of a room with counts per equipment status.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/inventory",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room inventory", body = InventoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let inventory = RoomService::new(&state.db).inventory(id).await?;

    Ok((StatusCode::OK, Json(inventory.into_dto())))
}

/// Set quantities and statuses of standard inventory items in a room.
///
/// # Access Control
/// - `ManageRooms` - Admins and technicians
///
/// # Returns
/// - `200 OK` - The room's inventory after the update
/// - `400 Bad Request` - Unknown item, negative quantity or room mismatch
/// - `403 Forbidden` - Caller cannot manage rooms
/// - `404 Not Found` - Unknown room
#[utoipa::path(
    put,
    path = "/api/rooms/{id}/inventory",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = UpdateInventoryDto,
    responses(
        (status = 200, description = "Inventory updated", body = InventoryDto),
        (status = 400, description = "Invalid inventory update", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage rooms", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInventoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManageRooms])
        .await?;

    payload.validate()?;

    let updates = payload
        .items
        .into_iter()
        .map(InventoryUpdate::from_dto)
        .collect();

    let inventory = RoomService::new(&state.db)
        .update_inventory(id, payload.room_id, updates)
        .await?;

    Ok((StatusCode::OK, Json(inventory.into_dto())))
}
