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
        api::{ConflictErrorDto, ErrorDto},
        reservation::{
            ApprovalHistoryEntryDto, ApprovalRequestDto, AttendanceDto, CreateReservationDto,
            PendingReservationDto, ReservationDetailDto, ReservationDto, ReservationHistoryDto,
            ReservationSummaryDto, UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::reservation::{ApprovalParams, CreateReservationParams, UpdateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

#[derive(Deserialize)]
pub struct DateRangeParams {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Request a room reservation.
///
/// Validates the schedule, the room and the requested equipment, rejects any overlap
/// with pending or approved bookings in the same room, stores the reservation as
/// pending and routes it to the room's responsible technician. The requester and
/// the technician are notified.
///
/// # Access Control
/// - Any authenticated user may book for themselves
/// - `Admin` - Admins may book on behalf of another user via `requester_id`
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `claims` - Caller's access token claims
/// - `payload` - Reservation request
///
/// # Returns
/// - `201 Created` - The pending reservation
/// - `400 Bad Request` - Invalid schedule, blocked room, capacity exceeded or unknown equipment
/// - `403 Forbidden` - Booking for another user without admin role
/// - `404 Not Found` - Unknown room or requester
/// - `409 Conflict` - Duplicate number or overlapping booking
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to book for this requester", body = ErrorDto),
        (status = 404, description = "Room or requester not found", body = ErrorDto),
        (status = 409, description = "Room already booked for the requested time", body = ConflictErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    payload.validate()?;

    let requester_id = payload.requester_id.unwrap_or(user.id);
    let params = CreateReservationParams::from_dto(requester_id, payload)?;

    let reservation = ReservationService::new(&state.db, state.notifier.as_ref())
        .create(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List reservations, optionally within an inclusive event date range.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    params(
        ("date_from" = Option<NaiveDate>, Query, description = "First event date (inclusive)"),
        ("date_to" = Option<NaiveDate>, Query, description = "Last event date (inclusive)")
    ),
    responses(
        (status = 200, description = "Reservations by date and start time", body = Vec<ReservationDto>),
        (status = 400, description = "date_from after date_to", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Query(range): Query<DateRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let reservations: Vec<ReservationDto> =
        ReservationService::new(&state.db, state.notifier.as_ref())
            .list(range.date_from, range.date_to)
            .await?
            .into_iter()
            .map(|r| r.into_dto())
            .collect();

    Ok((StatusCode::OK, Json(reservations)))
}

/// Get pending reservations the caller may approve or reject.
///
/// Technicians see reservations in rooms they are responsible for or that are
/// assigned to them, department heads see their department's rooms, admins see all.
#[utoipa::path(
    get,
    path = "/api/reservations/pending",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Pending reservations awaiting the caller", body = Vec<PendingReservationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_pending_reservations(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let pending: Vec<PendingReservationDto> =
        ReservationService::new(&state.db, state.notifier.as_ref())
            .pending_for_approver(&user)
            .await?
            .into_iter()
            .map(|p| p.into_dto())
            .collect();

    Ok((StatusCode::OK, Json(pending)))
}

/// Approve or reject a pending reservation.
///
/// # Access Control
/// - `Admin`, the room's responsible technician, the assigned technician or the
///   head of the room's department
///
/// # Returns
/// - `200 OK` - The decided reservation
/// - `400 Bad Request` - Already processed, or rejection without reason
/// - `403 Forbidden` - Caller may not decide on this reservation
/// - `404 Not Found` - Unknown reservation
/// - `409 Conflict` - Approval would overlap an approved booking
#[utoipa::path(
    post,
    path = "/api/reservations/approval",
    tag = RESERVATION_TAG,
    request_body = ApprovalRequestDto,
    responses(
        (status = 200, description = "Decision recorded", body = ReservationDto),
        (status = 400, description = "Reservation already processed or reason missing", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an approver for this reservation", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Room already booked for the requested time", body = ConflictErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn process_approval(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<ApprovalRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    payload.validate()?;

    let reservation = ReservationService::new(&state.db, state.notifier.as_ref())
        .process_approval(&user, ApprovalParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Get a user's reservations, newest first.
///
/// # Access Control
/// - Users may read their own history
/// - `Admin` - Admins may read anyone's history
#[utoipa::path(
    get,
    path = "/api/reservations/history/{user_id}",
    tag = RESERVATION_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Reservation history", body = ReservationHistoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to read this history", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reservation_history(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let reservations: Vec<ReservationSummaryDto> =
        ReservationService::new(&state.db, state.notifier.as_ref())
            .history_for_user(&user, user_id)
            .await?
            .into_iter()
            .map(|r| r.into_dto())
            .collect();

    let message = reservations
        .is_empty()
        .then(|| "You have no previous reservations".to_string());

    Ok((
        StatusCode::OK,
        Json(ReservationHistoryDto {
            message,
            reservations,
        }),
    ))
}

/// Get a reservation by its number.
#[utoipa::path(
    get,
    path = "/api/reservations/number/{number}",
    tag = RESERVATION_TAG,
    params(
        ("number" = String, Path, description = "Reservation number")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reservation_by_number(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, state.notifier.as_ref())
        .get_by_number(&user, &number)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Partially update a reservation.
///
/// Only pending reservations may change room, date, times, recurrence or
/// attendees; those changes are checked for conflicts again. Status may only be
/// set to cancelled.
///
/// # Access Control
/// - The requester or an `Admin`
///
/// # Returns
/// - `200 OK` - The updated reservation
/// - `400 Bad Request` - Change not allowed in the reservation's status
/// - `403 Forbidden` - Caller is neither requester nor admin
/// - `404 Not Found` - Unknown reservation or room
/// - `409 Conflict` - New schedule overlaps another booking
#[utoipa::path(
    patch,
    path = "/api/reservations/number/{number}",
    tag = RESERVATION_TAG,
    params(
        ("number" = String, Path, description = "Reservation number")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the requester", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Room already booked for the requested time", body = ConflictErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(number): Path<String>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    payload.validate()?;

    let reservation = ReservationService::new(&state.db, state.notifier.as_ref())
        .update(&user, &number, UpdateReservationParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Cancel a pending or approved reservation.
///
/// # Access Control
/// - The requester or an `Admin`
#[utoipa::path(
    post,
    path = "/api/reservations/number/{number}/cancel",
    tag = RESERVATION_TAG,
    params(
        ("number" = String, Path, description = "Reservation number")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = ReservationDto),
        (status = 400, description = "Reservation already rejected or cancelled", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the requester", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, state.notifier.as_ref())
        .cancel(&user, &number)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Get the approval history of a reservation, oldest first.
#[utoipa::path(
    get,
    path = "/api/reservations/number/{number}/history",
    tag = RESERVATION_TAG,
    params(
        ("number" = String, Path, description = "Reservation number")
    ),
    responses(
        (status = 200, description = "History entries", body = Vec<ApprovalHistoryEntryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_approval_history(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let history: Vec<ApprovalHistoryEntryDto> =
        ReservationService::new(&state.db, state.notifier.as_ref())
            .approval_history(&user, &number)
            .await?
            .into_iter()
            .map(|h| h.into_dto())
            .collect();

    Ok((StatusCode::OK, Json(history)))
}

/// Get a reservation with requester, department, room, equipment, services and
/// participants.
///
/// Reservations the caller may not see answer 404.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation detail", body = ReservationDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reservation_detail(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let detail = ReservationService::new(&state.db, state.notifier.as_ref())
        .detail(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get expected and actual attendance of a reservation.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}/attendance",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Attendance figures", body = AttendanceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let attendance = ReservationService::new(&state.db, state.notifier.as_ref())
        .attendance(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}
