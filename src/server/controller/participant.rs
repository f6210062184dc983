use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        participant::{CreateParticipantDto, ParticipantDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::participant::CreateParticipantParams,
        service::participant::ParticipantService,
        state::AppState,
    },
};

/// Tag for grouping participant endpoints in OpenAPI documentation
pub static PARTICIPANT_TAG: &str = "participant";

/// Add an additional participant to a reservation.
///
/// # Access Control
/// - The requester, or a user who may decide on the reservation
///
/// Participants of an approved reservation are invited right away; otherwise they
/// are invited when the reservation is approved.
///
/// # Returns
/// - `201 Created` - The participant
/// - `400 Bad Request` - Invalid name or email
/// - `404 Not Found` - Unknown reservation, or one the caller may not see
/// - `409 Conflict` - Email already on the reservation
#[utoipa::path(
    post,
    path = "/api/participants",
    tag = PARTICIPANT_TAG,
    request_body = CreateParticipantDto,
    responses(
        (status = 201, description = "Participant added", body = ParticipantDto),
        (status = 400, description = "Invalid participant data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Participant already added", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_participant(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateParticipantDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    payload.validate()?;

    let participant = ParticipantService::new(&state.db, state.notifier.as_ref())
        .add(&user, CreateParticipantParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(participant.into_dto())))
}

/// List the additional participants of a reservation.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}/participants",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Participants", body = Vec<ParticipantDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_participants(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let participants: Vec<ParticipantDto> =
        ParticipantService::new(&state.db, state.notifier.as_ref())
            .list(&user, reservation_id)
            .await?
            .into_iter()
            .map(|p| p.into_dto())
            .collect();

    Ok((StatusCode::OK, Json(participants)))
}

/// Remove an additional participant.
#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    tag = PARTICIPANT_TAG,
    params(
        ("id" = i32, Path, description = "Participant ID")
    ),
    responses(
        (status = 204, description = "Participant removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_participant(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    ParticipantService::new(&state.db, state.notifier.as_ref())
        .remove(&user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
