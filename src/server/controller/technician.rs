use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        technician::{CreateTechnicianDto, TechnicianDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        service::technician::TechnicianService,
        state::AppState,
    },
};

/// Tag for grouping technician endpoints in OpenAPI documentation
pub static TECHNICIAN_TAG: &str = "technician";

/// Promote a user to technician.
///
/// Creates the technician profile and changes the user's role to technician.
/// Admins keep their admin role.
///
/// # Access Control
/// - `Admin` - Only admins can promote users
///
/// # Returns
/// - `201 Created` - The technician profile
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown user
/// - `409 Conflict` - User already is a technician
#[utoipa::path(
    post,
    path = "/api/technicians",
    tag = TECHNICIAN_TAG,
    request_body = CreateTechnicianDto,
    responses(
        (status = 201, description = "Technician created", body = TechnicianDto),
        (status = 400, description = "Invalid technician data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User already is a technician", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_technician(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateTechnicianDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let technician = TechnicianService::new(&state.db)
        .promote(payload.user_id, payload.specialty)
        .await?;

    Ok((StatusCode::CREATED, Json(technician.into_dto())))
}

/// List technicians.
#[utoipa::path(
    get,
    path = "/api/technicians",
    tag = TECHNICIAN_TAG,
    responses(
        (status = 200, description = "All technicians", body = Vec<TechnicianDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_technicians(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let technicians: Vec<TechnicianDto> = TechnicianService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(technicians)))
}
