use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        department::{CreateDepartmentDto, DepartmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        service::department::DepartmentService,
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Create a department.
///
/// # Access Control
/// - `Admin` - Only admins can create departments
///
/// # Returns
/// - `201 Created` - The created department
/// - `400 Bad Request` - Empty or overlong name
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - A department with that name exists
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Department already exists", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_department(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let department = DepartmentService::new(&state.db)
        .create(&payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// List departments by name.
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "All departments", body = Vec<DepartmentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_departments(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let departments: Vec<DepartmentDto> = DepartmentService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(|d| d.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(departments)))
}
