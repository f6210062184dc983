use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        model::user::CreateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user account.
///
/// The password is stored as a bcrypt hash using the configured cost.
///
/// # Access Control
/// - `ManageUsers` - Only admins can create users
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid user data
/// - `403 Forbidden` - Caller cannot manage users
/// - `404 Not Found` - Unknown department
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage users", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManageUsers])
        .await?;

    payload.validate()?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload), state.bcrypt_cost)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List every user account.
///
/// # Access Control
/// - `ManageUsers` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage users", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManageUsers])
        .await?;

    let users: Vec<UserDto> = UserService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}
