use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, ProfileDto, RefreshDto, TokenDto},
    },
    server::{
        error::AppError, middleware::auth::AuthUser, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Verifies the credentials and issues an access token together with a refresh
/// token. The email is matched ignoring case.
///
/// # Arguments
/// - `state` - Application state containing the database and token services
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Access and refresh tokens with the user
/// - `400 Bad Request` - Malformed email or empty password
/// - `401 Unauthorized` - Unknown email, wrong password or inactive user
/// - `429 Too Many Requests` - Login rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Invalid credentials format", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tokens = AuthService::new(&state.db, &state.jwt, &state.refresh_tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange a refresh token for a new token pair.
///
/// The presented refresh token is consumed; the response carries its replacement.
///
/// # Returns
/// - `200 OK` - New access and refresh tokens
/// - `401 Unauthorized` - Unknown, reused or expired refresh token, or inactive user
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = TokenDto),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tokens = AuthService::new(&state.db, &state.jwt, &state.refresh_tokens)
        .refresh(payload.user_id, &payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Log out by revoking the caller's refresh token.
///
/// The access token stays valid until it expires.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt, &state.refresh_tokens)
        .logout(claims.user_id()?)
        .await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the identity carried by the presented access token.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token identity", body = ProfileDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn profile(AuthUser(claims): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(claims.into_profile_dto()?)))
}
