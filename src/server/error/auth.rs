use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Missing authorization token")]
    MissingToken,

    /// Bearer token is malformed, has a bad signature or unexpected claims.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Bearer token is past its `exp` claim.
    #[error("Token expired")]
    TokenExpired,

    /// Login attempted with an email that has no account.
    #[error("Email not found")]
    EmailNotFound,

    /// Login attempted with the wrong password.
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Account exists but has been deactivated.
    #[error("User {0} is inactive")]
    UserInactive(i32),

    /// Token subject no longer exists in the database.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// Refresh token unknown, already rotated, or expired.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Authenticated user lacks the permission required by the endpoint.
    ///
    /// The second field is logged but never returned to the client.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - Token and credential failures → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with a generic message
///
/// All errors are logged at debug level; client-facing messages never include
/// internal reasons.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::EmailNotFound | Self::IncorrectPassword => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::UserInactive(_) => (
                StatusCode::UNAUTHORIZED,
                "User account is inactive".to_string(),
            ),
            Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "User not found".to_string())
            }
            Self::InvalidRefreshToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied".to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
