use axum::{extract::FromRequestParts, http::request::Parts};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::jwt::{Claims, JwtService},
    state::AppState,
};

/// Claims of the bearer token presented with the request.
///
/// Extracting this rejects the request with 401 when the `Authorization` header is
/// missing, malformed, carries an invalid token or an expired one. The claims are not
/// checked against the database; use [`AuthGuard`] for that.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let Some(header) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        else {
            tracing::debug!(uri = %parts.uri, "Request without authorization header");
            return Err(AuthError::MissingToken.into());
        };

        let token = JwtService::extract_from_header(header).ok_or_else(|| {
            AuthError::InvalidToken("malformed authorization header".to_string())
        })?;

        let claims = state.jwt.validate(token).inspect_err(|e| {
            tracing::warn!(uri = %parts.uri, "Rejected access token: {}", e);
        })?;

        let user = AuthUser(claims);
        parts.extensions.insert(user.clone());

        Ok(user)
    }
}

pub enum Permission {
    Admin,
    /// Admins and technicians
    ManageRooms,
    ManageUsers,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    claims: &'a Claims,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, claims: &'a Claims) -> Self {
        Self { db, claims }
    }

    /// Loads the token's user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - User exists, is active and holds all permissions
    /// - `Err(AuthError::UserNotInDatabase)` - Token refers to a deleted user
    /// - `Err(AuthError::UserInactive)` - User was deactivated after the token was issued
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.active {
            return Err(AuthError::UserInactive(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin | Permission::ManageUsers => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an action that requires admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::ManageRooms => {
                    if !matches!(user.role, UserRole::Admin | UserRole::Technician) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to manage rooms without technician or admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
