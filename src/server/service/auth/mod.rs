//! Authentication service: login, token refresh and logout.

pub mod jwt;
pub mod password;
pub mod refresh;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{auth::AuthTokens, user::User},
};

use self::{jwt::JwtService, password::verify_password, refresh::RefreshTokenStore};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    refresh_tokens: &'a RefreshTokenStore,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        jwt: &'a JwtService,
        refresh_tokens: &'a RefreshTokenStore,
    ) -> Self {
        Self {
            db,
            jwt,
            refresh_tokens,
        }
    }

    /// Authenticates a user by email and password.
    ///
    /// The email lookup is case-insensitive. On success a new refresh token replaces
    /// any the user held before.
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - Access and refresh token for the user
    /// - `Err(AuthError::EmailNotFound)` - No account with that email
    /// - `Err(AuthError::UserInactive)` - Account deactivated
    /// - `Err(AuthError::IncorrectPassword)` - Password does not match
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, AppError> {
        let Some(credentials) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::EmailNotFound.into());
        };

        if !credentials.user.active {
            return Err(AuthError::UserInactive(credentials.user.id).into());
        }
        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::IncorrectPassword.into());
        }

        tracing::info!(user_id = credentials.user.id, "User logged in");

        self.issue_tokens(credentials.user).await
    }

    /// Exchanges a refresh token for a new token pair.
    ///
    /// The presented refresh token is consumed. Tokens of users that no longer exist or
    /// were deactivated are revoked.
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - New access token and rotated refresh token
    /// - `Err(AuthError::InvalidRefreshToken)` - Unknown, rotated or expired token
    /// - `Err(AuthError::UserNotInDatabase)` / `Err(AuthError::UserInactive)` - Account gone
    pub async fn refresh(&self, user_id: i32, token: &str) -> Result<AuthTokens, AppError> {
        let Some(refresh_token) = self.refresh_tokens.rotate(user_id, token).await else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        let user = match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(user) if user.active => user,
            Some(_) => {
                self.refresh_tokens.revoke(user_id).await;
                return Err(AuthError::UserInactive(user_id).into());
            }
            None => {
                self.refresh_tokens.revoke(user_id).await;
                return Err(AuthError::UserNotInDatabase(user_id).into());
            }
        };

        Ok(AuthTokens {
            access_token: self.jwt.issue(&user)?,
            refresh_token,
            expires_in: self.jwt.expires_in(),
            user,
        })
    }

    /// Revokes the user's refresh token. Access tokens stay valid until they expire.
    pub async fn logout(&self, user_id: i32) {
        if self.refresh_tokens.revoke(user_id).await {
            tracing::info!(user_id, "User logged out");
        }
    }

    async fn issue_tokens(&self, user: User) -> Result<AuthTokens, AppError> {
        let access_token = self.jwt.issue(&user)?;
        let refresh_token = self.refresh_tokens.issue(user.id).await;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            expires_in: self.jwt.expires_in(),
            user,
        })
    }
}
