//! Authentication results.

use crate::{model::auth::TokenDto, server::model::user::User};

/// Token pair handed out on login and refresh.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires
    pub expires_in: i64,
    pub user: User,
}

impl AuthTokens {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.expires_in,
            user: self.user.into_dto(),
        }
    }
}
