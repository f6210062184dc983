use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::user::{UserDto, UserRoleDto};

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Seconds until the access token expires
    pub expires_in: i64,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct RefreshDto {
    pub user_id: i32,
    #[validate(length(equal = 64))]
    pub refresh_token: String,
}

/// Identity carried by the presented access token.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub email: String,
    pub role: UserRoleDto,
    pub first_name: String,
    pub last_name: String,
    pub department_id: Option<i32>,
    /// Unix timestamp of access token expiry
    pub expires_at: i64,
}
