//! Access token issuance and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{
    model::{auth::ProfileDto, user::UserRoleDto},
    server::{
        error::{auth::AuthError, internal::InternalError},
        model::user::User,
    },
};

/// Value of the `iss` claim on every issued token.
pub const TOKEN_ISSUER: &str = "room-reservations";

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub email: String,
    pub role: UserRoleDto,
    pub first_name: String,
    pub last_name: String,
    pub department_id: Option<i32>,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl Claims {
    /// User ID from the `sub` claim.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("non-numeric subject {}", self.sub)))
    }

    pub fn into_profile_dto(self) -> Result<ProfileDto, AuthError> {
        Ok(ProfileDto {
            id: self.user_id()?,
            email: self.email,
            role: self.role,
            first_name: self.first_name,
            last_name: self.last_name,
            department_id: self.department_id,
            expires_at: self.exp,
        })
    }
}

/// Signs and verifies HS256 access tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl JwtService {
    /// Creates a service signing with `secret`; tokens live `expiration_minutes`.
    pub fn new(secret: &str, expiration_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration: Duration::minutes(expiration_minutes),
        }
    }

    /// Access token lifetime in seconds.
    pub fn expires_in(&self) -> i64 {
        self.expiration.num_seconds()
    }

    /// Issues an access token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(InternalError::TokenEncoding)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.into(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            department_id: user.department_id,
            iat: now.timestamp(),
            exp: (now + self.expiration).timestamp(),
            iss: TOKEN_ISSUER.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(InternalError::TokenEncoding)
    }

    /// Verifies signature, issuer and expiry of a token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::TokenExpired)` - Token is past its `exp`
    /// - `Err(AuthError::InvalidToken)` - Any other validation failure
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }

    /// Token part of an `Authorization: Bearer <token>` header value.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
