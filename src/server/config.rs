use crate::server::error::{config::ConfigError, AppError};

/// Minimum length of the JWT signing secret in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 60;
const DEFAULT_REFRESH_TOKEN_TTL_HOURS: u64 = 168;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3001";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    pub refresh_token_ttl_hours: u64,
    pub bcrypt_cost: u32,

    pub bind_address: String,
    pub cors_origin: String,

    /// Credentials for the admin account created on first start
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: parse_jwt_secret(required("JWT_SECRET")?)?,
            jwt_expiration_minutes: parse_or(
                "JWT_EXPIRATION_MINUTES",
                optional("JWT_EXPIRATION_MINUTES"),
                DEFAULT_JWT_EXPIRATION_MINUTES,
            )?,
            refresh_token_ttl_hours: parse_or(
                "REFRESH_TOKEN_TTL_HOURS",
                optional("REFRESH_TOKEN_TTL_HOURS"),
                DEFAULT_REFRESH_TOKEN_TTL_HOURS,
            )?,
            bcrypt_cost: parse_or("BCRYPT_COST", optional("BCRYPT_COST"), bcrypt::DEFAULT_COST)?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: optional("CORS_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_jwt_secret(secret: String) -> Result<String, ConfigError> {
    if secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(ConfigError::InvalidValue {
            name: "JWT_SECRET".to_string(),
            reason: format!("must be at least {} bytes", MIN_JWT_SECRET_LENGTH),
        });
    }

    Ok(secret)
}

fn parse_or<T: std::str::FromStr>(
    name: &str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("'{}' is not a valid number", raw),
        }),
    }
}
