//! Password hashing with bcrypt.

use crate::server::error::AppError;

/// Hashes a password with the given bcrypt cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Checks a password against a stored bcrypt hash.
///
/// A stored value that is not a bcrypt hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Stored password hash could not be verified: {}", e);
            false
        }
    }
}
