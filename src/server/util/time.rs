use chrono::NaiveTime;

use crate::server::error::AppError;

/// Parses a 24-hour `HH:MM` clock time.
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed time with zero seconds
/// - `Err(AppError::BadRequest)` - Value is not a valid `HH:MM` time
pub fn parse_hh_mm(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value)))
}

/// Formats a time as `HH:MM`, dropping seconds.
pub fn format_hh_mm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
