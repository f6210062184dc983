use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign an access token
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode access token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// Rate limiter configuration rejected at startup
    #[error("Invalid rate limiter configuration: {0}")]
    RateLimiterConfig(String),

    /// A unique reservation number could not be generated
    #[error("Failed to generate a unique reservation number after {attempts} attempts")]
    ReservationNumberExhausted {
        /// Number of generated candidates that already existed
        attempts: usize,
    },

    /// A notification could not be delivered
    ///
    /// Logged by the caller; never surfaced to clients. Only notifiers that can fail
    /// build it, and the log notifier cannot.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("Failed to deliver notification to {recipient}: {reason}")]
    Notification {
        /// Recipient email address
        recipient: String,
        /// Delivery failure description
        reason: String,
    },
}
