//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT service for issuing and verifying access tokens
//! - Refresh token store for token rotation
//! - Notifier used to tell users about reservation changes
//! - Bcrypt cost used when hashing new passwords

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{
    auth::{jwt::JwtService, refresh::RefreshTokenStore},
    notification::Notifier,
};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned for each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtService` holds keys derived once from the secret
/// - `RefreshTokenStore` shares its map through an `Arc`
/// - `Arc<dyn Notifier>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and validates access tokens.
    pub jwt: JwtService,

    /// In-memory refresh tokens, one per user.
    ///
    /// Tokens are lost when the server restarts, which forces users to log in again.
    pub refresh_tokens: RefreshTokenStore,

    /// Delivery channel for reservation notifications.
    pub notifier: Arc<dyn Notifier>,

    /// Bcrypt work factor for newly hashed passwords.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Access token service
    /// - `refresh_tokens` - Refresh token store
    /// - `notifier` - Notification delivery
    /// - `bcrypt_cost` - Bcrypt work factor
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtService,
        refresh_tokens: RefreshTokenStore,
        notifier: Arc<dyn Notifier>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db,
            jwt,
            refresh_tokens,
            notifier,
            bcrypt_cost,
        }
    }
}
