//! In-memory refresh token store.
//!
//! Each user holds at most one refresh token. Using a token rotates it, so a token can
//! be exchanged only once. Tokens are lost on restart, which forces a fresh login.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

/// Length of generated refresh tokens.
pub const REFRESH_TOKEN_LENGTH: usize = 64;

#[derive(Clone)]
struct RefreshToken {
    token: String,
    expires_at: Instant,
}

impl RefreshToken {
    fn new(token: String, ttl: Duration) -> Self {
        Self {
            token,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.token == input
    }
}

/// Refresh tokens keyed by user ID.
#[derive(Clone)]
pub struct RefreshTokenStore {
    tokens: Arc<RwLock<HashMap<i32, RefreshToken>>>,
    ttl: Duration,
}

impl RefreshTokenStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Issues a new refresh token for a user, replacing any previous one.
    pub async fn issue(&self, user_id: i32) -> String {
        let token = Self::generate_random_token();
        self.tokens
            .write()
            .await
            .insert(user_id, RefreshToken::new(token.clone(), self.ttl));
        token
    }

    /// Exchanges a user's refresh token for a new one.
    ///
    /// # Returns
    /// - `Some(String)` - The replacement token; the presented one is now invalid
    /// - `None` - No token for the user, token mismatch, or token expired. Expired
    ///   tokens are removed.
    pub async fn rotate(&self, user_id: i32, input: &str) -> Option<String> {
        let mut tokens = self.tokens.write().await;

        let stored = tokens.get(&user_id)?;
        if stored.is_expired() {
            tokens.remove(&user_id);
            return None;
        }
        if !stored.matches(input) {
            return None;
        }

        let token = Self::generate_random_token();
        tokens.insert(user_id, RefreshToken::new(token.clone(), self.ttl));
        Some(token)
    }

    /// Removes a user's refresh token.
    ///
    /// # Returns
    /// - `true` - A token was revoked
    /// - `false` - The user had no token
    pub async fn revoke(&self, user_id: i32) -> bool {
        self.tokens.write().await.remove(&user_id).is_some()
    }

    fn generate_random_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

        let mut rng = rand::rng();
        (0..REFRESH_TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}
