/*
[INPUT]:  Token pairs issued by the authentication endpoints
[OUTPUT]: Thread-safe session state shared across callers
[POS]:    Auth layer - token lifecycle storage
[UPDATE]: When adding token metadata or changing storage strategy
*/

use std::sync::{Arc, RwLock};

/// Merchant API credentials.
///
/// Supplied once at session start and transmitted only by `authenticate`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub merchant_id: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(merchant_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

/// Current token pair. The auth token is short-lived; the refresh token
/// outlives it and is only replaced by a full re-authentication.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub auth_token: String,
    pub refresh_token: String,
}

/// Thread-safe session storage.
///
/// Only `AuthManager` writes here; the pair is replaced atomically so a
/// reader never observes a token from one issue paired with the other's.
#[derive(Debug, Clone)]
pub struct SessionStore {
    data: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the stored token pair
    pub fn set_tokens(&self, auth_token: impl Into<String>, refresh_token: impl Into<String>) {
        let session = Session {
            auth_token: auth_token.into(),
            refresh_token: refresh_token.into(),
        };
        let mut guard = self.data.write().unwrap();
        *guard = Some(session);
    }

    /// Current auth token if a session is held
    pub fn auth_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|session| session.auth_token.clone())
    }

    /// Current refresh token if a session is held
    pub fn refresh_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|session| session.refresh_token.clone())
    }

    /// Snapshot of the whole session
    pub fn session(&self) -> Option<Session> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Drop the stored session
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
