//! Durable bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store owns the only durable copy of the credentials. The session
//! manager rebuilds its in-memory state from here at startup, and the request
//! authorizer reads from here before every call.
//!
//! Presence is not validity: callers check `is_token_expired` before trusting
//! a stored token.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use crate::util::clock;
use crate::util::jwt::{self, Claims};
use crate::util::observable::{Observable, Subscription};
use crate::util::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const ROLE_KEY: &str = "role";

pub struct TokenStore {
    storage: Box<dyn KeyValueStore>,
    token: Observable<Option<String>>,
    now: fn() -> f64,
}

impl TokenStore {
    pub fn new(storage: impl KeyValueStore) -> Self {
        let initial = storage.get(TOKEN_KEY);
        Self {
            storage: Box::new(storage),
            token: Observable::new(initial),
            now: clock::now_secs,
        }
    }

    /// Replace the clock used for expiry checks.
    #[must_use]
    pub fn with_clock(mut self, now: fn() -> f64) -> Self {
        self.now = now;
        self
    }

    /// Persist `token` and publish it. Empty tokens are ignored.
    pub fn save_token(&self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.storage.set(TOKEN_KEY, token);
        self.token.set(Some(token.to_owned()));
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Persist a refresh token. Empty tokens are ignored.
    pub fn save_refresh_token(&self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.storage.set(REFRESH_TOKEN_KEY, token);
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    /// Persist the raw role string as received from the backend.
    pub fn save_role(&self, role: &str) {
        self.storage.set(ROLE_KEY, role);
    }

    pub fn role(&self) -> Option<String> {
        self.storage.get(ROLE_KEY)
    }

    /// Remove token, refresh token, and role, then publish `None`.
    pub fn clear_tokens(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
        self.token.set(None);
    }

    pub fn decode_token(&self, token: &str) -> Option<Claims> {
        jwt::decode_claims(token)
    }

    /// Whether `token` (or the stored token when `None`/empty) is unusable.
    pub fn is_token_expired(&self, token: Option<&str>) -> bool {
        let candidate = match token.filter(|t| !t.is_empty()) {
            Some(t) => t.to_owned(),
            None => match self.token() {
                Some(t) if !t.is_empty() => t,
                _ => return true,
            },
        };
        jwt::is_expired_at(&candidate, (self.now)())
    }

    /// The stored token, only if it is present and unexpired.
    pub fn valid_token(&self) -> Option<String> {
        self.token()
            .filter(|t| !t.is_empty() && !self.is_token_expired(Some(t)))
    }

    /// Observe the token stream. The listener receives the current value
    /// immediately.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Option<String>) + Send + Sync + 'static,
    {
        self.token.subscribe(listener)
    }
}
