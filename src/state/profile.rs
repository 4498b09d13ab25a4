//! Cached profile of the signed-in user.
//!
//! The login response only carries a role, so the layout fetches
//! `/users/me` once for the username and email it shows in the header. The
//! cache follows the token stream: when the token is cleared the profile is
//! dropped with it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::net::types::User;
use crate::state::token::TokenStore;
use crate::util::observable::{Observable, Subscription};

pub struct ProfileState {
    user: Observable<Option<User>>,
    _on_token: Subscription,
}

impl ProfileState {
    pub fn new(tokens: &TokenStore) -> Self {
        let user: Observable<Option<User>> = Observable::new(None);
        let cache = user.clone();
        let on_token = tokens.subscribe(move |token| {
            if token.is_none() && cache.get().is_some() {
                log::debug!("token cleared; dropping cached profile");
                cache.set(None);
            }
        });
        Self {
            user,
            _on_token: on_token,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Return the cached profile, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns the API error when the profile is not cached and the fetch
    /// fails.
    pub async fn load<T: Transport>(&self, api: &ApiClient<T>) -> Result<User, ApiError> {
        if let Some(user) = self.user.get() {
            return Ok(user);
        }
        self.refresh(api).await
    }

    /// Fetch `/users/me` and replace the cache.
    ///
    /// # Errors
    ///
    /// Returns the API error; the cache is left unchanged.
    pub async fn refresh<T: Transport>(&self, api: &ApiClient<T>) -> Result<User, ApiError> {
        let user = api.current_user().await?;
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    pub fn clear(&self) {
        self.user.set(None);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Option<User>) + Send + Sync + 'static,
    {
        self.user.subscribe(listener)
    }
}
