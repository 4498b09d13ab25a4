//! Session state manager: login, logout, and startup restore.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionManager` lives in Leptos context for the lifetime of the app.
//! It is the only writer of `AuthState`; guards, the layout, and pages read
//! snapshots or subscribe to changes. Durable credentials stay in the
//! `TokenStore`, so a page reload restores the session from there.
//!
//! DESIGN
//! ======
//! Side effects (toasts, navigation) go through the injected `Notifier` and
//! `Navigator` so transitions are testable without a browser. Overlapping
//! logins are not serialized; whichever response arrives last wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::net::types::{LoginRequest, LoginResponse, Role};
use crate::routes::{self, Navigator, Redirect};
use crate::state::auth::{AuthState, CurrentUser};
use crate::state::notify::Notifier;
use crate::state::token::TokenStore;
use crate::util::observable::{Observable, Subscription};

const LOGIN_FAILED: &str = "Login failed. Please try again.";

pub struct SessionManager {
    tokens: Arc<TokenStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: Observable<AuthState>,
}

impl SessionManager {
    /// Build the manager and restore a persisted session. A session is
    /// restored only when a token and a role are stored and the token is
    /// still live.
    pub fn new(
        tokens: Arc<TokenStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let initial = restore(&tokens);
        Self {
            tokens,
            notifier,
            navigator,
            state: Observable::new(initial),
        }
    }

    /// Authenticate against the backend and navigate to the role's landing
    /// page.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error after recording it in the
    /// session state and raising one "Login Failed" notification.
    pub async fn login<T: Transport>(
        &self,
        api: &ApiClient<T>,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match api.login(credentials).await {
            Ok(response) => {
                self.tokens.save_token(&response.token);
                self.tokens.save_role(&response.role);
                if let Some(refresh) = response.refresh_token.as_deref() {
                    self.tokens.save_refresh_token(refresh);
                }

                let role = Role::parse(&response.role);
                if role.is_none() {
                    log::warn!("login returned unrecognized role {:?}", response.role);
                }
                self.state.set(AuthState::authenticated(role));
                log::info!("login succeeded: role={role:?}");

                self.notifier.success("Login successful", "Welcome");
                self.navigator
                    .navigate(Redirect::to(routes::landing_for_role(role)));
                Ok(response)
            }
            Err(err) => {
                let message = err.server_message().unwrap_or(LOGIN_FAILED).to_owned();
                log::warn!("login failed: status={:?}", err.status());
                self.state.set(AuthState::failed(message.clone()));
                self.notifier.error(&message, "Login Failed");
                Err(err)
            }
        }
    }

    /// Drop credentials locally and return to the login page. The backend is
    /// not contacted.
    pub fn logout(&self) {
        self.tokens.clear_tokens();
        self.state.set(AuthState::default());
        log::info!("logged out");
        self.notifier.info("You have been logged out", "Logged Out");
        self.navigator.navigate(Redirect::to(routes::LOGIN));
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.state.get().user
    }

    /// Role of the signed-in user. Reads session state only; a role string
    /// left in storage by an expired session does not count.
    pub fn user_role(&self) -> Option<Role> {
        self.state.get().role()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user_role() == Some(role)
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.get()
    }

    /// Observe session state. The listener receives the current value
    /// immediately.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        self.state.subscribe(listener)
    }
}

fn restore(tokens: &TokenStore) -> AuthState {
    let (Some(_), Some(role)) = (tokens.token(), tokens.role()) else {
        return AuthState::default();
    };
    if tokens.is_token_expired(None) {
        log::debug!("stored token expired; starting signed out");
        return AuthState::default();
    }
    AuthState::authenticated(Role::parse(&role))
}
