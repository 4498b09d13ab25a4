//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and role-dependent rendering. Produced only by
//! `SessionManager` transitions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;

/// The signed-in principal. The backend only reports a role at login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub role: Role,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<CurrentUser>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Signed in. `role` is `None` when the backend sent a role this client
    /// does not recognize.
    pub fn authenticated(role: Option<Role>) -> Self {
        Self {
            is_authenticated: true,
            user: role.map(|role| CurrentUser { role }),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.map(|u| u.role)
    }
}
