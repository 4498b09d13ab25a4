//! Request authorizer: bearer injection and central error reporting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call from `ApiClient` passes through here twice: once on the
//! way out to pick up the bearer header, and once on failure to raise the
//! matching toast. The error is always handed back to the caller; nothing is
//! retried, refreshed, or queued.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::sync::Arc;

use crate::error::ApiError;
use crate::net::http::HttpRequest;
use crate::state::notify::Notifier;
use crate::state::token::TokenStore;

/// User-facing categories for failed responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorNotice {
    SessionExpired,
    Forbidden,
    Network,
    Server,
}

impl ErrorNotice {
    /// Category for a status, or `None` for statuses that stay silent.
    pub fn for_status(status: u16) -> Option<Self> {
        match status {
            401 => Some(Self::SessionExpired),
            403 => Some(Self::Forbidden),
            0 => Some(Self::Network),
            s if s >= 500 => Some(Self::Server),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SessionExpired => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::Network => "Network Error",
            Self::Server => "Server Error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::SessionExpired => "Session expired. Please login again.",
            Self::Forbidden => "You do not have permission to access this resource.",
            Self::Network => "Unable to connect to server.",
            Self::Server => "Server error. Please try again later.",
        }
    }
}

#[derive(Clone)]
pub struct RequestAuthorizer {
    tokens: Arc<TokenStore>,
    notifier: Arc<dyn Notifier>,
}

impl RequestAuthorizer {
    pub fn new(tokens: Arc<TokenStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { tokens, notifier }
    }

    /// Attach `Authorization: Bearer <token>` when the stored token is present
    /// and unexpired; otherwise return the request untouched.
    pub fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match self.tokens.valid_token() {
            Some(token) => request.with_header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Report `err` once if its status is one the user must hear about, then
    /// hand it back unchanged.
    pub fn on_error(&self, err: ApiError) -> ApiError {
        if let Some(notice) = err.status().and_then(ErrorNotice::for_status) {
            log::warn!("request failed: status={:?} notice={notice:?}", err.status());
            self.notifier.error(notice.message(), notice.title());
        } else {
            log::debug!("request failed without notice: {err}");
        }
        err
    }
}

/// Whether `on_error` already raised a toast for `err`.
pub fn was_reported(err: &ApiError) -> bool {
    err.status().and_then(ErrorNotice::for_status).is_some()
}

/// Page-level failure report for errors the authorizer stayed silent on:
/// the backend's message when it sent one, otherwise `fallback`.
pub fn report_failure(notifier: &dyn Notifier, err: &ApiError, fallback: &str) {
    if was_reported(err) {
        return;
    }
    notifier.error(err.server_message().unwrap_or(fallback), "Error");
}
