//! Error types for backend calls and the failure taxonomy the UI reports.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ErrorBody;

/// Failure categories surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Form-level input problems, reported by the page that owns the form.
    Validation,
    /// Bad credentials at login.
    Authentication,
    /// Authenticated, but the role may not perform the action.
    Authorization,
    /// Missing, stale, or rejected bearer token.
    SessionExpired,
    /// Connectivity failure or a 5xx.
    Transport,
    /// A response body that did not match the expected shape.
    Decode,
}

/// Errors from the REST layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http {
        status: u16,
        message: Option<String>,
        body: String,
    },

    /// A success response whose body could not be parsed.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A request body that could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an `Http` error, pulling `message` out of a JSON error body when
    /// the backend sent one.
    #[must_use]
    pub fn from_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());
        Self::Http {
            status,
            message,
            body,
        }
    }

    /// HTTP status as the UI sees it; connectivity failures report `0`.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(_) => Some(0),
            Self::Http { status, .. } => Some(*status),
            Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    /// Backend-supplied message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) => FailureKind::Transport,
            Self::Http { status: 401, .. } => FailureKind::SessionExpired,
            Self::Http { status: 403, .. } => FailureKind::Authorization,
            Self::Http { status, .. } if *status >= 500 => FailureKind::Transport,
            Self::Http { .. } => FailureKind::Validation,
            Self::Decode(_) | Self::Encode(_) => FailureKind::Decode,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
