//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::ApiError;
use crate::net::http::{HttpRequest, HttpResponse, Transport};
use crate::routes::{Navigator, Redirect};
use crate::state::notify::{Level, NotificationCenter};

/// Fixed "now" used by stores built with [`fixed_now`].
pub const NOW: f64 = 1_700_000_000.0;

pub fn fixed_now() -> f64 {
    NOW
}

pub fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

pub fn token_with_exp(exp: i64) -> String {
    token_with_payload(&serde_json::json!({ "sub": "user@bank.test", "exp": exp }))
}

/// Token valid for an hour past [`NOW`].
#[allow(clippy::cast_possible_truncation)]
pub fn live_token() -> String {
    token_with_exp(NOW as i64 + 3600)
}

/// Token that expired a minute before [`NOW`].
#[allow(clippy::cast_possible_truncation)]
pub fn stale_token() -> String {
    token_with_exp(NOW as i64 - 60)
}

pub fn count_level(center: &NotificationCenter, level: Level) -> usize {
    center
        .toasts()
        .iter()
        .filter(|t| t.notification.level == level)
        .count()
}

/// Navigator that remembers every redirect.
#[derive(Default)]
pub struct RecordingNavigator {
    pub redirects: Mutex<Vec<Redirect>>,
}

impl RecordingNavigator {
    pub fn taken(&self) -> Vec<Redirect> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, redirect: Redirect) {
        self.redirects.lock().unwrap().push(redirect);
    }
}

/// Transport that replays canned results and records what was sent.
#[derive(Default)]
pub struct ScriptedTransport {
    pub sent: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_owned(),
        }));
        self
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for Arc<ScriptedTransport> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>> {
        self.sent.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())));
        std::future::ready(reply)
    }
}
