//! Minimal HTTP request/response model and the transport seam.
//!
//! DESIGN
//! ======
//! Requests are plain data so the authorizer can decorate them and tests can
//! inspect exactly what would go over the wire. `FetchTransport` turns them
//! into `gloo-net` calls in the browser build; elsewhere it reports the
//! backend as unreachable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    /// Set `name`, replacing any existing value (header names compare
    /// case-insensitively).
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// Attach a JSON body and matching content type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `value` cannot be serialized.
    pub fn with_json<T: serde::Serialize>(self, value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut request = self.with_header("Content-Type", "application/json");
        request.body = Some(body);
        Ok(request)
    }

    /// Append URL query pairs, percent-encoding values.
    #[must_use]
    pub fn with_query(mut self, pairs: &[(&str, &str)]) -> Self {
        if pairs.is_empty() {
            return self;
        }
        let encoded = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let sep = if self.url.contains('?') { '&' } else { '?' };
        self.url = format!("{}{sep}{encoded}", self.url);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the backend. Network failures come back as
/// [`ApiError::Network`]; any HTTP status, success or not, is a response.
pub trait Transport: Send + Sync + 'static {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> {
        fetch(request)
    }
}

/// Pair a status with its body. A body that cannot be read is a network
/// failure, not an empty response.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn read_body<E: std::fmt::Display>(
    status: u16,
    body: Result<String, E>,
) -> Result<HttpResponse, ApiError> {
    match body {
        Ok(body) => Ok(HttpResponse { status, body }),
        Err(e) => {
            log::warn!("failed to read response body: status={status}");
            Err(ApiError::Network(format!("failed to read response body: {e}")))
        }
    }
}

async fn fetch(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        read_body(status, resp.text().await)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
