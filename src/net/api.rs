//! REST API client for the back-office backend.
//!
//! Every call is decorated by the `RequestAuthorizer` on the way out and
//! reported through it on failure. The one exception is login: its failures
//! are reported by the session manager, so the authorizer only adds headers.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Http` with the backend's `message`
//! extracted when present; callers decide how to degrade.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::http::{HttpRequest, HttpResponse, Transport};
use super::interceptor::RequestAuthorizer;
use super::types::{
    Client, CreditDecision, CreditRequest, LoginRequest, LoginResponse, NewClient,
    NewCreditRequest, NewUser, User,
};
use crate::config::AppConfig;
use crate::error::ApiError;

fn user_status_endpoint(user_id: &str) -> String {
    format!("/admin/users/{}/status", urlencoding::encode(user_id))
}

fn client_endpoint(client_id: &str) -> String {
    format!("/rm/clients/{}", urlencoding::encode(client_id))
}

fn credit_request_endpoint(request_id: &str) -> String {
    format!("/credit-requests/{}", urlencoding::encode(request_id))
}

pub struct ApiClient<T> {
    config: AppConfig,
    transport: T,
    authorizer: RequestAuthorizer,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: AppConfig, transport: T, authorizer: RequestAuthorizer) -> Self {
        Self {
            config,
            transport,
            authorizer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    async fn send_raw(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = self.authorizer.authorize(request);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response.status, response.body))
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.send_raw(request)
            .await
            .map_err(|e| self.authorizer.on_error(e))
    }

    async fn json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.execute(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn text(&self, request: HttpRequest) -> Result<String, ApiError> {
        Ok(self.execute(request).await?.body)
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    // --- auth -----------------------------------------------------------

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the transport, HTTP, or decode error without raising a toast.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = HttpRequest::post(self.url("/auth/login")).with_json(credentials)?;
        let response = self.send_raw(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.json(HttpRequest::get(self.url("/users/me"))).await
    }

    // --- admin ----------------------------------------------------------

    /// `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.json(HttpRequest::get(self.url("/admin/users"))).await
    }

    /// `POST /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns any encode, transport, HTTP, or decode error.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.json(HttpRequest::post(self.url("/admin/users")).with_json(user)?)
            .await
    }

    /// `PUT /admin/users/{id}/status?active=`; returns the backend's
    /// confirmation text.
    ///
    /// # Errors
    ///
    /// Returns any transport or HTTP error.
    pub async fn update_user_status(&self, user_id: &str, active: bool) -> Result<String, ApiError> {
        let active = if active { "true" } else { "false" };
        let request = HttpRequest::put(self.url(&user_status_endpoint(user_id)))
            .with_query(&[("active", active)]);
        self.text(request).await
    }

    // --- relationship manager -------------------------------------------

    /// `GET /rm/clients/`.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.json(HttpRequest::get(self.url("/rm/clients/"))).await
    }

    /// `POST /rm/clients/`; returns the backend's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns any encode, transport, or HTTP error.
    pub async fn create_client(&self, client: &NewClient) -> Result<String, ApiError> {
        self.text(HttpRequest::post(self.url("/rm/clients/")).with_json(client)?)
            .await
    }

    /// `GET /rm/clients/{id}`.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn get_client(&self, client_id: &str) -> Result<Client, ApiError> {
        self.json(HttpRequest::get(self.url(&client_endpoint(client_id))))
            .await
    }

    /// `GET /rm/clients/search`. Absent filters are sent as empty strings.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn search_clients(
        &self,
        company_name: Option<&str>,
        industry: Option<&str>,
    ) -> Result<Vec<Client>, ApiError> {
        let request = HttpRequest::get(self.url("/rm/clients/search")).with_query(&[
            ("companyName", company_name.unwrap_or_default()),
            ("industry", industry.unwrap_or_default()),
        ]);
        self.json(request).await
    }

    /// `GET /rm/clients/industries`.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn industries(&self) -> Result<Vec<String>, ApiError> {
        self.json(HttpRequest::get(self.url("/rm/clients/industries")))
            .await
    }

    // --- credit requests ------------------------------------------------

    /// `GET /credit-requests/`.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn list_credit_requests(&self) -> Result<Vec<CreditRequest>, ApiError> {
        self.json(HttpRequest::get(self.url("/credit-requests/")))
            .await
    }

    /// `POST /credit-requests/`; returns the backend's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns any encode, transport, or HTTP error.
    pub async fn create_credit_request(&self, request: &NewCreditRequest) -> Result<String, ApiError> {
        self.text(HttpRequest::post(self.url("/credit-requests/")).with_json(request)?)
            .await
    }

    /// `GET /credit-requests/{id}`.
    ///
    /// # Errors
    ///
    /// Returns any transport, HTTP, or decode error.
    pub async fn get_credit_request(&self, request_id: &str) -> Result<CreditRequest, ApiError> {
        self.json(HttpRequest::get(self.url(&credit_request_endpoint(request_id))))
            .await
    }

    /// `PUT /credit-requests/{id}`; returns the backend's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns any encode, transport, or HTTP error.
    pub async fn update_credit_decision(
        &self,
        request_id: &str,
        decision: &CreditDecision,
    ) -> Result<String, ApiError> {
        let request =
            HttpRequest::put(self.url(&credit_request_endpoint(request_id))).with_json(decision)?;
        self.text(request).await
    }
}
