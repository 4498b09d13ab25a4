//! Wire DTOs for the back-office REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional server-assigned
//! fields default when absent so list endpoints that omit them still parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Back-office role. Closed set; wire form is SCREAMING_SNAKE_CASE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    RelationshipManager,
    Analyst,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::RelationshipManager, Role::Analyst];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::RelationshipManager => "RELATIONSHIP_MANAGER",
            Role::Analyst => "ANALYST",
        }
    }

    /// Parse the persisted/wire spelling. Unknown strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }

    /// Human-readable label for tables and menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::RelationshipManager => "Relationship Manager",
            Role::Analyst => "Analyst",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` success body.
///
/// `role` stays a raw string: the session layer decides what to do with a
/// role this client does not know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    #[serde(default, rename = "refreshToken", alias = "refresh_token")]
    pub refresh_token: Option<String>,
}

/// Back-office user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// `POST /admin/users` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Head counts shown on the admin user table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub admin: usize,
    pub rm: usize,
    pub analyst: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Corporate client onboarded by a relationship manager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    #[serde(default)]
    pub address: String,
    pub primary_contact: PrimaryContact,
    pub annual_turnover: f64,
    #[serde(default)]
    pub documents_submitted: bool,
    #[serde(default)]
    pub rm_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /rm/clients/` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub company_name: String,
    pub industry: String,
    pub address: String,
    pub primary_contact: PrimaryContact,
    pub annual_turnover: f64,
    pub documents_submitted: bool,
}

/// Lifecycle of a credit request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CreditStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CreditStatus::Pending => "PENDING",
            CreditStatus::Approved => "APPROVED",
            CreditStatus::Rejected => "REJECTED",
        }
    }
}

/// Credit request as listed for RMs and analysts, with joined client/RM data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub client_id: String,
    #[serde(default)]
    pub submitted_by: Option<String>,
    pub request_amount: f64,
    pub tenure_months: u32,
    pub purpose: String,
    #[serde(default)]
    pub status: Option<CreditStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub rm_name: Option<String>,
    #[serde(default)]
    pub rm_email: Option<String>,
}

/// `POST /credit-requests/` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditRequest {
    pub client_id: String,
    pub request_amount: f64,
    pub tenure_months: u32,
    pub purpose: String,
}

/// `PUT /credit-requests/{id}` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditDecision {
    pub status: CreditStatus,
    pub remarks: String,
}

/// Status tallies shown on RM and analyst dashboards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreditStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

/// Error body the backend sends with 4xx/5xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Tally users by role.
#[must_use]
pub fn user_stats(users: &[User]) -> UserStats {
    users.iter().fold(
        UserStats {
            total: users.len(),
            ..UserStats::default()
        },
        |mut stats, user| {
            match user.role {
                Role::Admin => stats.admin += 1,
                Role::RelationshipManager => stats.rm += 1,
                Role::Analyst => stats.analyst += 1,
            }
            stats
        },
    )
}

/// Tally credit requests by status. Requests without a status only count
/// toward the total.
#[must_use]
pub fn credit_stats(requests: &[CreditRequest]) -> CreditStats {
    requests.iter().fold(
        CreditStats {
            total: requests.len(),
            ..CreditStats::default()
        },
        |mut stats, request| {
            match request.status {
                Some(CreditStatus::Approved) => stats.approved += 1,
                Some(CreditStatus::Pending) => stats.pending += 1,
                Some(CreditStatus::Rejected) => stats.rejected += 1,
                None => {}
            }
            stats
        },
    )
}
