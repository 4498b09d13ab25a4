//! Route table, typed access rules, and navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards and session transitions never touch the router directly; they ask
//! a `Navigator` to go to a `Redirect`. The Leptos app implements that with a
//! signal the router bridge watches, and tests implement it with a recorder.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const LOGIN: &str = "/auth/login";
pub const DASHBOARD: &str = "/dashboard";
pub const RM_DASHBOARD: &str = "/rm/dashboard";
pub const RM_CREATE_CLIENT: &str = "/rm/create-client";
pub const RM_CREDIT_REQUESTS: &str = "/rm/credit-requests";
pub const ANALYST_DASHBOARD: &str = "/analyst/dashboard";
pub const ANALYST_CREDIT_REQUESTS: &str = "/analyst/credit-requests";
pub const ADMIN_ROOT: &str = "/admin";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_CREATE_USER: &str = "/admin/create-user";

/// Query parameter carrying the page a user tried to open before login.
pub const RETURN_URL_PARAM: &str = "returnUrl";

/// A navigation target with optional query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Redirect {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Value of the first query parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path plus percent-encoded query, ready for the router. Every reserved
    /// character in keys and values is escaped, `/` included.
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Performs navigation on behalf of guards and session transitions.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, redirect: Redirect);
}

/// Roles allowed into a protected route. An empty list admits any
/// authenticated role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteAccess {
    pub roles: Vec<Role>,
}

impl RouteAccess {
    pub fn any_role() -> Self {
        Self::default()
    }

    pub fn only(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn admits(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }
}

/// Landing page after a successful login. Unknown roles land on the generic
/// dashboard.
pub fn landing_for_role(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::RelationshipManager) => RM_DASHBOARD,
        Some(Role::Analyst) => ANALYST_DASHBOARD,
        Some(Role::Admin) => ADMIN_ROOT,
        None => DASHBOARD,
    }
}

/// Entry in the dashboard layout's side menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: &'static str,
}

pub fn menu_for_role(role: Option<Role>) -> Vec<MenuItem> {
    match role {
        Some(Role::Admin) => vec![
            MenuItem { label: "User Table", route: ADMIN_USERS },
            MenuItem { label: "Create User", route: ADMIN_CREATE_USER },
        ],
        Some(Role::RelationshipManager) => vec![
            MenuItem { label: "Dashboard", route: RM_DASHBOARD },
            MenuItem { label: "Create Client", route: RM_CREATE_CLIENT },
            MenuItem { label: "Credit Requests", route: RM_CREDIT_REQUESTS },
        ],
        Some(Role::Analyst) => vec![MenuItem { label: "Dashboard", route: ANALYST_DASHBOARD }],
        None => Vec::new(),
    }
}
