//! Route guards run before a protected page renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected sections are wrapped in `components::guarded::Guarded`, which
//! runs `auth_guard` and then `role_guard`. Both are plain functions over the
//! session, a notifier, and a navigator, so they work the same in the
//! browser and in tests.
//!
//! A denial always produces exactly one notification and one redirect.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::routes::{self, Navigator, Redirect, RouteAccess};
use crate::state::notify::Notifier;
use crate::state::session::SessionManager;

/// Allow signed-in users. Anyone else is sent to the login page with the
/// requested URL preserved as `returnUrl`.
pub fn auth_guard(
    session: &SessionManager,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
    requested_url: &str,
) -> bool {
    if session.is_authenticated() {
        return true;
    }
    log::info!("auth guard: redirecting {requested_url} to login");
    notifier.warning("Please login to access this page", "Authentication Required");
    navigator.navigate(
        Redirect::to(routes::LOGIN).with_query(routes::RETURN_URL_PARAM, requested_url),
    );
    false
}

/// Allow users whose role is admitted by `access`.
pub fn role_guard(
    session: &SessionManager,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
    access: &RouteAccess,
) -> bool {
    let Some(role) = session.user_role() else {
        log::warn!("role guard: no role for current session");
        notifier.error("Access denied", "Unauthorized");
        navigator.navigate(Redirect::to(routes::LOGIN));
        return false;
    };
    if access.admits(role) {
        return true;
    }
    log::warn!("role guard: {role} not admitted by {:?}", access.roles);
    notifier.error("You do not have permission to access this page", "Access Denied");
    navigator.navigate(Redirect::to(routes::DASHBOARD));
    false
}
