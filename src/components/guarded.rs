//! Route wrapper that runs the access guards before rendering a section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected section (`/dashboard`, `/rm`, `/analyst`, `/admin`) is a
//! `ParentRoute` whose view is `Guarded`. The guards run once when the
//! section mounts: the authentication guard first, then the role guard when
//! the section restricts roles. Child routes render through the dashboard
//! layout's `<Outlet/>` only after both pass.

#[cfg(test)]
#[path = "guarded_test.rs"]
mod guarded_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::layout::DashboardLayout;
use crate::components::nav_bridge::SignalNavigator;
use crate::guards::{auth_guard, role_guard};
use crate::routes::RouteAccess;
use crate::state::notify::NotificationCenter;
use crate::state::session::SessionManager;

/// Path plus query string as the router reports them.
fn requested_url(path: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{search}")
    }
}

/// Protected section shell. `access` of `None` only requires a signed-in
/// user.
#[component]
pub fn Guarded(#[prop(optional)] access: Option<RouteAccess>) -> impl IntoView {
    let session = expect_context::<Arc<SessionManager>>();
    let center = expect_context::<NotificationCenter>();
    let navigator = expect_context::<SignalNavigator>();
    let location = use_location();
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        let url = requested_url(
            &location.pathname.get_untracked(),
            &location.search.get_untracked(),
        );
        let ok = auth_guard(&session, &center, &navigator, &url)
            && access
                .as_ref()
                .is_none_or(|access| role_guard(&session, &center, &navigator, access));
        allowed.set(ok);
    });

    view! {
        <Show when=move || allowed.get()>
            <DashboardLayout>
                <Outlet/>
            </DashboardLayout>
        </Show>
    }
}
