//! Dashboard layout: header with profile and logout, role menu, content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected section. The menu follows the session role and the
//! header shows the cached `/users/me` profile once it loads.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::Api;
use crate::net::types::Role;
use crate::routes::menu_for_role;
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;
use crate::state::session::SessionManager;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = expect_context::<Arc<SessionManager>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<Arc<ProfileState>>();
    let api = expect_context::<Api>();
    let location = use_location();

    let user = RwSignal::new(profile.user());
    let profile_sub = profile.subscribe(move |u| user.set(u.clone()));
    on_cleanup(move || drop(profile_sub));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(e) = profile.load(&api).await {
            log::warn!("profile load failed: {e}");
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (&profile, &api);

    let role_label = move || {
        auth.get()
            .role()
            .map_or("Unknown role", Role::label)
    };
    let display_name = move || {
        user.get()
            .map(|u| u.username)
            .unwrap_or_else(|| "Signed in".to_owned())
    };

    let menu = move || {
        let current = location.pathname.get();
        menu_for_role(auth.get().role())
            .into_iter()
            .map(|item| {
                let class = if current == item.route {
                    "layout__menu-item layout__menu-item--active"
                } else {
                    "layout__menu-item"
                };
                view! {
                    <A href=item.route attr:class=class>
                        {item.label}
                    </A>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_logout = move |_| session.logout();

    view! {
        <div class="layout">
            <header class="layout__header">
                <span class="layout__brand">"Banking Back Office"</span>
                <span class="layout__spacer"></span>
                <span class="layout__user">
                    {display_name}
                    " · "
                    <span class="layout__role">{role_label}</span>
                </span>
                <button class="btn layout__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <div class="layout__body">
                <nav class="layout__menu">{menu}</nav>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
