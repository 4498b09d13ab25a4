//! Email and password login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through `SessionManager::login`, which owns the outcome: it
//! stores credentials, raises the welcome or failure toast, and navigates to
//! the role's landing page. This page only validates input and mirrors the
//! session's loading and error fields.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::Api;
use crate::components::nav_bridge::SignalNavigator;
use crate::net::types::LoginRequest;
use crate::routes::{self, Navigator, Redirect};
use crate::state::auth::AuthState;
use crate::state::session::SessionManager;
use crate::util::validate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Arc<SessionManager>>();
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigator = expect_context::<SignalNavigator>();

    // Already signed in: skip the form.
    if session.is_authenticated() {
        navigator.navigate(Redirect::to(routes::landing_for_role(session.user_role())));
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let credentials = LoginRequest {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if let Err(e) = validate::login(&credentials) {
            problem.set(Some(e.to_string()));
            return;
        }
        problem.set(None);

        #[cfg(feature = "csr")]
        {
            let session = Arc::clone(&session);
            let api = Arc::clone(&api);
            leptos::task::spawn_local(async move {
                if session.login(&api, &credentials).await.is_err() {
                    password.set(String::new());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&session, &api, credentials);
    };

    let error = move || problem.get().or_else(|| auth.get().error);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Banking Back Office"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@bank.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
