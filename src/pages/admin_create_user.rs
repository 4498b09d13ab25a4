//! Admin form for creating back-office users.

use leptos::prelude::*;

use crate::app::Api;
use crate::components::nav_bridge::SignalNavigator;
use crate::net::types::{NewUser, Role};
use crate::state::notify::NotificationCenter;
use crate::util::validate;

#[component]
pub fn CreateUserPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let center = expect_context::<NotificationCenter>();
    let navigator = expect_context::<SignalNavigator>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(selected) = Role::parse(&role.get()) else {
            problem.set(Some("role: is required".to_owned()));
            return;
        };
        let form = NewUser {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            role: selected,
        };
        if let Err(e) = validate::new_user(&form) {
            problem.set(Some(e.to_string()));
            return;
        }
        problem.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::routes::{self, Navigator, Redirect};
            use crate::state::notify::Notifier;

            let api = api.clone();
            let center = center.clone();
            leptos::task::spawn_local(async move {
                match api.create_user(&form).await {
                    Ok(user) => {
                        log::info!("created user {} as {}", user.id, user.role);
                        center.success("User created successfully", "Success");
                        navigator.navigate(Redirect::to(routes::ADMIN_USERS));
                    }
                    Err(e) => crate::net::interceptor::report_failure(
                        &center,
                        &e,
                        "Failed to create user",
                    ),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &center, navigator, form);
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <section class="page">
            <h1>"Create User"</h1>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Username"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Role"
                    <select
                        class="form__input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="">"Select a role"</option>
                        {role_options}
                    </select>
                </label>
                <Show when=move || problem.get().is_some()>
                    <p class="form__error">{move || problem.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create User"
                </button>
            </form>
        </section>
    }
}
