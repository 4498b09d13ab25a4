//! RM form for onboarding a corporate client.

use leptos::prelude::*;

use crate::app::Api;
use crate::components::nav_bridge::SignalNavigator;
use crate::net::types::{NewClient, PrimaryContact};
use crate::state::notify::NotificationCenter;
use crate::util::validate;

#[component]
pub fn CreateClientPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let center = expect_context::<NotificationCenter>();
    let navigator = expect_context::<SignalNavigator>();

    let company_name = RwSignal::new(String::new());
    let industry = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let contact_name = RwSignal::new(String::new());
    let contact_email = RwSignal::new(String::new());
    let contact_phone = RwSignal::new(String::new());
    let turnover = RwSignal::new(String::new());
    let documents = RwSignal::new(false);
    let problem = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = NewClient {
            company_name: company_name.get().trim().to_owned(),
            industry: industry.get().trim().to_owned(),
            address: address.get().trim().to_owned(),
            primary_contact: PrimaryContact {
                name: contact_name.get().trim().to_owned(),
                email: contact_email.get().trim().to_owned(),
                phone: contact_phone.get().trim().to_owned(),
            },
            annual_turnover: turnover.get().trim().parse().unwrap_or(-1.0),
            documents_submitted: documents.get(),
        };
        if let Err(e) = validate::new_client(&form) {
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
                match api.create_client(&form).await {
                    Ok(msg) => {
                        center.success(&msg, "Success");
                        navigator.navigate(Redirect::to(routes::RM_DASHBOARD));
                    }
                    Err(e) => crate::net::interceptor::report_failure(
                        &center,
                        &e,
                        "Failed to create client",
                    ),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &center, navigator, form);
    };

    view! {
        <section class="page">
            <h1>"Create Client"</h1>
            <form class="form form--two-column" on:submit=on_submit>
                {text_field("Company name", "text", company_name)}
                {text_field("Industry", "text", industry)}
                {text_field("Address", "text", address)}
                {text_field("Annual turnover (₹)", "number", turnover)}
                {text_field("Contact name", "text", contact_name)}
                {text_field("Contact email", "email", contact_email)}
                {text_field("Contact phone", "tel", contact_phone)}
                <label class="form__label form__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || documents.get()
                        on:change=move |ev| documents.set(event_target_checked(&ev))
                    />
                    "Documents submitted"
                </label>
                <Show when=move || problem.get().is_some()>
                    <p class="form__error">{move || problem.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create Client"
                </button>
            </form>
        </section>
    }
}

fn text_field(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
