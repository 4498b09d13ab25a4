//! Modal for an RM to raise a credit request against one client.

use leptos::prelude::*;

use crate::app::Api;
use crate::net::types::{Client, NewCreditRequest};
use crate::state::notify::NotificationCenter;
use crate::util::validate;

#[component]
pub fn CreditRequestDialog(
    client: Client,
    on_close: Callback<()>,
    on_created: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let center = expect_context::<NotificationCenter>();

    let amount = RwSignal::new(String::new());
    let tenure = RwSignal::new(String::new());
    let purpose = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let client_id = client.id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = NewCreditRequest {
            client_id: client_id.clone(),
            request_amount: amount.get().trim().parse().unwrap_or(0.0),
            tenure_months: tenure.get().trim().parse().unwrap_or(0),
            purpose: purpose.get().trim().to_owned(),
        };
        if let Err(e) = validate::credit_request(&form) {
            problem.set(Some(e.to_string()));
            return;
        }
        problem.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::state::notify::Notifier;

            let api = api.clone();
            let center = center.clone();
            leptos::task::spawn_local(async move {
                match api.create_credit_request(&form).await {
                    Ok(msg) => {
                        center.success(&msg, "Success");
                        on_created.run(());
                    }
                    Err(e) => crate::net::interceptor::report_failure(
                        &center,
                        &e,
                        "Failed to create credit request",
                    ),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &center, form, on_created);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Credit Request"</h2>
                <p class="dialog__subtitle">{client.company_name} " · " {client.industry}</p>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Amount (₹)"
                        <input
                            class="form__input"
                            type="number"
                            min="1000"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Tenure (months)"
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            max="360"
                            prop:value=move || tenure.get()
                            on:input=move |ev| tenure.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Purpose"
                        <textarea
                            class="form__input"
                            maxlength="500"
                            prop:value=move || purpose.get()
                            on:input=move |ev| purpose.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || problem.get().is_some()>
                        <p class="form__error">{move || problem.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Submit"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
