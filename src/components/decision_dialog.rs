//! Modal for an analyst to approve or reject a pending credit request.

use leptos::prelude::*;

use crate::app::Api;
use crate::net::types::{CreditDecision, CreditRequest, CreditStatus};
use crate::state::notify::NotificationCenter;
use crate::util::{format, validate};

fn parse_status(raw: &str) -> CreditStatus {
    match raw {
        "APPROVED" => CreditStatus::Approved,
        "REJECTED" => CreditStatus::Rejected,
        _ => CreditStatus::Pending,
    }
}

#[component]
pub fn DecisionDialog(
    request: CreditRequest,
    on_close: Callback<()>,
    on_decided: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let center = expect_context::<NotificationCenter>();

    let initial = match request.status {
        Some(CreditStatus::Pending) | None => "",
        Some(status) => status.as_str(),
    };
    let status = RwSignal::new(initial.to_owned());
    let remarks = RwSignal::new(request.remarks.clone().unwrap_or_default());
    let problem = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let request_id = request.id.clone().unwrap_or_default();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let decision = CreditDecision {
            status: parse_status(&status.get()),
            remarks: remarks.get().trim().to_owned(),
        };
        if let Err(e) = validate::credit_decision(&decision) {
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
            let request_id = request_id.clone();
            leptos::task::spawn_local(async move {
                match api.update_credit_decision(&request_id, &decision).await {
                    Ok(msg) => {
                        let verb = if decision.status == CreditStatus::Approved {
                            "approved"
                        } else {
                            "rejected"
                        };
                        center.success(&format!("{msg}: {verb}"), "Success");
                        on_decided.run(());
                    }
                    Err(e) => crate::net::interceptor::report_failure(
                        &center,
                        &e,
                        "Failed to update credit status",
                    ),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &center, &request_id, decision, on_decided);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Update Credit Status"</h2>
                <p class="dialog__subtitle">
                    {request.client_name.clone().unwrap_or_default()}
                    " · "
                    {format::inr(request.request_amount)}
                    " over "
                    {request.tenure_months}
                    " months"
                </p>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Decision"
                        <select
                            class="form__input"
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            <option value="">"Select..."</option>
                            <option value="APPROVED">"Approve"</option>
                            <option value="REJECTED">"Reject"</option>
                        </select>
                    </label>
                    <label class="form__label">
                        "Remarks"
                        <textarea
                            class="form__input"
                            prop:value=move || remarks.get()
                            on:input=move |ev| remarks.set(event_target_value(&ev))
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
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
