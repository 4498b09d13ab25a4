//! Analyst dashboard: every credit request with status tallies and the
//! approve/reject workflow.

use leptos::prelude::*;

use crate::app::Api;
use crate::components::decision_dialog::DecisionDialog;
use crate::components::stat_card::StatCard;
use crate::net::types::{CreditRequest, CreditStatus, credit_stats};
use crate::util::format;

#[component]
pub fn AnalystDashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let requests = LocalResource::new(move || {
        let api = api.clone();
        async move { api.list_credit_requests().await }
    });

    let stats = move || credit_stats(&requests.get().and_then(Result::ok).unwrap_or_default());

    let deciding = RwSignal::new(None::<CreditRequest>);
    let details = RwSignal::new(None::<CreditRequest>);
    let on_decide = Callback::new(move |request: CreditRequest| deciding.set(Some(request)));
    let on_details = Callback::new(move |request: CreditRequest| details.set(Some(request)));
    let close_decision = Callback::new(move |()| deciding.set(None));
    let decided = Callback::new(move |()| {
        deciding.set(None);
        requests.refetch();
    });

    view! {
        <section class="page">
            <h1>"Credit Review"</h1>

            <div class="stat-grid">
                <StatCard label="Total" value=Signal::derive(move || stats().total.to_string())/>
                <StatCard
                    label="Pending"
                    modifier="pending"
                    value=Signal::derive(move || stats().pending.to_string())
                />
                <StatCard
                    label="Approved"
                    modifier="approved"
                    value=Signal::derive(move || stats().approved.to_string())
                />
                <StatCard
                    label="Rejected"
                    modifier="rejected"
                    value=Signal::derive(move || stats().rejected.to_string())
                />
            </div>

            <Suspense fallback=move || view! { <p>"Loading credit requests..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(|result| match result {
                            Ok(list) => review_table(list, on_details, on_decide).into_any(),
                            Err(_) => view! { <p class="page__empty">"Unable to load credit requests."</p> }.into_any(),
                        })
                }}
            </Suspense>

            {move || details.get().map(|request| details_panel(request, details))}
            {move || {
                deciding
                    .get()
                    .map(|request| {
                        view! {
                            <DecisionDialog request on_close=close_decision on_decided=decided/>
                        }
                    })
            }}
        </section>
    }
}

fn review_table(
    list: Vec<CreditRequest>,
    on_details: Callback<CreditRequest>,
    on_decide: Callback<CreditRequest>,
) -> impl IntoView {
    if list.is_empty() {
        return view! { <p class="page__empty">"No credit requests to review."</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Client"</th>
                    <th>"Relationship manager"</th>
                    <th>"Amount"</th>
                    <th>"Tenure"</th>
                    <th>"Purpose"</th>
                    <th></th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|request| {
                        let status = request.status.unwrap_or_default();
                        let for_details = request.clone();
                        let for_decision = request.clone();
                        view! {
                            <tr>
                                <td>{request.client_name.clone().unwrap_or_else(|| request.client_id.clone())}</td>
                                <td>{request.rm_name.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                <td>{format::inr(request.request_amount)}</td>
                                <td>{request.tenure_months} " months"</td>
                                <td>{request.purpose.clone()}</td>
                                <td>
                                    <button class="btn btn--small" on:click=move |_| on_details.run(for_details.clone())>
                                        "Details"
                                    </button>
                                </td>
                                <td>
                                    <span class=format!("chip {}", format::status_class(Some(status)))>
                                        {status.as_str()}
                                    </span>
                                </td>
                                <td>
                                    {(status == CreditStatus::Pending)
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="btn btn--small btn--primary"
                                                    on:click=move |_| on_decide.run(for_decision.clone())
                                                >
                                                    "Review"
                                                </button>
                                            }
                                        })}
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn details_panel(request: CreditRequest, open: RwSignal<Option<CreditRequest>>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| open.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Credit Request"</h2>
                <dl class="details">
                    <dt>"Client"</dt>
                    <dd>{request.client_name.unwrap_or(request.client_id)}</dd>
                    <dt>"Industry"</dt>
                    <dd>{request.industry.unwrap_or_else(|| "-".to_owned())}</dd>
                    <dt>"Relationship manager"</dt>
                    <dd>
                        {request.rm_name.unwrap_or_else(|| "-".to_owned())}
                        <br/>
                        <small>{request.rm_email.unwrap_or_default()}</small>
                    </dd>
                    <dt>"Amount"</dt>
                    <dd>{format::inr(request.request_amount)}</dd>
                    <dt>"Tenure"</dt>
                    <dd>{request.tenure_months} " months"</dd>
                    <dt>"Purpose"</dt>
                    <dd>{request.purpose}</dd>
                    <dt>"Status"</dt>
                    <dd>{request.status.unwrap_or_default().as_str()}</dd>
                    <dt>"Remarks"</dt>
                    <dd>{request.remarks.unwrap_or_else(|| "-".to_owned())}</dd>
                    <dt>"Submitted"</dt>
                    <dd>{request.created_at.unwrap_or_else(|| "-".to_owned())}</dd>
                </dl>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| open.set(None)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
