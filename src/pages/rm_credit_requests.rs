//! Credit requests raised by the signed-in RM, with analyst outcomes.

use leptos::prelude::*;

use crate::app::Api;
use crate::net::types::CreditRequest;
use crate::util::format;

#[component]
pub fn RmCreditRequestsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let requests = LocalResource::new(move || {
        let api = api.clone();
        async move { api.list_credit_requests().await }
    });

    view! {
        <section class="page">
            <h1>"Credit Requests"</h1>
            <Suspense fallback=move || view! { <p>"Loading credit requests..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(|result| match result {
                            Ok(list) => request_table(list).into_any(),
                            Err(_) => view! { <p class="page__empty">"Unable to load credit requests."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

fn request_table(list: Vec<CreditRequest>) -> impl IntoView {
    if list.is_empty() {
        return view! { <p class="page__empty">"No credit requests yet."</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Client"</th>
                    <th>"Amount"</th>
                    <th>"Tenure"</th>
                    <th>"Purpose"</th>
                    <th>"Status"</th>
                    <th>"Remarks"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|request| {
                        let status = request.status.unwrap_or_default();
                        view! {
                            <tr>
                                <td>{request.client_name.unwrap_or(request.client_id)}</td>
                                <td>{format::inr(request.request_amount)}</td>
                                <td>{request.tenure_months} " months"</td>
                                <td>{request.purpose}</td>
                                <td>
                                    <span class=format!("chip {}", format::status_class(Some(status)))>
                                        {status.as_str()}
                                    </span>
                                </td>
                                <td>{request.remarks.unwrap_or_else(|| "-".to_owned())}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
