//! RM dashboard: client portfolio with search, headline counts, and the
//! entry points for client details and new credit requests.

use leptos::prelude::*;

use crate::app::Api;
use crate::components::client_details_dialog::ClientDetailsDialog;
use crate::components::credit_request_dialog::CreditRequestDialog;
use crate::components::stat_card::StatCard;
use crate::net::types::Client;
use crate::util::format;

/// Applied search filters; both empty lists the whole portfolio.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ClientFilter {
    company_name: String,
    industry: String,
}

impl ClientFilter {
    fn is_empty(&self) -> bool {
        self.company_name.is_empty() && self.industry.is_empty()
    }
}

#[component]
pub fn RmDashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();

    let company_input = RwSignal::new(String::new());
    let industry_input = RwSignal::new(String::new());
    let filter = RwSignal::new(ClientFilter::default());

    let clients_api = api.clone();
    let clients = LocalResource::new(move || {
        let applied = filter.get();
        let api = clients_api.clone();
        async move {
            if applied.is_empty() {
                api.list_clients().await
            } else {
                let company = Some(applied.company_name.as_str()).filter(|s| !s.is_empty());
                let industry = Some(applied.industry.as_str()).filter(|s| !s.is_empty());
                api.search_clients(company, industry).await
            }
        }
    });

    let industries_api = api.clone();
    let industries = LocalResource::new(move || {
        let api = industries_api.clone();
        async move { api.industries().await }
    });

    let totals_api = api.clone();
    let totals = LocalResource::new(move || {
        let api = totals_api.clone();
        async move {
            let clients = api.list_clients().await.map(|c| c.len()).unwrap_or(0);
            let requests = api.list_credit_requests().await.map(|r| r.len()).unwrap_or(0);
            (clients, requests)
        }
    });

    let details_for = RwSignal::new(None::<String>);
    let request_for = RwSignal::new(None::<Client>);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filter.set(ClientFilter {
            company_name: company_input.get().trim().to_owned(),
            industry: industry_input.get(),
        });
    };
    let on_clear = move |_| {
        company_input.set(String::new());
        industry_input.set(String::new());
        filter.set(ClientFilter::default());
    };

    let on_open_details = Callback::new(move |id: String| details_for.set(Some(id)));
    let on_open_request = Callback::new(move |client: Client| request_for.set(Some(client)));
    let close_details = Callback::new(move |()| details_for.set(None));
    let close_request = Callback::new(move |()| request_for.set(None));
    let request_created = Callback::new(move |()| {
        request_for.set(None);
        totals.refetch();
    });

    let industry_options = move || {
        industries
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .into_iter()
            .map(|name| {
                let label = name.clone();
                view! { <option value=name>{label}</option> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="page">
            <h1>"Client Portfolio"</h1>

            <div class="stat-grid">
                <StatCard
                    label="Total Clients"
                    value=Signal::derive(move || totals.get().map_or(0, |t| t.0).to_string())
                />
                <StatCard
                    label="Credit Requests"
                    value=Signal::derive(move || totals.get().map_or(0, |t| t.1).to_string())
                />
            </div>

            <form class="filter-bar" on:submit=on_search>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Company name"
                    prop:value=move || company_input.get()
                    on:input=move |ev| company_input.set(event_target_value(&ev))
                />
                <select
                    class="form__input"
                    prop:value=move || industry_input.get()
                    on:change=move |ev| industry_input.set(event_target_value(&ev))
                >
                    <option value="">"All industries"</option>
                    {industry_options}
                </select>
                <button class="btn btn--primary" type="submit">"Search"</button>
                <button class="btn" type="button" on:click=on_clear>"Clear"</button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading clients..."</p> }>
                {move || {
                    clients
                        .get()
                        .map(|result| match result {
                            Ok(list) => client_table(list, on_open_details, on_open_request).into_any(),
                            Err(_) => view! { <p class="page__empty">"Unable to load clients."</p> }.into_any(),
                        })
                }}
            </Suspense>

            {move || {
                details_for
                    .get()
                    .map(|client_id| view! { <ClientDetailsDialog client_id on_close=close_details/> })
            }}
            {move || {
                request_for
                    .get()
                    .map(|client| {
                        view! {
                            <CreditRequestDialog
                                client
                                on_close=close_request
                                on_created=request_created
                            />
                        }
                    })
            }}
        </section>
    }
}

fn client_table(
    list: Vec<Client>,
    on_details: Callback<String>,
    on_request: Callback<Client>,
) -> impl IntoView {
    if list.is_empty() {
        return view! { <p class="page__empty">"No clients found."</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Company"</th>
                    <th>"Industry"</th>
                    <th>"Primary contact"</th>
                    <th>"Annual turnover"</th>
                    <th>"Documents"</th>
                    <th></th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|client| {
                        let id = client.id.clone();
                        let row = client.clone();
                        view! {
                            <tr>
                                <td>{client.company_name}</td>
                                <td>{client.industry}</td>
                                <td>
                                    {client.primary_contact.name}
                                    <br/>
                                    <small>{client.primary_contact.email}</small>
                                </td>
                                <td>{format::inr(client.annual_turnover)}</td>
                                <td>{format::yes_no(client.documents_submitted)}</td>
                                <td>
                                    <button class="btn btn--small" on:click=move |_| on_details.run(id.clone())>
                                        "Details"
                                    </button>
                                </td>
                                <td>
                                    <button class="btn btn--small btn--primary" on:click=move |_| on_request.run(row.clone())>
                                        "Request Credit"
                                    </button>
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
