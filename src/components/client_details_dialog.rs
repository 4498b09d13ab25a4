//! Read-only client details, fetched fresh from `/rm/clients/{id}`.

use leptos::prelude::*;

use crate::app::Api;
use crate::net::types::Client;
use crate::util::format;

#[component]
pub fn ClientDetailsDialog(client_id: String, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<Api>();
    let details = LocalResource::new(move || {
        let api = api.clone();
        let client_id = client_id.clone();
        async move { api.get_client(&client_id).await }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Client Details"</h2>
                <Suspense fallback=move || view! { <p>"Loading client..."</p> }>
                    {move || {
                        details
                            .get()
                            .map(|result| match result {
                                Ok(client) => details_view(client).into_any(),
                                Err(_) => view! { <p class="form__error">"Failed to load client details"</p> }.into_any(),
                            })
                    }}
                </Suspense>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn details_view(client: Client) -> impl IntoView {
    view! {
        <dl class="details">
            <dt>"Company"</dt>
            <dd>{client.company_name}</dd>
            <dt>"Industry"</dt>
            <dd>{client.industry}</dd>
            <dt>"Address"</dt>
            <dd>{client.address}</dd>
            <dt>"Contact"</dt>
            <dd>
                {client.primary_contact.name}
                <br/>
                {client.primary_contact.email}
                <br/>
                {client.primary_contact.phone}
            </dd>
            <dt>"Annual turnover"</dt>
            <dd>{format::inr(client.annual_turnover)}</dd>
            <dt>"Documents submitted"</dt>
            <dd>{format::yes_no(client.documents_submitted)}</dd>
            <dt>"Onboarded"</dt>
            <dd>{client.created_at.unwrap_or_else(|| "-".to_owned())}</dd>
        </dl>
    }
}
