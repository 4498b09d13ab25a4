//! Admin user table with role head counts and activation toggles.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::Api;
use crate::components::stat_card::StatCard;
use crate::net::types::{User, user_stats};
use crate::routes;
use crate::state::notify::NotificationCenter;

#[component]
pub fn UserTablePage() -> impl IntoView {
    let api = expect_context::<Api>();
    let center = expect_context::<NotificationCenter>();

    let fetch_api = api.clone();
    let users = LocalResource::new(move || {
        let api = fetch_api.clone();
        async move { api.list_users().await }
    });

    let loaded = move || users.get().and_then(Result::ok).unwrap_or_default();
    let stats = move || user_stats(&loaded());

    let on_toggle = Callback::new(move |user: User| {
        #[cfg(feature = "csr")]
        {
            use crate::state::notify::Notifier;

            let api = api.clone();
            let center = center.clone();
            leptos::task::spawn_local(async move {
                match api.update_user_status(&user.id, !user.active).await {
                    Ok(msg) => {
                        center.success(&msg, "Success");
                        users.refetch();
                    }
                    Err(e) => crate::net::interceptor::report_failure(
                        &center,
                        &e,
                        "Failed to update user status",
                    ),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &center, user);
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Users"</h1>
                <A href=routes::ADMIN_CREATE_USER attr:class="btn btn--primary">
                    "+ Create User"
                </A>
            </header>

            <div class="stat-grid">
                <StatCard label="Total Users" value=Signal::derive(move || stats().total.to_string())/>
                <StatCard label="Admins" value=Signal::derive(move || stats().admin.to_string())/>
                <StatCard label="Relationship Managers" value=Signal::derive(move || stats().rm.to_string())/>
                <StatCard label="Analysts" value=Signal::derive(move || stats().analyst.to_string())/>
            </div>

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) => user_table(list, on_toggle).into_any(),
                            Err(_) => view! { <p class="page__empty">"Unable to load users."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

fn user_table(list: Vec<User>, on_toggle: Callback<User>) -> impl IntoView {
    if list.is_empty() {
        return view! { <p class="page__empty">"No users yet."</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|user| {
                        let status = if user.active { "Active" } else { "Inactive" };
                        let action = if user.active { "Deactivate" } else { "Activate" };
                        let chip = if user.active { "chip chip--on" } else { "chip chip--off" };
                        let row = user.clone();
                        view! {
                            <tr>
                                <td>{user.username}</td>
                                <td>{user.email}</td>
                                <td>{user.role.label()}</td>
                                <td>
                                    <span class=chip>
                                        {status}
                                    </span>
                                </td>
                                <td>
                                    <button class="btn btn--small" on:click=move |_| on_toggle.run(row.clone())>
                                        {action}
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
