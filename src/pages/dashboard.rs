//! Generic landing page for signed-in users without a role-specific home.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{DASHBOARD, landing_for_role};
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let home = move || {
        let target = landing_for_role(auth.get().role());
        (target != DASHBOARD).then_some(target)
    };

    view! {
        <section class="page">
            <h1>"Welcome"</h1>
            {move || match home() {
                Some(target) => view! {
                    <p>
                        "Your workspace is available at "
                        <A href=target>{target}</A>
                        "."
                    </p>
                }
                    .into_any(),
                None => view! {
                    <p>"Your account has no back-office role yet. Contact an administrator for access."</p>
                }
                    .into_any(),
            }}
        </section>
    }
}
