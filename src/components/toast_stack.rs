//! Renders the notification center as a dismissable toast stack.

use leptos::prelude::*;

use crate::state::notify::{NotificationCenter, Toast};

#[cfg(feature = "csr")]
const TOAST_TTL_MS: u32 = 5_000;

#[component]
pub fn ToastStack() -> impl IntoView {
    let center = expect_context::<NotificationCenter>();
    let toasts = RwSignal::new(center.toasts());
    let sub = center.subscribe(move |list| toasts.set(list.clone()));
    on_cleanup(move || drop(sub));

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=|toast| view! { <ToastItem toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let center = expect_context::<NotificationCenter>();
    let id = toast.id;

    #[cfg(feature = "csr")]
    {
        let center = center.clone();
        gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || center.dismiss(id)).forget();
    }

    let class = format!("toast {}", toast.notification.level.css_class());
    view! {
        <div class=class role="status" on:click=move |_| center.dismiss(id)>
            <strong class="toast__title">{toast.notification.title}</strong>
            <p class="toast__message">{toast.notification.message}</p>
        </div>
    }
}
