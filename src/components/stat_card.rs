//! Single headline number with a caption.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] modifier: &'static str,
) -> impl IntoView {
    let class = if modifier.is_empty() {
        "stat-card".to_owned()
    } else {
        format!("stat-card stat-card--{modifier}")
    };
    view! {
        <div class=class>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
