//! Bridge between `Navigator` callers and the Leptos router.
//!
//! The session manager and guards live outside the component tree, so they
//! cannot call `use_navigate` themselves. They write the target href into a
//! signal; `NavBridge`, mounted inside `<Router>`, performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{Navigator, Redirect};

#[derive(Clone, Copy)]
pub struct SignalNavigator {
    target: RwSignal<Option<String>>,
}

impl SignalNavigator {
    pub fn new() -> Self {
        Self {
            target: RwSignal::new(None),
        }
    }
}

impl Default for SignalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, redirect: Redirect) {
        let href = redirect.href();
        log::debug!("navigate: {href}");
        self.target.set(Some(href));
    }
}

#[component]
pub fn NavBridge(navigator: SignalNavigator) -> impl IntoView {
    let navigate = use_navigate();
    let target = navigator.target;

    Effect::new(move || {
        if let Some(href) = target.get() {
            target.update_untracked(|t| *t = None);
            navigate(&href, NavigateOptions::default());
        }
    });
}
