//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every shared container is built here once and placed in Leptos context.
//! The token store is owned by the session manager, the profile cache, and
//! the API client's authorizer; components never touch it directly.
//! `AuthState` is mirrored into an `RwSignal` so components can react to
//! login and logout.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::nav_bridge::{NavBridge, SignalNavigator};
use crate::components::toast_stack::ToastStack;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::http::FetchTransport;
use crate::net::interceptor::RequestAuthorizer;
use crate::net::types::Role;
use crate::pages::{
    admin_create_user::CreateUserPage, admin_users::UserTablePage,
    analyst_dashboard::AnalystDashboardPage, dashboard::DashboardPage, login::LoginPage,
    rm_create_client::CreateClientPage, rm_credit_requests::RmCreditRequestsPage,
    rm_dashboard::RmDashboardPage,
};
use crate::routes::{self, RouteAccess};
use crate::state::notify::{NotificationCenter, Notifier};
use crate::state::profile::ProfileState;
use crate::state::session::SessionManager;
use crate::state::token::TokenStore;
use crate::util::storage::LocalStorage;

/// API client type shared through context.
pub type Api = Arc<ApiClient<FetchTransport>>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    log::info!("backoffice starting: api={}", config.api_base_url());

    let center = NotificationCenter::new();
    let notifier: Arc<dyn Notifier> = Arc::new(center.clone());
    let navigator = SignalNavigator::new();
    let tokens = Arc::new(TokenStore::new(LocalStorage));
    let session = Arc::new(SessionManager::new(
        Arc::clone(&tokens),
        Arc::clone(&notifier),
        Arc::new(navigator),
    ));
    let api: Api = Arc::new(ApiClient::new(
        config,
        FetchTransport,
        RequestAuthorizer::new(Arc::clone(&tokens), notifier),
    ));
    let profile = Arc::new(ProfileState::new(&tokens));

    let auth = RwSignal::new(session.snapshot());
    let auth_sub = session.subscribe(move |state| auth.set(state.clone()));
    on_cleanup(move || drop(auth_sub));

    provide_context(center);
    provide_context(navigator);
    provide_context(session);
    provide_context(api);
    provide_context(profile);
    provide_context(auth);

    view! {
        <Title text="Banking Back Office"/>

        <Router>
            <NavBridge navigator/>
            <ToastStack/>
            <Routes fallback=|| view! { <Redirect path=routes::LOGIN/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::LOGIN/> }/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>

                <ParentRoute path=StaticSegment("dashboard") view=|| view! { <Guarded/> }>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </ParentRoute>

                <ParentRoute
                    path=StaticSegment("rm")
                    view=|| view! { <Guarded access=RouteAccess::only([Role::RelationshipManager])/> }
                >
                    <Route path=StaticSegment("dashboard") view=RmDashboardPage/>
                    <Route path=StaticSegment("create-client") view=CreateClientPage/>
                    <Route path=StaticSegment("credit-requests") view=RmCreditRequestsPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::RM_DASHBOARD/> }/>
                </ParentRoute>

                <ParentRoute
                    path=StaticSegment("analyst")
                    view=|| view! { <Guarded access=RouteAccess::only([Role::Analyst])/> }
                >
                    <Route path=StaticSegment("dashboard") view=AnalystDashboardPage/>
                    <Route path=StaticSegment("credit-requests") view=AnalystDashboardPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::ANALYST_DASHBOARD/> }/>
                </ParentRoute>

                <ParentRoute
                    path=StaticSegment("admin")
                    view=|| view! { <Guarded access=RouteAccess::only([Role::Admin])/> }
                >
                    <Route path=StaticSegment("users") view=UserTablePage/>
                    <Route path=StaticSegment("create-user") view=CreateUserPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::ADMIN_USERS/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
