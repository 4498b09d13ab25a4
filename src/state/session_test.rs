use super::*;

use futures::executor::block_on;

use crate::config::AppConfig;
use crate::net::interceptor::RequestAuthorizer;
use crate::state::notify::{Level, NotificationCenter};
use crate::state::token::{ROLE_KEY, TOKEN_KEY};
use crate::test_support::{
    RecordingNavigator, ScriptedTransport, count_level, fixed_now, live_token, stale_token,
};
use crate::util::storage::MemoryStore;

struct Harness {
    tokens: Arc<TokenStore>,
    center: NotificationCenter,
    navigator: Arc<RecordingNavigator>,
    transport: Arc<ScriptedTransport>,
    api: ApiClient<Arc<ScriptedTransport>>,
    session: SessionManager,
}

fn harness_with(store: MemoryStore) -> Harness {
    let tokens = Arc::new(TokenStore::new(store).with_clock(fixed_now));
    let center = NotificationCenter::new();
    let navigator = Arc::new(RecordingNavigator::default());
    let transport = ScriptedTransport::new();
    let api = ApiClient::new(
        AppConfig::from_env().with_api_base_url("https://bank.test/api"),
        Arc::clone(&transport),
        RequestAuthorizer::new(Arc::clone(&tokens), Arc::new(center.clone())),
    );
    let session = SessionManager::new(
        Arc::clone(&tokens),
        Arc::new(center.clone()),
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );
    Harness {
        tokens,
        center,
        navigator,
        transport,
        api,
        session,
    }
}

fn harness() -> Harness {
    harness_with(MemoryStore::new())
}

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "admin@bank.test".to_owned(),
        password: "secret123".to_owned(),
    }
}

// =============================================================
// Startup restore
// =============================================================

#[test]
fn restores_session_from_live_token_and_role() {
    let token = live_token();
    let h = harness_with(MemoryStore::with_entries([
        (TOKEN_KEY, token.as_str()),
        (ROLE_KEY, "ANALYST"),
    ]));

    assert!(h.session.is_authenticated());
    assert_eq!(h.session.user_role(), Some(Role::Analyst));
}

#[test]
fn expired_token_starts_signed_out() {
    let token = stale_token();
    let h = harness_with(MemoryStore::with_entries([
        (TOKEN_KEY, token.as_str()),
        (ROLE_KEY, "ADMIN"),
    ]));

    assert!(!h.session.is_authenticated());
}

#[test]
fn stored_role_of_expired_session_is_not_reported() {
    let token = stale_token();
    let h = harness_with(MemoryStore::with_entries([
        (TOKEN_KEY, token.as_str()),
        (ROLE_KEY, "ADMIN"),
    ]));

    assert_eq!(h.session.current_user(), None);
    assert_eq!(h.session.user_role(), None);
    assert!(!h.session.has_role(Role::Admin));
}

#[test]
fn token_without_role_starts_signed_out() {
    let token = live_token();
    let h = harness_with(MemoryStore::with_entries([(TOKEN_KEY, token.as_str())]));

    assert!(!h.session.is_authenticated());
    assert_eq!(h.session.current_user(), None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_persists_and_navigates_by_role() {
    let h = harness();
    h.transport.reply(200, r#"{"token":"t1","role":"ADMIN"}"#);

    let resp = block_on(h.session.login(&h.api, &credentials())).unwrap();

    assert_eq!(resp.token, "t1");
    assert_eq!(h.tokens.token().as_deref(), Some("t1"));
    assert_eq!(h.tokens.role().as_deref(), Some("ADMIN"));
    let state = h.session.snapshot();
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Admin));
    assert!(h.session.has_role(Role::Admin));
    assert_eq!(h.navigator.taken(), vec![Redirect::to(routes::ADMIN_ROOT)]);
    assert_eq!(count_level(&h.center, Level::Success), 1);
}

#[test]
fn login_lands_each_role_on_its_dashboard() {
    for (role, landing) in [
        ("RELATIONSHIP_MANAGER", routes::RM_DASHBOARD),
        ("ANALYST", routes::ANALYST_DASHBOARD),
        ("AUDITOR", routes::DASHBOARD),
    ] {
        let h = harness();
        h.transport
            .reply(200, &format!(r#"{{"token":"t1","role":"{role}"}}"#));

        block_on(h.session.login(&h.api, &credentials())).unwrap();

        assert_eq!(h.navigator.taken(), vec![Redirect::to(landing)]);
    }
}

#[test]
fn unknown_role_is_authenticated_without_user() {
    let h = harness();
    h.transport.reply(200, r#"{"token":"t1","role":"AUDITOR"}"#);

    block_on(h.session.login(&h.api, &credentials())).unwrap();

    assert!(h.session.is_authenticated());
    assert_eq!(h.session.current_user(), None);
    assert_eq!(h.session.user_role(), None);
}

#[test]
fn login_stores_refresh_token_when_present() {
    let h = harness();
    h.transport
        .reply(200, r#"{"token":"t1","role":"ADMIN","refreshToken":"r1"}"#);

    block_on(h.session.login(&h.api, &credentials())).unwrap();

    assert_eq!(h.tokens.refresh_token().as_deref(), Some("r1"));
}

#[test]
fn login_failure_records_backend_message_and_notifies_once() {
    let h = harness();
    h.transport.reply(401, r#"{"message":"Invalid credentials"}"#);

    let err = block_on(h.session.login(&h.api, &credentials())).unwrap_err();

    assert_eq!(err.status(), Some(401));
    let state = h.session.snapshot();
    assert!(!state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(h.center.toasts().len(), 1);
    assert_eq!(count_level(&h.center, Level::Error), 1);
    assert_eq!(h.center.toasts()[0].notification.title, "Login Failed");
    assert!(h.navigator.taken().is_empty());
    assert!(h.tokens.token().is_none());
}

#[test]
fn login_failure_without_message_uses_fallback() {
    let h = harness();
    h.transport.fail(ApiError::Network("offline".to_owned()));

    block_on(h.session.login(&h.api, &credentials())).unwrap_err();

    assert_eq!(
        h.session.snapshot().error.as_deref(),
        Some("Login failed. Please try again.")
    );
}

#[test]
fn login_marks_loading_before_the_response() {
    let h = harness();
    h.transport.reply(200, r#"{"token":"t1","role":"ADMIN"}"#);
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = h
        .session
        .subscribe(move |s| sink.lock().unwrap().push(s.loading));

    block_on(h.session.login(&h.api, &credentials())).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_everything_and_returns_to_login() {
    let h = harness();
    h.transport
        .reply(200, r#"{"token":"t1","role":"ANALYST","refreshToken":"r1"}"#);
    block_on(h.session.login(&h.api, &credentials())).unwrap();

    h.session.logout();

    assert!(!h.session.is_authenticated());
    assert_eq!(h.session.user_role(), None);
    assert!(h.tokens.token().is_none());
    assert!(h.tokens.refresh_token().is_none());
    assert!(h.tokens.role().is_none());
    assert_eq!(h.navigator.taken().last(), Some(&Redirect::to(routes::LOGIN)));
    assert_eq!(count_level(&h.center, Level::Info), 1);
    assert_eq!(h.transport.requests().len(), 1);
}
