use super::*;
use std::sync::Arc;

use futures::executor::block_on;

use crate::net::http::Method;
use crate::net::types::{CreditStatus, PrimaryContact, Role};
use crate::state::notify::{Level, NotificationCenter};
use crate::state::token::TokenStore;
use crate::test_support::{ScriptedTransport, count_level, fixed_now, live_token};
use crate::util::storage::MemoryStore;

const BASE: &str = "https://bank.test/api";

struct Harness {
    transport: Arc<ScriptedTransport>,
    tokens: Arc<TokenStore>,
    center: NotificationCenter,
    api: ApiClient<Arc<ScriptedTransport>>,
}

fn harness() -> Harness {
    let transport = ScriptedTransport::new();
    let tokens = Arc::new(TokenStore::new(MemoryStore::new()).with_clock(fixed_now));
    let center = NotificationCenter::new();
    let authorizer = RequestAuthorizer::new(Arc::clone(&tokens), Arc::new(center.clone()));
    let api = ApiClient::new(
        AppConfig::from_env().with_api_base_url(BASE),
        Arc::clone(&transport),
        authorizer,
    );
    Harness {
        transport,
        tokens,
        center,
        api,
    }
}

fn user_json(id: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "username": format!("user{id}"),
        "email": format!("{id}@bank.test"),
        "role": role,
        "active": true
    })
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn endpoint_helpers_format_expected_paths() {
    assert_eq!(user_status_endpoint("u1"), "/admin/users/u1/status");
    assert_eq!(client_endpoint("c9"), "/rm/clients/c9");
    assert_eq!(credit_request_endpoint("r3"), "/credit-requests/r3");
}

#[test]
fn endpoint_helpers_escape_ids() {
    assert_eq!(user_status_endpoint("a/b c"), "/admin/users/a%2Fb%20c/status");
    assert_eq!(client_endpoint("../x"), "/rm/clients/..%2Fx");
    assert_eq!(credit_request_endpoint("r?1"), "/credit-requests/r%3F1");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn login_posts_credentials_and_parses_response() {
    let h = harness();
    h.transport.reply(200, r#"{"token":"t1","role":"ADMIN"}"#);

    let resp = block_on(h.api.login(&LoginRequest {
        email: "admin@bank.test".to_owned(),
        password: "secret123".to_owned(),
    }))
    .unwrap();

    assert_eq!(resp.token, "t1");
    let sent = &h.transport.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, format!("{BASE}/auth/login"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(sent.body.as_deref().unwrap()).unwrap(),
        serde_json::json!({"email": "admin@bank.test", "password": "secret123"})
    );
}

#[test]
fn login_failure_does_not_raise_authorizer_toast() {
    let h = harness();
    h.transport.reply(401, r#"{"message":"Invalid credentials"}"#);

    let err = block_on(h.api.login(&LoginRequest {
        email: "x@bank.test".to_owned(),
        password: "wrongpass".to_owned(),
    }))
    .unwrap_err();

    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert!(h.center.toasts().is_empty());
}

#[test]
fn current_user_carries_bearer_when_token_valid() {
    let h = harness();
    let token = live_token();
    h.tokens.save_token(&token);
    h.transport.reply(200, &user_json("u1", "ANALYST").to_string());

    let user = block_on(h.api.current_user()).unwrap();

    assert_eq!(user.role, Role::Analyst);
    let sent = &h.transport.requests()[0];
    assert_eq!(sent.url, format!("{BASE}/users/me"));
    assert_eq!(sent.header("Authorization"), Some(format!("Bearer {token}").as_str()));
}

// =============================================================
// Error reporting
// =============================================================

#[test]
fn forbidden_response_is_reported_and_returned() {
    let h = harness();
    h.transport.reply(403, "");

    let err = block_on(h.api.list_users()).unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(count_level(&h.center, Level::Error), 1);
    assert_eq!(h.center.toasts()[0].notification.title, "Forbidden");
}

#[test]
fn network_failure_is_reported_once() {
    let h = harness();
    h.transport.fail(ApiError::Network("offline".to_owned()));

    let err = block_on(h.api.list_clients()).unwrap_err();

    assert_eq!(err.status(), Some(0));
    assert_eq!(count_level(&h.center, Level::Error), 1);
}

#[test]
fn malformed_success_body_is_decode_error_without_toast() {
    let h = harness();
    h.transport.reply(200, "not json");

    let err = block_on(h.api.industries()).unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert!(h.center.toasts().is_empty());
}

// =============================================================
// Admin / RM / credit endpoints
// =============================================================

#[test]
fn update_user_status_puts_active_query_and_returns_text() {
    let h = harness();
    h.transport.reply(200, "User status updated");

    let msg = block_on(h.api.update_user_status("u7", false)).unwrap();

    assert_eq!(msg, "User status updated");
    let sent = &h.transport.requests()[0];
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, format!("{BASE}/admin/users/u7/status?active=false"));
    assert!(sent.body.is_none());
}

#[test]
fn create_user_posts_body_and_parses_user() {
    let h = harness();
    h.transport.reply(201, &user_json("u2", "RELATIONSHIP_MANAGER").to_string());

    let created = block_on(h.api.create_user(&NewUser {
        username: "rm.jane".to_owned(),
        email: "jane@bank.test".to_owned(),
        password: "password1".to_owned(),
        role: Role::RelationshipManager,
    }))
    .unwrap();

    assert_eq!(created.id, "u2");
    let body: serde_json::Value =
        serde_json::from_str(h.transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["role"], "RELATIONSHIP_MANAGER");
}

#[test]
fn search_clients_sends_empty_filters_when_absent() {
    let h = harness();
    h.transport.reply(200, "[]");

    let found = block_on(h.api.search_clients(Some("Acme"), None)).unwrap();

    assert!(found.is_empty());
    assert_eq!(
        h.transport.requests()[0].url,
        format!("{BASE}/rm/clients/search?companyName=Acme&industry=")
    );
}

#[test]
fn create_client_returns_confirmation_text() {
    let h = harness();
    h.transport.reply(201, "Client created successfully");

    let msg = block_on(h.api.create_client(&NewClient {
        company_name: "Acme".to_owned(),
        industry: "Steel".to_owned(),
        address: "1 Main St".to_owned(),
        primary_contact: PrimaryContact {
            name: "Ann".to_owned(),
            email: "ann@acme.test".to_owned(),
            phone: "0123456789".to_owned(),
        },
        annual_turnover: 1_000_000.0,
        documents_submitted: true,
    }))
    .unwrap();

    assert_eq!(msg, "Client created successfully");
    assert_eq!(h.transport.requests()[0].url, format!("{BASE}/rm/clients/"));
}

#[test]
fn update_credit_decision_puts_status_and_remarks() {
    let h = harness();
    h.transport.reply(200, "Credit decision updated");

    block_on(h.api.update_credit_decision(
        "r1",
        &CreditDecision {
            status: CreditStatus::Rejected,
            remarks: "Insufficient collateral".to_owned(),
        },
    ))
    .unwrap();

    let sent = &h.transport.requests()[0];
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, format!("{BASE}/credit-requests/r1"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["status"], "REJECTED");
}

#[test]
fn list_credit_requests_parses_joined_fields() {
    let h = harness();
    h.transport.reply(
        200,
        &serde_json::json!([{
            "id": "r1",
            "clientId": "c1",
            "requestAmount": 50000.0,
            "tenureMonths": 36,
            "purpose": "Expansion",
            "status": "PENDING",
            "clientName": "Acme",
            "rmName": "Jane"
        }])
        .to_string(),
    );

    let list = block_on(h.api.list_credit_requests()).unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].client_name.as_deref(), Some("Acme"));
    assert_eq!(list[0].status, Some(CreditStatus::Pending));
}
