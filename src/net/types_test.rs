use super::*;

fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        username: format!("user-{id}"),
        email: format!("{id}@bank.test"),
        role,
        active: true,
        created_at: None,
        updated_at: None,
    }
}

fn credit(status: Option<CreditStatus>) -> CreditRequest {
    CreditRequest {
        id: Some("c-1".to_owned()),
        client_id: "cl-1".to_owned(),
        submitted_by: None,
        request_amount: 250_000.0,
        tenure_months: 24,
        purpose: "Working capital".to_owned(),
        status,
        remarks: None,
        created_at: None,
        client_name: None,
        industry: None,
        rm_name: None,
        rm_email: None,
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_wire_spelling_matches_backend() {
    assert_eq!(
        serde_json::to_string(&Role::RelationshipManager).unwrap(),
        "\"RELATIONSHIP_MANAGER\""
    );
    let parsed: Role = serde_json::from_str("\"ANALYST\"").unwrap();
    assert_eq!(parsed, Role::Analyst);
}

#[test]
fn role_parse_rejects_unknown_and_lowercase() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse("AUDITOR"), None);
}

#[test]
fn role_display_uses_wire_spelling() {
    assert_eq!(Role::RelationshipManager.to_string(), "RELATIONSHIP_MANAGER");
}

// =============================================================
// Payload shapes
// =============================================================

#[test]
fn client_parses_camel_case_with_missing_optionals() {
    let json = serde_json::json!({
        "id": "cl-9",
        "companyName": "Acme Steel",
        "industry": "Manufacturing",
        "primaryContact": {"name": "Ann", "email": "ann@acme.test", "phone": "0123456789"},
        "annualTurnover": 1.5e7
    });
    let client: Client = serde_json::from_value(json).unwrap();
    assert_eq!(client.company_name, "Acme Steel");
    assert_eq!(client.address, "");
    assert!(!client.documents_submitted);
    assert!(client.rm_id.is_none());
}

#[test]
fn credit_decision_serializes_status_and_remarks() {
    let decision = CreditDecision {
        status: CreditStatus::Approved,
        remarks: "Collateral verified".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&decision).unwrap(),
        serde_json::json!({"status": "APPROVED", "remarks": "Collateral verified"})
    );
}

#[test]
fn new_credit_request_uses_camel_case_keys() {
    let body = NewCreditRequest {
        client_id: "cl-1".to_owned(),
        request_amount: 1000.0,
        tenure_months: 12,
        purpose: "Equipment".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["clientId"], "cl-1");
    assert_eq!(value["tenureMonths"], 12);
}

#[test]
fn login_response_refresh_token_is_optional() {
    let parsed: LoginResponse =
        serde_json::from_str(r#"{"token":"t1","role":"ADMIN"}"#).unwrap();
    assert_eq!(parsed.token, "t1");
    assert!(parsed.refresh_token.is_none());
}

// =============================================================
// Stats
// =============================================================

#[test]
fn user_stats_counts_each_role() {
    let users = vec![
        user("1", Role::Admin),
        user("2", Role::RelationshipManager),
        user("3", Role::RelationshipManager),
        user("4", Role::Analyst),
    ];
    assert_eq!(
        user_stats(&users),
        UserStats { total: 4, admin: 1, rm: 2, analyst: 1 }
    );
}

#[test]
fn credit_stats_counts_statuses_and_total() {
    let requests = vec![
        credit(Some(CreditStatus::Approved)),
        credit(Some(CreditStatus::Pending)),
        credit(Some(CreditStatus::Pending)),
        credit(Some(CreditStatus::Rejected)),
        credit(None),
    ];
    assert_eq!(
        credit_stats(&requests),
        CreditStats { total: 5, approved: 1, pending: 2, rejected: 1 }
    );
}

#[test]
fn stats_of_empty_lists_are_zero() {
    assert_eq!(user_stats(&[]), UserStats::default());
    assert_eq!(credit_stats(&[]), CreditStats::default());
}
