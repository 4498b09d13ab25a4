//! Form validation run before a request is sent.
//!
//! The backend enforces the same rules; checking them here keeps obviously
//! bad submissions off the wire and lets forms show a message next to the
//! first offending field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::error::FailureKind;
use crate::net::types::{
    CreditDecision, CreditStatus, LoginRequest, NewClient, NewCreditRequest, NewUser,
};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_CREDIT_AMOUNT: f64 = 1000.0;
pub const MAX_TENURE_MONTHS: u32 = 360;
pub const MIN_PURPOSE_LEN: usize = 10;
pub const MAX_PURPOSE_LEN: usize = 500;
pub const MIN_REMARKS_LEN: usize = 10;

/// First failing rule of a submitted form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        FailureKind::Validation
    }
}

pub type Validation = Result<(), ValidationError>;

// =============================================================================
// FIELD RULES
// =============================================================================

pub fn required(field: &'static str, value: &str) -> Validation {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

pub fn min_len(field: &'static str, value: &str, min: usize) -> Validation {
    required(field, value)?;
    if value.trim().chars().count() < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {min} characters"),
        ));
    }
    Ok(())
}

pub fn max_len(field: &'static str, value: &str, max: usize) -> Validation {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Loose address shape: one `@`, non-empty local part, dotted domain
/// without empty labels, no whitespace.
pub fn email(field: &'static str, value: &str) -> Validation {
    required(field, value)?;
    let invalid = || Err(ValidationError::new(field, "must be a valid email"));
    if value.chars().any(char::is_whitespace) {
        return invalid();
    }
    let Some((local, domain)) = value.split_once('@') else {
        return invalid();
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return invalid();
    }
    if domain.split('.').any(str::is_empty) {
        return invalid();
    }
    Ok(())
}

/// Exactly ten ASCII digits.
pub fn phone(field: &'static str, value: &str) -> Validation {
    required(field, value)?;
    if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(field, "must be a 10 digit number"));
    }
    Ok(())
}

// =============================================================================
// FORMS
// =============================================================================

pub fn login(form: &LoginRequest) -> Validation {
    email("email", &form.email)?;
    min_len("password", &form.password, MIN_PASSWORD_LEN)
}

pub fn new_user(form: &NewUser) -> Validation {
    required("username", &form.username)?;
    email("email", &form.email)?;
    min_len("password", &form.password, MIN_PASSWORD_LEN)
}

pub fn new_client(form: &NewClient) -> Validation {
    min_len("companyName", &form.company_name, 3)?;
    min_len("industry", &form.industry, 2)?;
    min_len("address", &form.address, 10)?;
    min_len("primaryContactName", &form.primary_contact.name, 2)?;
    email("primaryContactEmail", &form.primary_contact.email)?;
    phone("primaryContactPhone", &form.primary_contact.phone)?;
    if !form.annual_turnover.is_finite() || form.annual_turnover < 0.0 {
        return Err(ValidationError::new(
            "annualTurnover",
            "must be zero or more",
        ));
    }
    Ok(())
}

pub fn credit_request(form: &NewCreditRequest) -> Validation {
    required("clientId", &form.client_id)?;
    if !form.request_amount.is_finite() || form.request_amount < MIN_CREDIT_AMOUNT {
        return Err(ValidationError::new(
            "requestAmount",
            format!("must be at least {MIN_CREDIT_AMOUNT}"),
        ));
    }
    if !(1..=MAX_TENURE_MONTHS).contains(&form.tenure_months) {
        return Err(ValidationError::new(
            "tenureMonths",
            format!("must be between 1 and {MAX_TENURE_MONTHS}"),
        ));
    }
    min_len("purpose", &form.purpose, MIN_PURPOSE_LEN)?;
    max_len("purpose", &form.purpose, MAX_PURPOSE_LEN)
}

/// A decision must settle the request; `PENDING` is not a decision.
pub fn credit_decision(form: &CreditDecision) -> Validation {
    if form.status == CreditStatus::Pending {
        return Err(ValidationError::new("status", "is required"));
    }
    min_len("remarks", &form.remarks, MIN_REMARKS_LEN)
}
