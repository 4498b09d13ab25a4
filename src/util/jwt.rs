//! Compact-token claim decoding and expiry checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never verifies signatures; it only reads the payload segment to
//! learn when the backend will start rejecting the token. Anything that does
//! not parse is treated exactly like a missing token.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value as JsonValue};

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Claims read from an unverified token payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    inner: Map<String, JsonValue>,
}

impl Claims {
    /// Gets a claim value by key.
    #[must_use]
    pub fn get_claim(&self, key: &str) -> Option<&JsonValue> {
        self.inner.get(key)
    }

    /// Expiry instant in Unix seconds, if the `exp` claim is numeric.
    #[must_use]
    pub fn exp(&self) -> Option<f64> {
        self.inner.get("exp").and_then(JsonValue::as_f64)
    }

    /// Subject claim, when present as a string.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.inner.get("sub").and_then(JsonValue::as_str)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, JsonValue> {
        &self.inner
    }
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// Returns `None` for a wrong segment count, invalid base64 (either alphabet,
/// padding optional), non-JSON bytes, or a payload that is not an object.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .ok()?;
    match serde_json::from_slice::<JsonValue>(&bytes).ok()? {
        JsonValue::Object(inner) => Some(Claims { inner }),
        _ => None,
    }
}

/// Whether `token` is unusable at `now` (Unix seconds).
///
/// Undecodable tokens and tokens without a numeric `exp` count as expired;
/// a token whose `exp` equals `now` is already expired.
#[must_use]
pub fn is_expired_at(token: &str, now: f64) -> bool {
    match decode_claims(token).and_then(|c| c.exp()) {
        Some(exp) => now >= exp,
        None => true,
    }
}
