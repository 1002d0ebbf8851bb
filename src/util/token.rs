//! Bearer-token expiry helpers.
//!
//! The auth endpoints hand out JWTs. Only the payload's `exp` claim is read
//! here; signature checks belong to the data platform.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Expiry of a JWT in ms since the epoch, or `None` when it cannot be read.
pub fn token_expiry_ms(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    exp.checked_mul(1000)
}

/// True when the token is unreadable or expires within `skew_ms` of `now_ms`.
pub fn is_token_expired(token: &str, skew_ms: u64, now_ms: i64) -> bool {
    let Some(expiry) = token_expiry_ms(token) else {
        return true;
    };
    let skew = i64::try_from(skew_ms).unwrap_or(i64::MAX);
    now_ms.saturating_add(skew) >= expiry
}
