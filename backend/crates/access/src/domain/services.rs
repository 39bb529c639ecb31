//! Domain Services
//!
//! Pure logic: signing and verifying access tokens, ordering the listing.

use std::cmp::Ordering;

use platform::crypto::{constant_time_eq, hmac_sha256_hex};

use crate::domain::entities::Skill;
use crate::domain::value_objects::{AccessToken, TokenRejection};

/// Sign an expiry timestamp
pub fn sign_token(expires_at_secs: i64, secret: &[u8]) -> AccessToken {
    let payload = expires_at_secs.to_string();
    let signature = hmac_sha256_hex(secret, payload.as_bytes());
    AccessToken::new(expires_at_secs, signature)
}

/// Verify a cookie value at `now_ms`
///
/// Checks run in order: shape, expiry parse, expiry time, signature. The
/// MAC is recomputed over the payload text exactly as received.
pub fn verify_token(
    value: &str,
    secret: &[u8],
    now_ms: i64,
) -> Result<AccessToken, TokenRejection> {
    let (payload, signature) = value.split_once('.').ok_or(TokenRejection::Malformed)?;

    let expires_at_secs: i64 = payload.parse().map_err(|_| TokenRejection::InvalidExpiry)?;
    if expires_at_secs <= 0 {
        return Err(TokenRejection::InvalidExpiry);
    }

    if now_ms > expires_at_secs.saturating_mul(1000) {
        return Err(TokenRejection::Expired);
    }

    let expected = hmac_sha256_hex(secret, payload.as_bytes());
    if !constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
        return Err(TokenRejection::SignatureMismatch);
    }

    Ok(AccessToken::new(expires_at_secs, signature.to_string()))
}

/// Most downloaded first; skills without a download count go last
pub fn order_by_downloads(skills: &mut [Skill]) {
    skills.sort_by(|a, b| match (a.downloads, b.downloads) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
