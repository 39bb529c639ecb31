//! Domain Value Objects
//!
//! Immutable value types for the access domain.

use std::fmt;

use thiserror::Error;

/// Signed, time-limited access capability
///
/// Wire form is `<expires_at_secs>.<signature>`, the signature being the
/// lowercase hex HMAC-SHA256 of the decimal expiry under the server secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    expires_at_secs: i64,
    signature: String,
}

impl AccessToken {
    pub(crate) fn new(expires_at_secs: i64, signature: String) -> Self {
        Self {
            expires_at_secs,
            signature,
        }
    }

    pub fn expires_at_secs(&self) -> i64 {
        self.expires_at_secs
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Cookie value form
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.expires_at_secs, self.signature)
    }
}

/// Why a presented token was refused
///
/// Only ever logged. Clients see a plain 401 whichever variant it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("no signing secret configured")]
    NoSecret,
    #[error("access cookie not present")]
    Missing,
    #[error("token has no '.' separator")]
    Malformed,
    #[error("expiry is not a positive integer")]
    InvalidExpiry,
    #[error("token expired")]
    Expired,
    #[error("signature mismatch")]
    SignatureMismatch,
}
