//! Application Configuration
//!
//! Configuration for the access gate.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::crypto::SecretBytes;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Access gate configuration
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Cookie carrying the signed token
    pub cookie_name: String,
    /// How long an issued token stays valid (also the cookie Max-Age)
    pub token_ttl: Duration,
    /// Shared page password; `None` leaves the gate unusable
    pub page_password: Option<SecretBytes>,
    /// Dedicated signing secret; falls back to the page password
    pub cookie_secret: Option<SecretBytes>,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            cookie_name: "cc_skills_ok".to_string(),
            token_ttl: Duration::from_secs(3600),
            page_password: None,
            cookie_secret: None,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AccessConfig {
    /// Build from the raw configured values; empty strings count as unset
    pub fn from_values(
        page_password: Option<String>,
        cookie_secret: Option<String>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            page_password: page_password.and_then(SecretBytes::from_non_empty),
            cookie_secret: cookie_secret.and_then(SecretBytes::from_non_empty),
            cookie_secure,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development(page_password: &str) -> Self {
        Self::from_values(Some(page_password.to_string()), None, false)
    }

    /// Key used to sign and verify tokens
    pub fn signing_secret(&self) -> Option<&SecretBytes> {
        self.cookie_secret.as_ref().or(self.page_password.as_ref())
    }

    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Cookie attributes for the access cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }
}
