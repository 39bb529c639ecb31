//! Issue Access Use Case
//!
//! Trades the shared password for a signed access cookie.

use std::sync::Arc;

use platform::clock::SharedClock;
use platform::crypto::constant_time_eq;

use crate::application::config::AccessConfig;
use crate::domain::services::sign_token;
use crate::domain::value_objects::AccessToken;
use crate::error::{AccessError, AccessResult};

/// Output of a successful password check
#[derive(Debug, Clone)]
pub struct IssuedAccess {
    pub token: AccessToken,
    /// Full `Set-Cookie` value carrying the token
    pub set_cookie: String,
}

/// Issue Access Use Case
pub struct IssueAccessUseCase {
    config: Arc<AccessConfig>,
    clock: SharedClock,
}

impl IssueAccessUseCase {
    pub fn new(config: Arc<AccessConfig>, clock: SharedClock) -> Self {
        Self { config, clock }
    }

    pub fn execute(&self, password: &str) -> AccessResult<IssuedAccess> {
        let expected = self
            .config
            .page_password
            .as_ref()
            .ok_or(AccessError::Misconfigured)?;

        if password.is_empty() || !constant_time_eq(password.as_bytes(), expected.expose()) {
            return Err(AccessError::InvalidCredentials);
        }

        let secret = self
            .config
            .signing_secret()
            .ok_or(AccessError::Misconfigured)?;

        let expires_at_secs = self.clock.now_secs() + self.config.token_ttl_secs();
        let token = sign_token(expires_at_secs, secret.expose());
        let set_cookie = self.config.cookie().build_set_cookie(&token.encode());

        tracing::info!(expires_at_secs, "Issued CC skills access cookie");

        Ok(IssuedAccess { token, set_cookie })
    }
}
