//! Check Access Use Case

use std::sync::Arc;

use platform::clock::SharedClock;
use platform::cookie::find_cookie;

use crate::application::config::AccessConfig;
use crate::domain::services::verify_token;
use crate::domain::value_objects::{AccessToken, TokenRejection};

/// Check Access Use Case
pub struct CheckAccessUseCase {
    config: Arc<AccessConfig>,
    clock: SharedClock,
}

impl CheckAccessUseCase {
    pub fn new(config: Arc<AccessConfig>, clock: SharedClock) -> Self {
        Self { config, clock }
    }

    /// Whether the raw `Cookie` header carries a valid access token
    ///
    /// Fails closed. The reason for a refusal is logged, not returned.
    pub fn is_valid(&self, cookie_header: Option<&str>) -> bool {
        match self.check(cookie_header) {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!(%reason, "Access cookie rejected");
                false
            }
        }
    }

    /// Verify and return the token, or say why it was refused
    pub fn check(&self, cookie_header: Option<&str>) -> Result<AccessToken, TokenRejection> {
        let secret = self.config.signing_secret().ok_or(TokenRejection::NoSecret)?;

        let value = cookie_header
            .and_then(|header| find_cookie(header, &self.config.cookie_name))
            .ok_or(TokenRejection::Missing)?;

        verify_token(value, secret.expose(), self.clock.now_ms())
    }
}
