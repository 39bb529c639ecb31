//! Clear Access Use Case
//!
//! Logout. Tokens are never tracked server-side, so all there is to do is
//! tell the browser to drop the cookie.

use crate::application::config::AccessConfig;

/// `Set-Cookie` value that expires the access cookie immediately
pub fn clear_access_cookie(config: &AccessConfig) -> String {
    tracing::info!("CC skills access cookie cleared");
    config.cookie().build_delete_cookie()
}
