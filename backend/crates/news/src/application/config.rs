//! Application Configuration

use platform::rate_limit::RateLimitConfig;

/// News configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsConfig {
    /// Limit for `GET /api/news`
    pub list_limit: RateLimitConfig,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self::per_minute(30)
    }
}

impl NewsConfig {
    pub fn per_minute(list_max: u32) -> Self {
        Self {
            list_limit: RateLimitConfig::per_minute(list_max),
        }
    }

    /// Create config for development (relaxed limits)
    pub fn development() -> Self {
        Self::per_minute(300)
    }
}
