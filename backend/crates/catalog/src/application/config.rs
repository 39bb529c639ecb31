//! Application Configuration
//!
//! Per-route rate limits for the public catalog.

use platform::rate_limit::RateLimitConfig;

/// Catalog configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Limit for `GET /api/tools`
    pub list_limit: RateLimitConfig,
    /// Limit for `POST /api/tools/search`
    pub search_limit: RateLimitConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            list_limit: RateLimitConfig::per_minute(60),
            search_limit: RateLimitConfig::per_minute(30),
        }
    }
}

impl CatalogConfig {
    /// Build from per-minute request ceilings
    pub fn per_minute(list_max: u32, search_max: u32) -> Self {
        Self {
            list_limit: RateLimitConfig::per_minute(list_max),
            search_limit: RateLimitConfig::per_minute(search_max),
        }
    }

    /// Create config for development (relaxed limits)
    pub fn development() -> Self {
        Self::per_minute(600, 300)
    }
}
