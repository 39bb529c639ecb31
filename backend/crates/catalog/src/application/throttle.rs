//! Per-client throttling shared by the catalog use cases

use platform::client::ClientKey;
use platform::clock::SharedClock;
use platform::rate_limit::{RateLimitConfig, RateLimitResult, RateLimitStore};

use crate::error::{CatalogError, CatalogResult};

/// Count one request for `client`, failing with `RateLimited` once the
/// window is used up
pub async fn enforce<L>(
    limiter: &L,
    clock: &SharedClock,
    client: &ClientKey,
    config: &RateLimitConfig,
) -> CatalogResult<RateLimitResult>
where
    L: RateLimitStore,
{
    let result = limiter.check_and_increment(client, config).await?;

    if !result.allowed {
        tracing::debug!(%client, reset_at_ms = result.reset_at_ms, "Client over its window");
        return Err(CatalogError::RateLimited {
            retry_after_secs: result.retry_after_secs(clock.now_ms()),
        });
    }

    Ok(result)
}
