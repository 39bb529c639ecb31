//! Rate Limiting Infrastructure
//!
//! Fixed-window counters keyed by [`ClientKey`].
//!
//! A window opens on a key's first request and lasts `window`; once the
//! clock passes its reset time the next request replaces the counter with a
//! fresh one. Windows do not slide, so a client can get up to
//! `2 * max_requests` through around a window boundary.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::ClientKey;
use crate::clock::SharedClock;

/// Rate limit configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window (0 denies everything)
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 30,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, 60)
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

impl RateLimitResult {
    /// Whole seconds until the window resets, at least 1
    pub fn retry_after_secs(&self, now_ms: i64) -> u64 {
        let wait_ms = (self.reset_at_ms - now_ms).max(0) as u64;
        wait_ms.div_ceil(1000).max(1)
    }
}

/// Rate limit backend failure
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit backend unavailable: {0}")]
    Backend(String),
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Count a request for `key` and report whether it may proceed
    async fn check_and_increment(
        &self,
        key: &ClientKey,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError>;
}

/// One client's counter for the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounter {
    pub count: u32,
    pub reset_at_ms: i64,
}

/// In-process fixed-window store
///
/// Cloning yields another handle to the same table. Counters live only as
/// long as the process and are not shared between instances.
#[derive(Debug, Clone)]
pub struct InMemoryRateLimitStore {
    counters: Arc<DashMap<String, WindowCounter>>,
    clock: SharedClock,
}

impl InMemoryRateLimitStore {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            counters: Arc::new(DashMap::new()),
            clock,
        }
    }

    /// Returns `true` if the request is allowed, `false` if rate-limited
    pub fn allow(&self, key: &ClientKey, max_requests: u32, window_ms: i64) -> bool {
        self.check(key, max_requests, window_ms).allowed
    }

    /// Check and count one request
    ///
    /// The map entry stays locked for the whole read-modify-write, so two
    /// requests for the same key cannot both take the last slot.
    pub fn check(&self, key: &ClientKey, max_requests: u32, window_ms: i64) -> RateLimitResult {
        let now = self.clock.now_ms();

        match self.counters.entry(key.as_str().to_owned()) {
            Entry::Vacant(slot) => {
                let (counter, result) = open_window(now, max_requests, window_ms);
                slot.insert(counter);
                result
            }
            Entry::Occupied(mut slot) => {
                let counter = slot.get_mut();

                if now > counter.reset_at_ms {
                    let (fresh, result) = open_window(now, max_requests, window_ms);
                    *counter = fresh;
                    return result;
                }

                if counter.count >= max_requests {
                    return RateLimitResult {
                        allowed: false,
                        remaining: 0,
                        reset_at_ms: counter.reset_at_ms,
                    };
                }

                counter.count += 1;
                RateLimitResult {
                    allowed: true,
                    remaining: max_requests - counter.count,
                    reset_at_ms: counter.reset_at_ms,
                }
            }
        }
    }

    /// Snapshot of a key's counter
    pub fn counter(&self, key: &ClientKey) -> Option<WindowCounter> {
        self.counters.get(key.as_str()).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Drop counters whose window has already passed, returning how many
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let before = self.counters.len();
        self.counters.retain(|_, counter| now <= counter.reset_at_ms);
        before.saturating_sub(self.counters.len())
    }

    /// Periodically purge expired counters on the tokio runtime
    pub fn spawn_purge_task(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let removed = store.purge_expired();
                if removed > 0 {
                    tracing::debug!(removed, remaining = store.len(), "Purged rate limit counters");
                }
            }
        })
    }
}

fn open_window(now: i64, max_requests: u32, window_ms: i64) -> (WindowCounter, RateLimitResult) {
    let allowed = max_requests > 0;
    let count = u32::from(allowed);
    let counter = WindowCounter {
        count,
        reset_at_ms: now + window_ms,
    };
    let result = RateLimitResult {
        allowed,
        remaining: max_requests.saturating_sub(count),
        reset_at_ms: counter.reset_at_ms,
    };
    (counter, result)
}

impl RateLimitStore for InMemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &ClientKey,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError> {
        Ok(self.check(key, config.max_requests, config.window_ms()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    fn store_at(now_ms: i64) -> (InMemoryRateLimitStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(now_ms));
        (InMemoryRateLimitStore::new(clock.clone()), clock)
    }

    #[test]
    fn test_allows_up_to_ceiling_then_denies() {
        let (store, _clock) = store_at(1_000);
        let key = ClientKey::new("203.0.113.7");

        assert!(store.allow(&key, 3, 60_000));
        assert!(store.allow(&key, 3, 60_000));
        assert!(store.allow(&key, 3, 60_000));
        assert!(!store.allow(&key, 3, 60_000));
        assert!(!store.allow(&key, 3, 60_000));

        // Denials do not push the count past the ceiling
        assert_eq!(store.counter(&key).unwrap().count, 3);
    }

    #[test]
    fn test_window_reset_replaces_counter() {
        let (store, clock) = store_at(1_000);
        let key = ClientKey::new("203.0.113.7");

        for _ in 0..3 {
            assert!(store.allow(&key, 3, 60_000));
        }
        assert!(!store.allow(&key, 3, 60_000));

        // Exactly at the reset time the old window still applies
        clock.set_ms(61_000);
        assert!(!store.allow(&key, 3, 60_000));

        clock.set_ms(61_001);
        assert!(store.allow(&key, 3, 60_000));
        let counter = store.counter(&key).unwrap();
        assert_eq!(counter.count, 1);
        assert_eq!(counter.reset_at_ms, 121_001);
    }

    #[test]
    fn test_keys_are_independent() {
        let (store, _clock) = store_at(0);
        let noisy = ClientKey::new("198.51.100.1");
        let quiet = ClientKey::new("198.51.100.2");

        assert!(store.allow(&noisy, 1, 60_000));
        assert!(!store.allow(&noisy, 1, 60_000));

        assert!(store.allow(&quiet, 1, 60_000));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remaining_and_reset_reporting() {
        let (store, clock) = store_at(10_000);
        let key = ClientKey::unknown();

        let first = store.check(&key, 2, 5_000);
        assert_eq!(
            first,
            RateLimitResult {
                allowed: true,
                remaining: 1,
                reset_at_ms: 15_000
            }
        );

        let second = store.check(&key, 2, 5_000);
        assert!(second.allowed);
        assert_eq!(second.remaining, 0);

        clock.advance_ms(2_500);
        let denied = store.check(&key, 2, 5_000);
        assert!(!denied.allowed);
        assert_eq!(denied.retry_after_secs(clock.now_ms()), 3);
    }

    #[test]
    fn test_zero_ceiling_denies_everything() {
        let (store, _clock) = store_at(0);
        let key = ClientKey::new("192.0.2.1");

        assert!(!store.allow(&key, 0, 60_000));
        assert!(!store.allow(&key, 0, 60_000));
        assert_eq!(store.counter(&key).unwrap().count, 0);
    }

    #[test]
    fn test_burst_across_boundary() {
        let (store, clock) = store_at(0);
        let key = ClientKey::new("192.0.2.1");

        // Two at the tail of one window, two more right after it resets
        assert!(store.allow(&key, 2, 1_000));
        clock.set_ms(1_000);
        assert!(store.allow(&key, 2, 1_000));
        clock.set_ms(1_001);
        assert!(store.allow(&key, 2, 1_000));
        assert!(store.allow(&key, 2, 1_000));
        assert!(!store.allow(&key, 2, 1_000));
    }

    #[test]
    fn test_purge_expired() {
        let (store, clock) = store_at(0);
        store.allow(&ClientKey::new("a"), 5, 1_000);
        clock.set_ms(500);
        store.allow(&ClientKey::new("b"), 5, 1_000);

        clock.set_ms(1_200);
        assert_eq!(store.purge_expired(), 1);
        assert!(store.counter(&ClientKey::new("a")).is_none());
        assert!(store.counter(&ClientKey::new("b")).is_some());
    }

    #[test]
    fn test_retry_after_is_at_least_one_second() {
        let result = RateLimitResult {
            allowed: false,
            remaining: 0,
            reset_at_ms: 1_000,
        };
        assert_eq!(result.retry_after_secs(1_000), 1);
        assert_eq!(result.retry_after_secs(5_000), 1);
        assert_eq!(result.retry_after_secs(0), 1);
        assert_eq!(result.retry_after_secs(-1), 2);
    }

    #[tokio::test]
    async fn test_store_trait() {
        let (store, _clock) = store_at(0);
        let config = RateLimitConfig::new(1, 60);
        let key = ClientKey::new("192.0.2.1");

        let first = RateLimitStore::check_and_increment(&store, &key, &config)
            .await
            .unwrap();
        let second = RateLimitStore::check_and_increment(&store, &key, &config)
            .await
            .unwrap();
        assert!(first.allowed);
        assert!(!second.allowed);
    }
}
