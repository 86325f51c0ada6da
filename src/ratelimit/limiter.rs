//! Fixed-window download limiter.
//!
//! Tracks per-subject request counts in a rolling window and admits or
//! denies against a configured ceiling. The limiter is advisory: the
//! get-then-increment sequence is not atomic across concurrent requests
//! from one subject, so a tight burst may slightly over-admit. That is an
//! accepted property of this layer, not a bug to paper over here; exact
//! enforcement belongs to a store backend with atomic counters.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::interval;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::ratelimit::store::{RateLimitRecord, RateLimitStore};

/// How often the background sweep deletes passed windows.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request is admitted.
    pub allowed: bool,
    /// Requests left in the current window. Not reported on denial.
    pub remaining: Option<u32>,
    /// Seconds until the window resets. Only reported on denial.
    pub retry_after_secs: Option<u64>,
}

/// Per-subject fixed-window rate limiter.
pub struct DownloadLimiter {
    store: Arc<dyn RateLimitStore>,
    limit: u32,
    window: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl DownloadLimiter {
    /// Create a limiter admitting `limit` requests per subject per `window`.
    pub fn new(store: Arc<dyn RateLimitStore>, limit: u32, window: chrono::Duration) -> Self {
        Self {
            store,
            limit,
            window,
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a limiter with a custom clock (for testing).
    #[cfg(any(test, feature = "test-seams"))]
    pub fn new_with_clock(
        store: Arc<dyn RateLimitStore>,
        limit: u32,
        window: chrono::Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            limit,
            window,
            clock,
        }
    }

    /// Check the subject's budget and consume one request from it.
    ///
    /// A missing or lapsed record starts a fresh window at count 1. A full
    /// window denies without reporting a remaining count.
    pub async fn check_and_consume(&self, subject: &str) -> RateLimitDecision {
        let now = self.clock.now_utc();

        match self.store.get(subject).await {
            Some(record) if now <= record.reset_at => {
                if record.count >= self.limit {
                    debug!(subject, count = record.count, "download ceiling hit");
                    return RateLimitDecision {
                        allowed: false,
                        remaining: None,
                        retry_after_secs: Some(retry_after(record.reset_at, now)),
                    };
                }

                // The record can disappear between get and increment (sweep,
                // or a concurrent fresh window); fall back to a new window.
                let count = match self.store.increment(subject).await {
                    Some(updated) => updated.count,
                    None => {
                        self.start_window(subject, now).await;
                        1
                    }
                };

                RateLimitDecision {
                    allowed: true,
                    remaining: Some(self.limit.saturating_sub(count)),
                    retry_after_secs: None,
                }
            }
            _ => {
                // No record, or the window has passed: start fresh.
                self.start_window(subject, now).await;
                RateLimitDecision {
                    allowed: true,
                    remaining: Some(self.limit.saturating_sub(1)),
                    retry_after_secs: None,
                }
            }
        }
    }

    async fn start_window(&self, subject: &str, now: DateTime<Utc>) {
        self.store
            .reset(
                subject,
                RateLimitRecord {
                    count: 1,
                    reset_at: now + self.window,
                },
            )
            .await;
    }

    /// Spawn the periodic sweep deleting records past their reset time,
    /// bounding memory growth. Runs until the returned handle is aborted.
    pub fn spawn_sweeper(limiter: Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(every);
            // The first tick completes immediately; skip it so an idle
            // process doesn't sweep at startup.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let now = limiter.clock.now_utc();
                let removed = limiter.store.sweep(now).await;
                if removed > 0 {
                    debug!(removed, "swept lapsed rate-limit records");
                }
            }
        })
    }
}

fn retry_after(reset_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (reset_at - now).num_seconds().max(1) as u64
}
