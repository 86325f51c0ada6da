//! Rate-limit record storage.
//!
//! The store is an injected abstraction so a shared backend (Redis, a SQL
//! counter table) can be substituted without touching the limiter. The
//! shipped backend is an in-process map, which is explicitly per-process:
//! horizontally scaled deployments under-enforce unless they plug in a
//! shared store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Request count and window boundary for one subject.
///
/// The count is only meaningful together with `reset_at`: a record whose
/// window has passed is treated as absent by the limiter and deleted by the
/// sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRecord {
    /// Requests admitted in the current window.
    pub count: u32,
    /// When the current window ends.
    pub reset_at: DateTime<Utc>,
}

/// Storage for per-subject rate-limit records.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// The current record for a subject, if any.
    async fn get(&self, subject: &str) -> Option<RateLimitRecord>;

    /// Bump an existing subject's count by one and return the updated
    /// record. Returns `None` when no record exists (the caller falls back
    /// to [`RateLimitStore::reset`]).
    async fn increment(&self, subject: &str) -> Option<RateLimitRecord>;

    /// Replace a subject's record, starting a fresh window.
    async fn reset(&self, subject: &str, record: RateLimitRecord);

    /// Delete all records whose window has passed. Returns how many were
    /// removed.
    async fn sweep(&self, now: DateTime<Utc>) -> usize;
}

/// In-memory rate-limit store.
#[derive(Debug, Default)]
pub struct MemoryRateLimitStore {
    records: RwLock<HashMap<String, RateLimitRecord>>,
}

impl MemoryRateLimitStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records (tests and diagnostics).
    pub fn len(&self) -> usize {
        self.records.read().expect("rate limit lock poisoned").len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RateLimitStore for MemoryRateLimitStore {
    async fn get(&self, subject: &str) -> Option<RateLimitRecord> {
        let records = self.records.read().expect("rate limit lock poisoned");
        records.get(subject).copied()
    }

    async fn increment(&self, subject: &str) -> Option<RateLimitRecord> {
        let mut records = self.records.write().expect("rate limit lock poisoned");
        records.get_mut(subject).map(|record| {
            record.count += 1;
            *record
        })
    }

    async fn reset(&self, subject: &str, record: RateLimitRecord) {
        let mut records = self.records.write().expect("rate limit lock poisoned");
        records.insert(subject.to_string(), record);
    }

    async fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.records.write().expect("rate limit lock poisoned");
        let before = records.len();
        records.retain(|_, record| record.reset_at >= now);
        before - records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, h, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn get_missing_subject() {
        let store = MemoryRateLimitStore::new();
        assert!(store.get("user-1").await.is_none());
    }

    #[tokio::test]
    async fn reset_then_increment() {
        let store = MemoryRateLimitStore::new();
        store
            .reset(
                "user-1",
                RateLimitRecord {
                    count: 1,
                    reset_at: at(13),
                },
            )
            .await;

        let updated = store.increment("user-1").await.unwrap();
        assert_eq!(updated.count, 2);
        assert_eq!(updated.reset_at, at(13));
    }

    #[tokio::test]
    async fn increment_missing_subject() {
        let store = MemoryRateLimitStore::new();
        assert!(store.increment("user-1").await.is_none());
    }

    #[tokio::test]
    async fn sweep_removes_only_passed_windows() {
        let store = MemoryRateLimitStore::new();
        store
            .reset(
                "stale",
                RateLimitRecord {
                    count: 5,
                    reset_at: at(11),
                },
            )
            .await;
        store
            .reset(
                "live",
                RateLimitRecord {
                    count: 5,
                    reset_at: at(14),
                },
            )
            .await;

        let removed = store.sweep(at(12)).await;
        assert_eq!(removed, 1);
        assert!(store.get("stale").await.is_none());
        assert!(store.get("live").await.is_some());
    }
}
