//! Per-subject download rate limiting.

pub mod limiter;
pub mod store;

pub use limiter::{DownloadLimiter, RateLimitDecision, SWEEP_INTERVAL};
pub use store::{MemoryRateLimitStore, RateLimitRecord, RateLimitStore};
