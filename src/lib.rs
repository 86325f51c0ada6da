//! # Contentwarden
//!
//! **Signed, license-gated content delivery for digital storefronts.**
//!
//! Contentwarden decides, for every content-access request, whether to mint
//! a short-lived **HMAC-signed URL** for a Google Drive document or an
//! unlisted YouTube video - gated on a valid, unexpired license and a
//! per-user download ceiling - and verifies those URLs when they come back,
//! without ever exposing a permanent or reusable link.
//!
//! ## Features
//!
//! - **HMAC-SHA256 signed links** - deterministic, stateless capabilities
//!   bound to `(resource, name, expiry)`
//! - **Constant-time verification** - signature comparison never
//!   short-circuits, and expiry is checked before the MAC is touched
//! - **License gate** - entitlement scoped to a single product, with
//!   expiry-wins-over-status semantics
//! - **Download rate limiting** - fixed rolling window over an injectable
//!   store, swept periodically
//! - **Drop-in router** - `axum` routes for minting and for the two
//!   redirect endpoints, ready to merge into the storefront's server
//!
//! ## Quickstart
//!
//! ```no_run
//! use contentwarden::{
//!     AccessManager, DeliveryConfig, MemoryCatalog, MemoryLicenseLookup, MemoryRateLimitStore,
//! };
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), contentwarden::AccessError> {
//!     let config = DeliveryConfig::from_env()?;
//!     let catalog = Arc::new(MemoryCatalog::new());
//!     let licenses = Arc::new(MemoryLicenseLookup::new());
//!
//!     let manager = Arc::new(
//!         AccessManager::new(config, catalog, licenses)?
//!             .with_limit_store(Arc::new(MemoryRateLimitStore::new())),
//!     );
//!     let app = contentwarden::router(manager);
//!     // Merge `app` into the storefront's router and serve as usual.
//!     let _ = app;
//!     Ok(())
//! }
//! ```
//!
//! ## Trust Model
//!
//! A minted URL is a bearer capability: the redirect endpoints re-derive
//! the signature from query parameters and redirect on success, with no
//! license or session re-check. Short link lifetime (60 minutes for
//! documents, 120 for videos, configurable) substitutes for per-request
//! authorization. Links cannot be revoked early; they die at `expires`.
//!
//! Rate limiting is advisory and per-process unless a shared
//! [`RateLimitStore`] backend is plugged in.
//!
//! ## Configuration
//!
//! - `CONTENT_SIGNING_SECRET` - HMAC key, at least 32 characters (required)
//! - `CONTENT_MAX_DOWNLOADS_PER_HOUR` - per-user mint ceiling
//! - `CONTENT_DOCUMENT_EXPIRY_MINUTES` / `CONTENT_VIDEO_EXPIRY_MINUTES`
//! - `CONTENT_ALLOWED_TYPES`, `CONTENT_MAX_FILE_SIZE`,
//!   `CONTENT_MAX_FILE_NAME_LEN`, `CONTENT_BASE_URL`
//!
//! See [`DeliveryConfig`] for full documentation.

#![deny(missing_docs)]

// Core modules
pub mod clock;
pub mod config;
pub mod errors;

// Leaf components
pub mod link;
pub mod model;
pub mod sanitize;

// Crypto layer
pub mod crypto;

// Collaborators
pub mod catalog;
pub mod policy;

// Rate limiting
pub mod ratelimit;

// Orchestration (main public API)
pub mod access;

// HTTP surface
pub mod http;

// Re-exports for public API
pub use access::{AccessManager, ContentAccess, MintOutcome};
pub use catalog::{ContentCatalog, MemoryCatalog};
pub use clock::{Clock, SystemClock};
pub use config::DeliveryConfig;
pub use crypto::signer::LinkSigner;
pub use errors::AccessError;
pub use http::{router, AppState, AuthenticatedUser};
pub use model::{ContentFamily, ContentFile, ContentKind, License, LicenseStatus};
pub use policy::{LicenseGate, LicenseLookup, MemoryLicenseLookup};
pub use ratelimit::{DownloadLimiter, MemoryRateLimitStore, RateLimitStore};

#[cfg(any(test, feature = "test-seams"))]
pub use clock::MockClock;
