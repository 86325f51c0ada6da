//! Contentwarden error types.

use thiserror::Error;

/// Errors that can occur while minting or verifying content access.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Configuration is invalid (missing/short secret, empty type set, ...).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No authenticated user on the request.
    #[error("Authentication required")]
    Unauthorized,

    /// The request carried no content-file reference.
    #[error("Product file ID is required")]
    MissingFileRef,

    /// The referenced content file does not exist.
    #[error("Content not found")]
    NotFound,

    /// The user holds no valid license for the content's product.
    #[error("Access denied. Please purchase this content.")]
    LicenseDenied,

    /// A share link could not be reduced to a canonical identifier.
    #[error("Invalid link format: {0}")]
    InvalidLinkFormat(String),

    /// The signed link's expiry has passed.
    #[error("Access link has expired")]
    Expired,

    /// The presented signature does not match the recomputed one.
    #[error("Invalid access signature")]
    SignatureInvalid,

    /// The per-subject download ceiling was hit.
    #[error("Too many download requests")]
    RateLimited {
        /// Seconds until the current window resets.
        retry_after: u64,
    },

    /// A collaborator lookup (catalog, licenses) failed.
    #[error("Lookup error: {0}")]
    Downstream(String),

    /// The content record carries a type this deployment does not serve.
    ///
    /// This is a catalog data-integrity problem, not a client error.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
}

impl AccessError {
    /// Whether this error reflects a server-side fault rather than a bad
    /// request. Server faults are logged in full and surfaced to clients
    /// only as a generic message.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AccessError::ConfigError(_)
                | AccessError::Downstream(_)
                | AccessError::UnsupportedContentType(_)
                | AccessError::InvalidLinkFormat(_)
        )
    }
}
