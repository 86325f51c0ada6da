//! Wire schemas for the content-access routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::access::ContentAccess;
use crate::model::ContentFamily;

/// Request body for `POST /content/access`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    /// The catalog file to mint access for.
    #[serde(default)]
    pub product_file_id: Option<String>,
}

/// Response body for `POST /content/access`.
///
/// `success: false` with an `error` string is the soft "not configured"
/// shape, still served with HTTP 200: it reflects incomplete catalog data,
/// not a request problem.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessResponse {
    /// Whether a signed URL was issued.
    pub success: bool,

    /// Delivery family of the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentFamily>,

    /// The signed access URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_url: Option<String>,

    /// Unsigned embed URL (video grants).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,

    /// Sanitized file name (document grants).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Sanitized title (video grants).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Canonical video id (video grants).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,

    /// When the signed URL stops verifying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Soft-failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AccessResponse {
    /// The soft "not configured" shape.
    pub fn not_configured(message: &str) -> Self {
        Self {
            success: false,
            content_type: None,
            access_url: None,
            embed_url: None,
            file_name: None,
            title: None,
            video_id: None,
            expires_at: None,
            error: Some(message.to_string()),
        }
    }
}

impl From<ContentAccess> for AccessResponse {
    fn from(access: ContentAccess) -> Self {
        Self {
            success: true,
            content_type: Some(access.content_type),
            access_url: Some(access.access_url),
            embed_url: access.embed_url,
            file_name: access.file_name,
            title: access.title,
            video_id: access.video_id,
            expires_at: Some(access.expires_at),
            error: None,
        }
    }
}

/// Generic error response returned on failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
