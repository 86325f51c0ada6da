//! Catalog and entitlement data shapes consumed from external collaborators.
//!
//! `ContentFile` records are authored by the catalog management side of the
//! storefront; `License` records are written by order fulfillment. This core
//! only reads both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content-type tag on a catalog file.
///
/// A closed set: anything else in the catalog is a data-integrity problem
/// and is rejected hard at mint time rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// PDF document, delivered from Google Drive.
    Pdf,
    /// Word document, delivered from Google Drive.
    Docx,
    /// Unlisted YouTube video.
    Video,
    /// Any other downloadable file, delivered from Google Drive.
    File,
}

impl ContentKind {
    /// The delivery family this kind belongs to.
    ///
    /// The family is the single dispatch point for parser, expiry window,
    /// and redirect target; nothing downstream re-switches on the raw kind.
    pub fn family(self) -> ContentFamily {
        match self {
            ContentKind::Pdf | ContentKind::Docx | ContentKind::File => ContentFamily::Document,
            ContentKind::Video => ContentFamily::Video,
        }
    }

    /// The catalog tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Pdf => "pdf",
            ContentKind::Docx => "docx",
            ContentKind::Video => "video",
            ContentKind::File => "file",
        }
    }

    /// Parse a catalog tag. Returns `None` for unknown tags.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "pdf" => Some(ContentKind::Pdf),
            "docx" => Some(ContentKind::Docx),
            "video" => Some(ContentKind::Video),
            "file" => Some(ContentKind::File),
            _ => None,
        }
    }
}

/// The document/video split that determines which parser, expiry window,
/// and redirect target apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFamily {
    /// Google Drive backed files (pdf, docx, generic file).
    Document,
    /// YouTube backed videos.
    Video,
}

/// A catalog file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFile {
    /// Catalog identifier for this file.
    pub id: String,

    /// Display name shown to buyers (also embedded in signed links after
    /// sanitization).
    pub display_name: String,

    /// Content-type tag.
    pub kind: ContentKind,

    /// External share link (Google Drive or YouTube, depending on kind).
    /// `None` means the catalog entry was created but never configured.
    #[serde(default)]
    pub external_link: Option<String>,

    /// Whether a license is required to access this file.
    pub requires_license: bool,

    /// The product this file belongs to.
    pub product_id: String,
}

/// Lifecycle status of a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    /// License is live.
    Active,
    /// License ran past its expiry.
    Expired,
    /// License is temporarily suspended.
    Suspended,
    /// License was cancelled/refunded.
    Cancelled,
}

/// An entitlement record granting a user access to one product's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// License identifier.
    pub id: String,

    /// The owning user.
    pub user_id: String,

    /// The product this license covers. A license grants access to exactly
    /// this product, never its siblings.
    pub product_id: String,

    /// Lifecycle status.
    pub status: LicenseStatus,

    /// Expiry time. `None` means lifetime access.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl License {
    /// Whether this license is live at `now`.
    ///
    /// Expiry always wins over status: an `Active` license with a past
    /// `expires_at` does not grant access. No expiry means lifetime access.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        if self.status != LicenseStatus::Active {
            return false;
        }
        match self.expires_at {
            Some(expires_at) => expires_at > now,
            None => true,
        }
    }
}
