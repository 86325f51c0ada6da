//! Contentwarden configuration.

use crate::model::{ContentFamily, ContentKind};
use crate::AccessError;

/// Minimum length of the signing secret in bytes.
///
/// The secret is an HMAC key, not a password; this floor just rules out
/// trivially brute-forceable key material.
pub const MIN_SECRET_LEN: usize = 32;

/// Configuration for the content-delivery core.
///
/// Loaded from the environment in deployments (see [`DeliveryConfig::from_env`])
/// and validated once, fail-fast, when the [`AccessManager`](crate::AccessManager)
/// is constructed.
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// HMAC-SHA256 signing secret. Must be at least [`MIN_SECRET_LEN`] bytes.
    pub signing_secret: String,

    /// Maximum size in bytes a catalog file may declare. Enforced by the
    /// catalog collaborator at authoring time; validated here so a
    /// misconfigured deployment fails at startup rather than serving.
    pub max_file_size: u64,

    /// Content kinds this deployment serves. A catalog record outside this
    /// set fails the mint hard (data-integrity error).
    pub allowed_content_types: Vec<ContentKind>,

    /// Per-user download ceiling within one rolling hour.
    pub max_downloads_per_hour: u32,

    /// Lifetime of signed document links, in minutes.
    pub document_expiry_minutes: i64,

    /// Lifetime of signed video links, in minutes. Longer than documents
    /// because viewing sessions run longer than a download click.
    pub video_expiry_minutes: i64,

    /// Maximum length of a sanitized display name embedded in a link.
    pub max_file_name_len: usize,

    /// Prefix for minted access URLs. Empty means host-relative paths,
    /// which is what you want when the router is merged into the
    /// storefront's own server.
    pub base_url: String,
}

impl DeliveryConfig {
    /// Create a configuration with the given secret and default settings:
    /// 50 MiB file ceiling, all content kinds allowed, 10 downloads per
    /// hour, 60-minute document links, 120-minute video links.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            max_file_size: 50 * 1024 * 1024,
            allowed_content_types: vec![
                ContentKind::Pdf,
                ContentKind::Docx,
                ContentKind::Video,
                ContentKind::File,
            ],
            max_downloads_per_hour: 10,
            document_expiry_minutes: 60,
            video_expiry_minutes: 120,
            max_file_name_len: 100,
            base_url: String::new(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// `CONTENT_SIGNING_SECRET` is required; everything else falls back to
    /// the defaults of [`DeliveryConfig::new`]. Recognized variables:
    /// `CONTENT_MAX_FILE_SIZE`, `CONTENT_ALLOWED_TYPES` (comma-separated
    /// kind tags), `CONTENT_MAX_DOWNLOADS_PER_HOUR`,
    /// `CONTENT_DOCUMENT_EXPIRY_MINUTES`, `CONTENT_VIDEO_EXPIRY_MINUTES`,
    /// `CONTENT_MAX_FILE_NAME_LEN`, `CONTENT_BASE_URL`.
    pub fn from_env() -> Result<Self, AccessError> {
        let secret = std::env::var("CONTENT_SIGNING_SECRET")
            .map_err(|_| AccessError::ConfigError("CONTENT_SIGNING_SECRET is not set".into()))?;

        let mut config = Self::new(secret);

        if let Some(raw) = env_var("CONTENT_MAX_FILE_SIZE") {
            config.max_file_size = parse_env("CONTENT_MAX_FILE_SIZE", &raw)?;
        }
        if let Some(raw) = env_var("CONTENT_ALLOWED_TYPES") {
            config.allowed_content_types = parse_allowed_types(&raw)?;
        }
        if let Some(raw) = env_var("CONTENT_MAX_DOWNLOADS_PER_HOUR") {
            config.max_downloads_per_hour = parse_env("CONTENT_MAX_DOWNLOADS_PER_HOUR", &raw)?;
        }
        if let Some(raw) = env_var("CONTENT_DOCUMENT_EXPIRY_MINUTES") {
            config.document_expiry_minutes = parse_env("CONTENT_DOCUMENT_EXPIRY_MINUTES", &raw)?;
        }
        if let Some(raw) = env_var("CONTENT_VIDEO_EXPIRY_MINUTES") {
            config.video_expiry_minutes = parse_env("CONTENT_VIDEO_EXPIRY_MINUTES", &raw)?;
        }
        if let Some(raw) = env_var("CONTENT_MAX_FILE_NAME_LEN") {
            config.max_file_name_len = parse_env("CONTENT_MAX_FILE_NAME_LEN", &raw)?;
        }
        if let Some(raw) = env_var("CONTENT_BASE_URL") {
            config.base_url = raw;
        }

        Ok(config)
    }

    /// Validate configuration for obvious errors.
    ///
    /// These are constructor checks, not runtime checks: a deployment with
    /// a short secret or an empty type set must fail before serving a
    /// single request.
    pub fn validate(&self) -> Result<(), AccessError> {
        if self.signing_secret.len() < MIN_SECRET_LEN {
            return Err(AccessError::ConfigError(format!(
                "signing secret must be at least {} characters, got {}",
                MIN_SECRET_LEN,
                self.signing_secret.len()
            )));
        }
        if self.max_file_size == 0 {
            return Err(AccessError::ConfigError(
                "max_file_size must be positive".to_string(),
            ));
        }
        if self.allowed_content_types.is_empty() {
            return Err(AccessError::ConfigError(
                "allowed_content_types cannot be empty".to_string(),
            ));
        }
        if self.max_downloads_per_hour == 0 {
            return Err(AccessError::ConfigError(
                "max_downloads_per_hour must be positive".to_string(),
            ));
        }
        if self.document_expiry_minutes <= 0 || self.video_expiry_minutes <= 0 {
            return Err(AccessError::ConfigError(
                "expiry windows must be positive".to_string(),
            ));
        }
        if self.max_file_name_len == 0 {
            return Err(AccessError::ConfigError(
                "max_file_name_len must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The signed-link lifetime for a content family.
    pub fn expiry_for(&self, family: ContentFamily) -> chrono::Duration {
        match family {
            ContentFamily::Document => chrono::Duration::minutes(self.document_expiry_minutes),
            ContentFamily::Video => chrono::Duration::minutes(self.video_expiry_minutes),
        }
    }

    /// Whether this deployment serves the given content kind.
    pub fn allows(&self, kind: ContentKind) -> bool {
        self.allowed_content_types.contains(&kind)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AccessError> {
    raw.parse()
        .map_err(|_| AccessError::ConfigError(format!("{name} has invalid value: {raw}")))
}

/// Parse a comma-separated list of content-kind tags.
fn parse_allowed_types(raw: &str) -> Result<Vec<ContentKind>, AccessError> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| {
            ContentKind::parse(tag)
                .ok_or_else(|| AccessError::ConfigError(format!("unknown content type: {tag}")))
        })
        .collect()
}
