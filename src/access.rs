//! Access Manager - the mint pipeline and stateless link verifiers.
//!
//! Minting walks the request through authentication, input validation,
//! the download limiter, catalog resolution, the license gate, and finally
//! family dispatch to a signed URL. Verification is the inverse half:
//! re-derive the canonical bytes from query parameters and check expiry and
//! signature, with no catalog, license, or session lookup - the signature
//! IS the capability.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::catalog::ContentCatalog;
use crate::clock::{Clock, SystemClock};
use crate::config::DeliveryConfig;
use crate::crypto::message::{document_message, video_message};
use crate::crypto::signer::LinkSigner;
use crate::link::{parse_drive_link, parse_youtube_link};
use crate::model::{ContentFamily, ContentFile};
use crate::policy::{LicenseGate, LicenseLookup};
use crate::ratelimit::{DownloadLimiter, RateLimitStore};
use crate::sanitize::sanitize_file_name;
use crate::AccessError;

/// A minted, signed content grant.
#[derive(Debug, Clone)]
pub struct ContentAccess {
    /// Which delivery family was granted.
    pub content_type: ContentFamily,

    /// The signed access URL (path + query; prefixed with the configured
    /// base URL when one is set).
    pub access_url: String,

    /// Unsigned direct embed URL. Video grants only; the upstream
    /// unlisted-link semantics are protection enough for the embed surface.
    pub embed_url: Option<String>,

    /// Sanitized file name. Document grants only.
    pub file_name: Option<String>,

    /// Sanitized title. Video grants only.
    pub title: Option<String>,

    /// Canonical video id. Video grants only.
    pub video_id: Option<String>,

    /// When the signed URL stops verifying.
    pub expires_at: DateTime<Utc>,
}

/// Result of a mint request that passed all hard gates.
#[derive(Debug, Clone)]
pub enum MintOutcome {
    /// A signed URL was issued.
    Granted(ContentAccess),

    /// The catalog record exists and the user is entitled, but no external
    /// link was ever configured. A content-authoring gap, not a client
    /// error - the HTTP layer reports it as a soft failure, not a 4xx.
    NotConfigured {
        /// User-facing message ("Document not configured" / "Video not
        /// configured").
        message: &'static str,
    },
}

/// Orchestrates content-access minting and link verification.
///
/// Create one per deployment and share it behind an [`Arc`]; all state it
/// holds is either immutable configuration or the injected collaborators.
pub struct AccessManager {
    config: DeliveryConfig,
    signer: LinkSigner,
    catalog: Arc<dyn ContentCatalog>,
    gate: LicenseGate,
    limiter: Option<Arc<DownloadLimiter>>,
    clock: Arc<dyn Clock>,
}

impl AccessManager {
    /// Create a manager over the given collaborators.
    ///
    /// Fails fast on invalid configuration (short secret, empty allowed
    /// set, non-positive ceilings); nothing is served from a misconfigured
    /// deployment.
    pub fn new(
        config: DeliveryConfig,
        catalog: Arc<dyn ContentCatalog>,
        licenses: Arc<dyn LicenseLookup>,
    ) -> Result<Self, AccessError> {
        config.validate()?;
        let signer = LinkSigner::new(config.signing_secret.as_bytes());

        Ok(Self {
            config,
            signer,
            catalog,
            gate: LicenseGate::new(licenses),
            limiter: None,
            clock: Arc::new(SystemClock),
        })
    }

    /// Attach a download limiter. Applied uniformly to every mint request,
    /// for both content families.
    #[must_use]
    pub fn with_limiter(mut self, limiter: Arc<DownloadLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Attach a download limiter over the given store, using the configured
    /// per-hour ceiling ([`DeliveryConfig::max_downloads_per_hour`]).
    #[must_use]
    pub fn with_limit_store(self, store: Arc<dyn RateLimitStore>) -> Self {
        let limiter = DownloadLimiter::new(
            store,
            self.config.max_downloads_per_hour,
            chrono::Duration::hours(1),
        );
        self.with_limiter(Arc::new(limiter))
    }

    /// Replace the clock (for testing).
    #[cfg(any(test, feature = "test-seams"))]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Mint a signed access URL for `file_ref` on behalf of `user_id`.
    ///
    /// # Errors
    /// - `Unauthorized` - no authenticated subject
    /// - `MissingFileRef` - no content-file reference in the request
    /// - `RateLimited` - download ceiling hit
    /// - `NotFound` - no such catalog record
    /// - `LicenseDenied` - license required and none valid
    /// - `UnsupportedContentType` - record's kind outside the allowed set
    /// - `InvalidLinkFormat` / `Downstream` - catalog data or lookup faults
    pub async fn mint(
        &self,
        user_id: Option<&str>,
        file_ref: Option<&str>,
    ) -> Result<MintOutcome, AccessError> {
        // 1. Require an authenticated subject.
        let user_id = user_id.ok_or(AccessError::Unauthorized)?;

        // 2. Require a content-file reference.
        let file_ref = file_ref
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(AccessError::MissingFileRef)?;

        // 3. Consume download budget. Runs after input validation so
        //    malformed requests don't burn quota, and before any lookups.
        if let Some(limiter) = &self.limiter {
            let decision = limiter.check_and_consume(user_id).await;
            if !decision.allowed {
                return Err(AccessError::RateLimited {
                    retry_after: decision.retry_after_secs.unwrap_or(60),
                });
            }
        }

        // 4. Resolve the content record.
        let file = self
            .catalog
            .find_file(file_ref)
            .await?
            .ok_or(AccessError::NotFound)?;

        // 5. License gate, unless the record is license-exempt.
        if file.requires_license {
            let now = self.clock.now_utc();
            if !self.gate.has_access(user_id, &file.product_id, now).await? {
                warn!(
                    user = user_id,
                    product = %file.product_id,
                    file = %file.id,
                    "content access denied: no valid license"
                );
                return Err(AccessError::LicenseDenied);
            }
        }

        // 6. Family dispatch. A kind outside the allowed set is catalog
        //    data gone bad, not a client mistake.
        if !self.config.allows(file.kind) {
            return Err(AccessError::UnsupportedContentType(
                file.kind.as_str().to_string(),
            ));
        }

        match file.kind.family() {
            ContentFamily::Document => self.mint_document(user_id, &file),
            ContentFamily::Video => self.mint_video(user_id, &file),
        }
    }

    /// Verify a document link's query parameters. Used by the Drive
    /// redirect endpoint; touches only the signature engine and the clock.
    pub fn verify_document_link(
        &self,
        file_id: &str,
        file_name: &str,
        expires: i64,
        signature: &str,
    ) -> Result<(), AccessError> {
        let message = document_message(file_id, file_name, expires);
        self.signer
            .verify_expiring(&message, signature, expires, self.clock.now_utc())
    }

    /// Verify a video link's query parameters. Used by the YouTube
    /// redirect endpoint; touches only the signature engine and the clock.
    pub fn verify_video_link(
        &self,
        video_id: &str,
        title: &str,
        expires: i64,
        signature: &str,
    ) -> Result<(), AccessError> {
        let message = video_message(video_id, title, expires);
        self.signer
            .verify_expiring(&message, signature, expires, self.clock.now_utc())
    }

    fn mint_document(
        &self,
        user_id: &str,
        file: &ContentFile,
    ) -> Result<MintOutcome, AccessError> {
        let Some(link) = file.external_link.as_deref() else {
            return Ok(MintOutcome::NotConfigured {
                message: "Document not configured",
            });
        };

        let drive = parse_drive_link(link)?;
        let file_name = sanitize_file_name(&file.display_name, self.config.max_file_name_len);
        let (expires, expires_at) = self.expiry(ContentFamily::Document);

        let signature = self
            .signer
            .sign(&document_message(&drive.file_id, &file_name, expires));

        // The sanitized name and the id alphabets are query-safe by
        // construction; no percent-encoding pass is needed here.
        let access_url = format!(
            "{}/content/download/drive?fileId={}&fileName={}&expires={}&signature={}",
            self.config.base_url, drive.file_id, file_name, expires, signature
        );

        info!(
            user = user_id,
            file = %file.id,
            expires,
            "minted document access link"
        );

        Ok(MintOutcome::Granted(ContentAccess {
            content_type: ContentFamily::Document,
            access_url,
            embed_url: None,
            file_name: Some(file_name),
            title: None,
            video_id: None,
            expires_at,
        }))
    }

    fn mint_video(&self, user_id: &str, file: &ContentFile) -> Result<MintOutcome, AccessError> {
        let Some(link) = file.external_link.as_deref() else {
            return Ok(MintOutcome::NotConfigured {
                message: "Video not configured",
            });
        };

        let youtube = parse_youtube_link(link)?;
        let title = sanitize_file_name(&file.display_name, self.config.max_file_name_len);
        let (expires, expires_at) = self.expiry(ContentFamily::Video);

        let signature = self
            .signer
            .sign(&video_message(&youtube.video_id, &title, expires));

        let access_url = format!(
            "{}/content/video/youtube?videoId={}&title={}&expires={}&signature={}",
            self.config.base_url, youtube.video_id, title, expires, signature
        );
        let embed_url = format!("https://www.youtube.com/embed/{}", youtube.video_id);

        info!(
            user = user_id,
            file = %file.id,
            expires,
            "minted video access link"
        );

        Ok(MintOutcome::Granted(ContentAccess {
            content_type: ContentFamily::Video,
            access_url,
            embed_url: Some(embed_url),
            file_name: None,
            title: Some(title),
            video_id: Some(youtube.video_id),
            expires_at,
        }))
    }

    /// Expiry for a family, truncated to whole seconds so the epoch value
    /// in the URL and the timestamp in the response agree exactly.
    fn expiry(&self, family: ContentFamily) -> (i64, DateTime<Utc>) {
        let expires = (self.clock.now_utc() + self.config.expiry_for(family)).timestamp();
        let expires_at = DateTime::from_timestamp(expires, 0).unwrap_or_else(Utc::now);
        (expires, expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::clock::MockClock;
    use crate::model::{ContentKind, License, LicenseStatus};
    use crate::policy::MemoryLicenseLookup;
    use crate::ratelimit::{MemoryRateLimitStore, RateLimitStore};
    use chrono::TimeZone;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";
    const DRIVE_ID: &str = "ABCDEFGHIJKLMNOPQRST1234";

    struct Fixture {
        manager: AccessManager,
        catalog: Arc<MemoryCatalog>,
        licenses: Arc<MemoryLicenseLookup>,
        clock: MockClock,
    }

    fn fixture() -> Fixture {
        fixture_with(DeliveryConfig::new(SECRET), None)
    }

    fn fixture_with(config: DeliveryConfig, limit: Option<u32>) -> Fixture {
        let catalog = Arc::new(MemoryCatalog::new());
        let licenses = Arc::new(MemoryLicenseLookup::new());
        let clock = MockClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());

        let mut manager = AccessManager::new(
            config,
            Arc::clone(&catalog) as Arc<dyn ContentCatalog>,
            Arc::clone(&licenses) as Arc<dyn LicenseLookup>,
        )
        .unwrap()
        .with_clock(Arc::new(clock.clone()));

        if let Some(limit) = limit {
            let limiter = DownloadLimiter::new_with_clock(
                Arc::new(MemoryRateLimitStore::new()) as Arc<dyn RateLimitStore>,
                limit,
                chrono::Duration::hours(1),
                Arc::new(clock.clone()),
            );
            manager = manager.with_limiter(Arc::new(limiter));
        }

        Fixture {
            manager,
            catalog,
            licenses,
            clock,
        }
    }

    fn pdf_file(id: &str) -> ContentFile {
        ContentFile {
            id: id.to_string(),
            display_name: "Buyer Guide.pdf".to_string(),
            kind: ContentKind::Pdf,
            external_link: Some(format!(
                "https://drive.google.com/file/d/{DRIVE_ID}/view?usp=sharing"
            )),
            requires_license: true,
            product_id: "prod-1".to_string(),
        }
    }

    fn video_file(id: &str) -> ContentFile {
        ContentFile {
            id: id.to_string(),
            display_name: "Course Intro".to_string(),
            kind: ContentKind::Video,
            external_link: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            requires_license: true,
            product_id: "prod-1".to_string(),
        }
    }

    fn lifetime_license(user_id: &str, product_id: &str) -> License {
        License {
            id: format!("lic-{user_id}"),
            user_id: user_id.to_string(),
            product_id: product_id.to_string(),
            status: LicenseStatus::Active,
            expires_at: None,
        }
    }

    fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{name}=")))
    }

    #[tokio::test]
    async fn unauthenticated_request_is_rejected() {
        let f = fixture();
        let result = f.manager.mint(None, Some("file-1")).await;
        assert!(matches!(result, Err(AccessError::Unauthorized)));
    }

    #[tokio::test]
    async fn missing_file_ref_is_rejected() {
        let f = fixture();
        assert!(matches!(
            f.manager.mint(Some("user-1"), None).await,
            Err(AccessError::MissingFileRef)
        ));
        assert!(matches!(
            f.manager.mint(Some("user-1"), Some("   ")).await,
            Err(AccessError::MissingFileRef)
        ));
    }

    #[tokio::test]
    async fn unknown_file_is_not_found() {
        let f = fixture();
        let result = f.manager.mint(Some("user-1"), Some("ghost")).await;
        assert!(matches!(result, Err(AccessError::NotFound)));
    }

    #[tokio::test]
    async fn unlicensed_user_is_denied_with_purchase_message() {
        let f = fixture();
        f.catalog.insert(pdf_file("file-1"));

        let err = f
            .manager
            .mint(Some("user-1"), Some("file-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::LicenseDenied));
        assert_eq!(err.to_string(), "Access denied. Please purchase this content.");
    }

    #[tokio::test]
    async fn licensed_user_gets_signed_document_url() {
        let f = fixture();
        f.catalog.insert(pdf_file("file-1"));
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let outcome = f.manager.mint(Some("user-1"), Some("file-1")).await.unwrap();
        let MintOutcome::Granted(access) = outcome else {
            panic!("expected grant");
        };

        assert_eq!(access.content_type, ContentFamily::Document);
        assert_eq!(query_param(&access.access_url, "fileId"), Some(DRIVE_ID));
        assert_eq!(
            query_param(&access.access_url, "fileName"),
            Some("Buyer_Guide.pdf")
        );
        assert!(query_param(&access.access_url, "expires").is_some());
        assert_eq!(
            query_param(&access.access_url, "signature").map(str::len),
            Some(64)
        );

        // 60-minute document window from the frozen clock.
        assert_eq!(
            access.expires_at,
            Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap()
        );

        // The minted parameters verify as a unit.
        let expires: i64 = query_param(&access.access_url, "expires")
            .unwrap()
            .parse()
            .unwrap();
        let signature = query_param(&access.access_url, "signature").unwrap();
        assert!(f
            .manager
            .verify_document_link(DRIVE_ID, "Buyer_Guide.pdf", expires, signature)
            .is_ok());
    }

    #[tokio::test]
    async fn license_exempt_file_skips_the_gate() {
        let f = fixture();
        let mut file = pdf_file("file-1");
        file.requires_license = false;
        f.catalog.insert(file);

        let outcome = f.manager.mint(Some("user-1"), Some("file-1")).await.unwrap();
        assert!(matches!(outcome, MintOutcome::Granted(_)));
    }

    #[tokio::test]
    async fn expired_license_is_denied() {
        let f = fixture();
        f.catalog.insert(pdf_file("file-1"));
        f.licenses.insert(License {
            expires_at: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
            ..lifetime_license("user-1", "prod-1")
        });

        let result = f.manager.mint(Some("user-1"), Some("file-1")).await;
        assert!(matches!(result, Err(AccessError::LicenseDenied)));
    }

    #[tokio::test]
    async fn video_grant_carries_embed_surface() {
        let f = fixture();
        f.catalog.insert(video_file("vid-1"));
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let outcome = f.manager.mint(Some("user-1"), Some("vid-1")).await.unwrap();
        let MintOutcome::Granted(access) = outcome else {
            panic!("expected grant");
        };

        assert_eq!(access.content_type, ContentFamily::Video);
        assert_eq!(access.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(access.title.as_deref(), Some("Course_Intro"));
        assert_eq!(
            access.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        // 120-minute video window.
        assert_eq!(
            access.expires_at,
            Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap()
        );

        let expires: i64 = query_param(&access.access_url, "expires")
            .unwrap()
            .parse()
            .unwrap();
        let signature = query_param(&access.access_url, "signature").unwrap();
        assert!(f
            .manager
            .verify_video_link("dQw4w9WgXcQ", "Course_Intro", expires, signature)
            .is_ok());
    }

    #[tokio::test]
    async fn unconfigured_document_is_a_soft_outcome() {
        let f = fixture();
        let mut file = pdf_file("file-1");
        file.external_link = None;
        f.catalog.insert(file);
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let outcome = f.manager.mint(Some("user-1"), Some("file-1")).await.unwrap();
        assert!(matches!(
            outcome,
            MintOutcome::NotConfigured {
                message: "Document not configured"
            }
        ));
    }

    #[tokio::test]
    async fn unconfigured_video_is_a_soft_outcome() {
        let f = fixture();
        let mut file = video_file("vid-1");
        file.external_link = None;
        f.catalog.insert(file);
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let outcome = f.manager.mint(Some("user-1"), Some("vid-1")).await.unwrap();
        assert!(matches!(
            outcome,
            MintOutcome::NotConfigured {
                message: "Video not configured"
            }
        ));
    }

    #[tokio::test]
    async fn kind_outside_allowed_set_fails_hard() {
        let mut config = DeliveryConfig::new(SECRET);
        config.allowed_content_types = vec![ContentKind::Pdf];
        let f = fixture_with(config, None);

        f.catalog.insert(video_file("vid-1"));
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let result = f.manager.mint(Some("user-1"), Some("vid-1")).await;
        assert!(matches!(
            result,
            Err(AccessError::UnsupportedContentType(kind)) if kind == "video"
        ));
    }

    #[tokio::test]
    async fn garbage_stored_link_fails_hard() {
        let f = fixture();
        let mut file = pdf_file("file-1");
        file.external_link = Some("not a drive link".to_string());
        f.catalog.insert(file);
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let result = f.manager.mint(Some("user-1"), Some("file-1")).await;
        assert!(matches!(result, Err(AccessError::InvalidLinkFormat(_))));
    }

    #[tokio::test]
    async fn rate_limit_applies_to_all_content_families() {
        // Deliberate behavioral choice: the download ceiling gates every
        // mint request uniformly, documents and videos alike.
        let f = fixture_with(DeliveryConfig::new(SECRET), Some(2));
        f.catalog.insert(pdf_file("file-1"));
        f.catalog.insert(video_file("vid-1"));
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        assert!(f.manager.mint(Some("user-1"), Some("file-1")).await.is_ok());
        assert!(f.manager.mint(Some("user-1"), Some("vid-1")).await.is_ok());

        let result = f.manager.mint(Some("user-1"), Some("file-1")).await;
        assert!(matches!(
            result,
            Err(AccessError::RateLimited { retry_after }) if retry_after > 0
        ));
    }

    #[tokio::test]
    async fn rate_limited_before_catalog_lookup() {
        // Quota is consumed per request, so even a request for a missing
        // file counts; once the ceiling is hit, denial comes before the
        // 404 would.
        let f = fixture_with(DeliveryConfig::new(SECRET), Some(1));
        assert!(matches!(
            f.manager.mint(Some("user-1"), Some("ghost")).await,
            Err(AccessError::NotFound)
        ));
        assert!(matches!(
            f.manager.mint(Some("user-1"), Some("ghost")).await,
            Err(AccessError::RateLimited { .. })
        ));
    }

    #[tokio::test]
    async fn minted_link_expires() {
        let f = fixture();
        f.catalog.insert(pdf_file("file-1"));
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let outcome = f.manager.mint(Some("user-1"), Some("file-1")).await.unwrap();
        let MintOutcome::Granted(access) = outcome else {
            panic!("expected grant");
        };
        let expires: i64 = query_param(&access.access_url, "expires")
            .unwrap()
            .parse()
            .unwrap();
        let signature = query_param(&access.access_url, "signature").unwrap().to_string();

        // Valid before the 60-minute window closes...
        f.clock.advance(chrono::Duration::minutes(59));
        assert!(f
            .manager
            .verify_document_link(DRIVE_ID, "Buyer_Guide.pdf", expires, &signature)
            .is_ok());

        // ...and Expired after, regardless of the (still correct) signature.
        f.clock.advance(chrono::Duration::minutes(2));
        assert!(matches!(
            f.manager
                .verify_document_link(DRIVE_ID, "Buyer_Guide.pdf", expires, &signature),
            Err(AccessError::Expired)
        ));
    }

    #[tokio::test]
    async fn tampered_parameters_fail_verification() {
        let f = fixture();
        f.catalog.insert(pdf_file("file-1"));
        f.licenses.insert(lifetime_license("user-1", "prod-1"));

        let outcome = f.manager.mint(Some("user-1"), Some("file-1")).await.unwrap();
        let MintOutcome::Granted(access) = outcome else {
            panic!("expected grant");
        };
        let expires: i64 = query_param(&access.access_url, "expires")
            .unwrap()
            .parse()
            .unwrap();
        let signature = query_param(&access.access_url, "signature").unwrap();

        // Swap the file id for another object.
        assert!(matches!(
            f.manager
                .verify_document_link("XXXXXXXXXXXXXXXXXXXXXXXX", "Buyer_Guide.pdf", expires, signature),
            Err(AccessError::SignatureInvalid)
        ));
        // Stretch the expiry.
        assert!(matches!(
            f.manager
                .verify_document_link(DRIVE_ID, "Buyer_Guide.pdf", expires + 3600, signature),
            Err(AccessError::SignatureInvalid)
        ));
    }

    #[tokio::test]
    async fn limit_store_uses_configured_ceiling() {
        let mut config = DeliveryConfig::new(SECRET);
        config.max_downloads_per_hour = 1;

        let catalog = Arc::new(MemoryCatalog::new());
        catalog.insert(pdf_file("file-1"));
        let licenses = Arc::new(MemoryLicenseLookup::new());
        licenses.insert(lifetime_license("user-1", "prod-1"));

        let manager = AccessManager::new(
            config,
            Arc::clone(&catalog) as Arc<dyn ContentCatalog>,
            Arc::clone(&licenses) as Arc<dyn LicenseLookup>,
        )
        .unwrap()
        .with_limit_store(Arc::new(MemoryRateLimitStore::new()));

        assert!(manager.mint(Some("user-1"), Some("file-1")).await.is_ok());
        assert!(matches!(
            manager.mint(Some("user-1"), Some("file-1")).await,
            Err(AccessError::RateLimited { .. })
        ));
    }

    #[tokio::test]
    async fn construction_rejects_bad_config() {
        let catalog = Arc::new(MemoryCatalog::new());
        let licenses = Arc::new(MemoryLicenseLookup::new());
        let result = AccessManager::new(
            DeliveryConfig::new("short"),
            catalog,
            licenses,
        );
        assert!(matches!(result, Err(AccessError::ConfigError(_))));
    }
}
