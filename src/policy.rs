//! License-based entitlement checks.
//!
//! This module decides whether a user currently holds entitlement to a
//! product's content, composed from the raw license set fetched through the
//! [`LicenseLookup`] collaborator (order fulfillment owns the records).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::model::License;
use crate::AccessError;

/// Read access to a user's licenses.
#[async_trait]
pub trait LicenseLookup: Send + Sync {
    /// All licenses held by a user, across products and statuses.
    async fn licenses_for_user(&self, user_id: &str) -> Result<Vec<License>, AccessError>;
}

/// Decides entitlement from raw licenses.
pub struct LicenseGate {
    lookup: Arc<dyn LicenseLookup>,
}

impl LicenseGate {
    /// Create a gate over the given lookup collaborator.
    pub fn new(lookup: Arc<dyn LicenseLookup>) -> Self {
        Self { lookup }
    }

    /// Whether `user_id` currently holds entitlement to `product_id`.
    ///
    /// A license counts only when it names this exact product, its status
    /// is active, and its expiry (if any) has not passed. The first
    /// matching license short-circuits the scan. A license for a different
    /// product simply falls through: entitlement is scoped to one product.
    pub async fn has_access(
        &self,
        user_id: &str,
        product_id: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, AccessError> {
        let licenses = self.lookup.licenses_for_user(user_id).await?;
        Ok(licenses
            .iter()
            .any(|license| license.product_id == product_id && license.is_active_at(now)))
    }
}

/// In-memory license lookup keyed by user id.
#[derive(Debug, Default)]
pub struct MemoryLicenseLookup {
    licenses: RwLock<HashMap<String, Vec<License>>>,
}

impl MemoryLicenseLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a license for its owning user.
    pub fn insert(&self, license: License) {
        let mut licenses = self.licenses.write().expect("license lock poisoned");
        licenses
            .entry(license.user_id.clone())
            .or_default()
            .push(license);
    }
}

#[async_trait]
impl LicenseLookup for MemoryLicenseLookup {
    async fn licenses_for_user(&self, user_id: &str) -> Result<Vec<License>, AccessError> {
        let licenses = self.licenses.read().expect("license lock poisoned");
        Ok(licenses.get(user_id).cloned().unwrap_or_default())
    }
}
