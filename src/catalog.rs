//! Content catalog collaborator.
//!
//! The catalog (product files, share links, license flags) is owned by the
//! storefront's CMS; this core only resolves file records through the
//! [`ContentCatalog`] trait. [`MemoryCatalog`] backs tests and embeddings
//! that load their catalog up front.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::ContentFile;
use crate::AccessError;

/// Read access to catalog file records.
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// Resolve a content file by id. `Ok(None)` means the record does not
    /// exist; `Err` means the lookup itself failed.
    async fn find_file(&self, file_id: &str) -> Result<Option<ContentFile>, AccessError>;
}

/// In-memory catalog keyed by file id.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    files: RwLock<HashMap<String, ContentFile>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a file record.
    pub fn insert(&self, file: ContentFile) {
        let mut files = self.files.write().expect("catalog lock poisoned");
        files.insert(file.id.clone(), file);
    }
}

#[async_trait]
impl ContentCatalog for MemoryCatalog {
    async fn find_file(&self, file_id: &str) -> Result<Option<ContentFile>, AccessError> {
        let files = self.files.read().expect("catalog lock poisoned");
        Ok(files.get(file_id).cloned())
    }
}
