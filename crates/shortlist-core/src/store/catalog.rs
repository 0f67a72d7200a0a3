//! JSON content catalog.
//!
//! Catalog files carry items without embeddings; the ingestion path embeds
//! each entry's text and upserts the resulting [`ContentItem`].

use std::path::Path;

use chrono::Utc;
use serde::Deserialize;

use crate::content::{ComplianceStatus, ContentItem, ContentType};

use super::error::StoreError;

fn default_active() -> bool {
    true
}

/// One catalog record as stored on disk (no embedding yet).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub compliance_status: ComplianceStatus,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CatalogEntry {
    /// Text fed to the embedding provider for this entry.
    pub fn embedding_text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }

    /// Converts the entry into a stored item carrying the given embedding.
    pub fn into_item(self, embedding: Vec<f32>) -> ContentItem {
        ContentItem {
            id: self.id,
            title: self.title,
            body: self.body,
            content_type: self.content_type,
            campaign_name: self.campaign_name,
            audience: self.audience,
            compliance_status: self.compliance_status,
            source: self.source,
            tags: self.tags,
            created_at: Utc::now(),
            is_active: self.is_active,
            embedding: Some(embedding),
        }
    }
}

/// Reads a JSON array of catalog entries from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, StoreError> {
    if !path.exists() {
        return Err(StoreError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| StoreError::MalformedCatalog {
        reason: e.to_string(),
    })
}
