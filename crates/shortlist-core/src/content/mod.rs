//! Marketing-content domain types.
//!
//! [`ContentItem`] is the stored record, [`ContentFilter`] the AND-combined
//! retrieval criteria, and [`RetrievedContent`] the scored output shape shared
//! by ranked search, by-id lookup, and listings.


use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_DIRECT_LOOKUP, SCORE_UNRANKED};

/// Kind of marketing asset an item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Email,
    Blog,
    Ad,
    Social,
    Whitepaper,
}

/// Review state of an item. Only approved content is served by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    #[default]
    Approved,
    Pending,
    Rejected,
}

/// One piece of stored marketing content.
///
/// The embedding is precomputed at ingestion time and must match the
/// configured embedding dimension; items with a missing or wrongly-sized
/// embedding are skipped during scoring rather than failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub content_type: ContentType,
    pub campaign_name: Option<String>,
    pub audience: Option<String>,
    pub compliance_status: ComplianceStatus,
    pub source: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub embedding: Option<Vec<f32>>,
}

impl ContentItem {
    /// Returns `true` if the embedding is present with the expected dimension.
    pub fn has_embedding(&self, expected_dim: usize) -> bool {
        self.embedding
            .as_ref()
            .is_some_and(|e| e.len() == expected_dim)
    }
}

fn default_filter_compliance() -> Option<ComplianceStatus> {
    Some(ComplianceStatus::Approved)
}

/// Request-scoped retrieval criteria. Non-`None` fields are AND-combined.
///
/// When a filter object is supplied, `compliance_status` defaults to
/// approved-only; [`ContentFilter::default`] (no filtering requested) leaves
/// every field unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentFilter {
    #[serde(default)]
    pub content_type: Option<ContentType>,

    /// Case-insensitive substring match against the item's campaign name.
    #[serde(default)]
    pub campaign_name: Option<String>,

    #[serde(default)]
    pub audience: Option<String>,

    #[serde(default = "default_filter_compliance")]
    pub compliance_status: Option<ComplianceStatus>,

    /// Item matches if any of its tags contains, case-insensitively, any
    /// requested tag.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ContentFilter {
    /// Returns `true` if the item satisfies every set criterion.
    pub fn matches(&self, item: &ContentItem) -> bool {
        if let Some(content_type) = self.content_type
            && item.content_type != content_type
        {
            return false;
        }

        if let Some(ref campaign) = self.campaign_name {
            let needle = campaign.to_lowercase();
            match item.campaign_name {
                Some(ref name) if name.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        if let Some(ref audience) = self.audience
            && item.audience.as_deref() != Some(audience.as_str())
        {
            return false;
        }

        if let Some(status) = self.compliance_status
            && item.compliance_status != status
        {
            return false;
        }

        if let Some(ref tags) = self.tags
            && !tags.is_empty()
        {
            let matched = tags.iter().any(|wanted| {
                let needle = wanted.to_lowercase();
                item.tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
            });
            if !matched {
                return false;
            }
        }

        true
    }
}

/// Output record shared by ranked search, by-id lookup, and listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedContent {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub content_type: ContentType,
    pub campaign_name: Option<String>,
    pub audience: Option<String>,
    pub compliance_status: ComplianceStatus,
    pub source: Option<String>,
    pub tags: Vec<String>,
    /// Cosine similarity rounded to 4 decimals, or a sentinel: `1.0` for
    /// direct lookups, `0.0` for unranked listings.
    pub similarity_score: f32,
}

impl RetrievedContent {
    /// Builds an output record carrying the given (already rounded) score.
    pub fn from_item(item: &ContentItem, similarity_score: f32) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            body: item.body.clone(),
            content_type: item.content_type,
            campaign_name: item.campaign_name.clone(),
            audience: item.audience.clone(),
            compliance_status: item.compliance_status,
            source: item.source.clone(),
            tags: item.tags.clone(),
            similarity_score,
        }
    }

    /// Builds the by-id lookup shape (sentinel score `1.0`).
    pub fn direct(item: &ContentItem) -> Self {
        Self::from_item(item, SCORE_DIRECT_LOOKUP)
    }

    /// Builds the unranked listing shape (sentinel score `0.0`).
    pub fn unranked(item: &ContentItem) -> Self {
        Self::from_item(item, SCORE_UNRANKED)
    }
}
