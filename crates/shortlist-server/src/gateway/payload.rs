use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shortlist::classifier::ValidationReport;
use shortlist::content::{ContentFilter, RetrievedContent};
use shortlist::segmentation::RfmFeatures;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub filters: Option<ContentFilter>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<RetrievedContent>,
}

fn default_list_limit() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub count: usize,
    pub results: Vec<RetrievedContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: ValidationReport,
    pub timestamp: DateTime<Utc>,
}

/// RFM features as submitted by the caller; forwarded to the segment model.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentRequest {
    pub recency: f64,
    pub frequency: f64,
    pub monetary: f64,
}

impl From<SegmentRequest> for RfmFeatures {
    fn from(request: SegmentRequest) -> Self {
        Self {
            recency: request.recency,
            frequency: request.frequency,
            monetary: request.monetary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub search_requests: u64,
    pub validate_requests: u64,
    pub active_content: usize,
}
