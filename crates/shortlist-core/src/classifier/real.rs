use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::error::ClassifierError;
use super::types::SeverityScores;

const ANALYZE_API_VERSION: &str = "2023-10-01";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the hosted content-safety `text:analyze` endpoint.
#[derive(Debug, Clone)]
pub struct RealClassifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(rename = "categoriesAnalysis")]
    categories_analysis: Vec<CategoryAnalysis>,
}

#[derive(Deserialize)]
struct CategoryAnalysis {
    category: String,
    #[serde(default)]
    severity: Option<u8>,
}

impl RealClassifier {
    /// Creates a client for the given endpoint and API key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ClassifierError> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        let api_key = api_key.into();

        if endpoint.is_empty() || api_key.is_empty() {
            return Err(ClassifierError::InvalidConfig {
                reason: "endpoint and api key must both be non-empty".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Analyzes one text and returns its per-category severities.
    pub async fn analyze(&self, text: &str) -> Result<SeverityScores, ClassifierError> {
        let url = format!(
            "{}/contentsafety/text:analyze?api-version={}",
            self.endpoint, ANALYZE_API_VERSION
        );

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let analysis: AnalyzeResponse =
            response
                .json()
                .await
                .map_err(|e| ClassifierError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        let mut scores = SeverityScores::default();
        for category in analysis.categories_analysis {
            let severity = category.severity.unwrap_or(0);
            match category.category.as_str() {
                "Hate" => scores.hate = severity,
                "Sexual" => scores.sexual = severity,
                "Violence" => scores.violence = severity,
                "SelfHarm" => scores.self_harm = severity,
                other => {
                    debug!(category = other, "Ignoring unknown safety category");
                }
            }
        }

        Ok(scores)
    }
}
