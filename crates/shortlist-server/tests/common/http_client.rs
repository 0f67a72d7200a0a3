//! HTTP client helpers for tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    async fn decode(resp: reqwest::Response) -> Result<Value, TestClientError> {
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 | 422 => Err(TestClientError::BadRequest(resp.text().await?)),
            404 => Err(TestClientError::NotFound),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn search(&self, request: Value) -> Result<Value, TestClientError> {
        let resp = self
            .client
            .post(self.url("/v1/search"))
            .json(&request)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn content_by_id(&self, id: u64) -> Result<Value, TestClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/v1/content/{}", id)))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn list_content(&self, skip: usize, limit: usize) -> Result<Value, TestClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/v1/content?skip={}&limit={}", skip, limit)))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn validate(&self, messages: &[&str]) -> Result<Value, TestClientError> {
        let resp = self
            .client
            .post(self.url("/v1/validate"))
            .json(&serde_json::json!({ "messages": messages }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn segment(
        &self,
        recency: f64,
        frequency: f64,
        monetary: f64,
    ) -> Result<(u16, Value), TestClientError> {
        let resp = self
            .client
            .post(self.url("/v1/segment"))
            .json(&serde_json::json!({
                "recency": recency,
                "frequency": frequency,
                "monetary": monetary
            }))
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.json().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    pub async fn stats(&self) -> Result<Value, TestClientError> {
        let resp = self.client.get(self.url("/v1/stats")).send().await?;
        Self::decode(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentStatus {
    pub http: String,
    pub store: String,
    pub embedding: String,
    pub embedder_mode: String,
    pub classifier_mode: String,
    pub segmenter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

impl ReadyResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,
}
