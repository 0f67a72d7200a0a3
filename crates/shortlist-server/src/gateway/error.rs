use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use shortlist::ranking::RankingError;
use shortlist::segmentation::SegmentationError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("content not found: {0}")]
    NotFound(String),

    #[error("ranking failed: {0}")]
    Ranking(#[from] RankingError),

    #[error("segment prediction failed: {0}")]
    Segmentation(#[from] SegmentationError),

    #[error("segment model not configured")]
    SegmenterUnavailable,
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        // Caller mistakes map to 4xx, collaborator failures to 5xx so
        // clients can tell retryable from non-retryable outcomes.
        let status = match &self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Ranking(RankingError::InvalidArgument { .. }) => StatusCode::BAD_REQUEST,
            GatewayError::Ranking(RankingError::Embedding(_)) => StatusCode::BAD_GATEWAY,
            GatewayError::Ranking(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Segmentation(SegmentationError::InvalidFeatures { .. }) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Segmentation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::SegmenterUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
