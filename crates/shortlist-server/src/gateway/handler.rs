use std::sync::atomic::Ordering;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use tracing::{debug, info, instrument};

use shortlist::content::RetrievedContent;
use shortlist::segmentation::SegmentPrediction;
use shortlist::store::ContentStore;

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    ListParams, ListResponse, SearchRequest, SearchResponse, SegmentRequest, StatsResponse,
    ValidateRequest, ValidateResponse,
};
use crate::gateway::state::HandlerState;

#[instrument(skip(state, request), fields(query_len = request.query.len()))]
pub async fn search_handler<S>(
    State(state): State<HandlerState<S>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, GatewayError>
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    state.stats.search_requests.fetch_add(1, Ordering::Relaxed);

    let results = state
        .ranker
        .rank(&request.query, request.filters.as_ref(), request.top_k)
        .await?;

    info!(count = results.len(), "Search complete");

    Ok(Json(SearchResponse {
        query: request.query,
        count: results.len(),
        results,
    }))
}

#[instrument(skip(state))]
pub async fn content_by_id_handler<S>(
    State(state): State<HandlerState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<RetrievedContent>, GatewayError>
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    let result = state.ranker.retrieve_by_id(id).await?;

    result
        .map(Json)
        .ok_or_else(|| GatewayError::NotFound(format!("no active content with id {}", id)))
}

#[instrument(skip(state))]
pub async fn list_content_handler<S>(
    State(state): State<HandlerState<S>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, GatewayError>
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    let results = state
        .ranker
        .list_active(params.skip, params.limit)
        .await?;

    Ok(Json(ListResponse {
        count: results.len(),
        results,
    }))
}

#[instrument(skip(state, request), fields(batch = request.messages.len()))]
pub async fn validate_handler<S>(
    State(state): State<HandlerState<S>>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, GatewayError>
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    if request.messages.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "messages array cannot be empty".to_string(),
        ));
    }

    state
        .stats
        .validate_requests
        .fetch_add(1, Ordering::Relaxed);

    let report = state.classifier.validate_messages(&request.messages).await;

    debug!(
        all_approved = report.all_approved,
        total = report.total_checked,
        "Validation batch complete"
    );

    Ok(Json(ValidateResponse {
        success: true,
        report,
        timestamp: Utc::now(),
    }))
}

#[instrument(skip(state, request))]
pub async fn segment_handler<S>(
    State(state): State<HandlerState<S>>,
    Json(request): Json<SegmentRequest>,
) -> Result<Json<SegmentPrediction>, GatewayError>
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    let segmenter = state
        .segmenter
        .as_ref()
        .ok_or(GatewayError::SegmenterUnavailable)?;

    let prediction = segmenter.predict(&request.into())?;

    debug!(
        segment_id = prediction.segment_id,
        confidence = prediction.confidence,
        "Segment predicted"
    );

    Ok(Json(prediction))
}

#[instrument(skip(state))]
pub async fn stats_handler<S>(
    State(state): State<HandlerState<S>>,
) -> Result<Json<StatsResponse>, GatewayError>
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    let active_content = state
        .store
        .count_active()
        .await
        .map_err(|e| GatewayError::Ranking(e.into()))?;

    Ok(Json(StatsResponse {
        search_requests: state.stats.search_requests.load(Ordering::Relaxed),
        validate_requests: state.stats.validate_requests.load(Ordering::Relaxed),
        active_content,
    }))
}
