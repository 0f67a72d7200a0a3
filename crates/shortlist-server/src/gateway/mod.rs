//! HTTP gateway (Axum) for search, listing, validation, and segmentation.
//!
//! This module is primarily used by the `shortlist` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::{
    content_by_id_handler, list_content_handler, search_handler, segment_handler, stats_handler,
    validate_handler,
};
pub use state::{GatewayStats, HandlerState};

use axum::extract::State;
use shortlist::store::ContentStore;

pub const STATUS_READY: &str = "ready";
pub const STATUS_ERROR: &str = "error";
pub const STATUS_DISABLED: &str = "disabled";

pub fn create_router_with_state<S>(state: HandlerState<S>) -> Router
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/content", get(list_content_handler))
        .route("/v1/content/{id}", get(content_by_id_handler))
        .route("/v1/validate", post(validate_handler))
        .route("/v1/segment", post(segment_handler))
        .route("/v1/stats", get(stats_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub store: &'static str,
    pub embedding: &'static str,
    pub embedder_mode: &'static str,
    pub classifier_mode: &'static str,
    pub segmenter: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<S>(State(state): State<HandlerState<S>>) -> Response
where
    S: ContentStore + Clone + Send + Sync + 'static,
{
    let store_status = if state.store.count_active().await.is_ok() {
        STATUS_READY
    } else {
        STATUS_ERROR
    };

    let embedder_mode = if state.ranker.embedder().is_stub() {
        "stub"
    } else {
        "real"
    };

    let classifier_mode = match state.classifier.mode() {
        shortlist::classifier::ClassifierMode::Real => "real",
        shortlist::classifier::ClassifierMode::Mock => "mock",
    };

    let segmenter_status = if state.segmenter.is_some() {
        STATUS_READY
    } else {
        STATUS_DISABLED
    };

    let components = ComponentStatus {
        http: STATUS_READY,
        store: store_status,
        embedding: STATUS_READY,
        embedder_mode,
        classifier_mode,
        segmenter: segmenter_status,
    };

    let is_ready = components.store == STATUS_READY;

    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready { "ok" } else { "pending" };

    (
        status_code,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
