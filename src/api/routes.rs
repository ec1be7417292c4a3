use super::infra::AppState;
use crate::workflows::sourcing::{
    analyze_inputs, demo_snapshot, DashboardEvent, DashboardSnapshot, DashboardState,
    InsightEngine, RawInputBundle,
};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardEventRequest {
    #[serde(default = "DashboardState::empty")]
    pub(crate) state: DashboardState,
    pub(crate) event: DashboardEvent,
}

/// Router exposing the analysis endpoints.
pub fn signals_router(engine: Arc<InsightEngine>) -> Router {
    Router::new()
        .route("/api/v1/signals/analyze", post(analyze_endpoint))
        .route("/api/v1/signals/demo", get(demo_endpoint))
        .route("/api/v1/signals/dashboard/events", post(dashboard_event_endpoint))
        .with_state(engine)
}

pub(crate) fn with_operational_routes(engine: Arc<InsightEngine>) -> Router {
    signals_router(engine)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_endpoint(
    State(engine): State<Arc<InsightEngine>>,
    Json(inputs): Json<RawInputBundle>,
) -> Json<DashboardSnapshot> {
    let snapshot = analyze_inputs(inputs, &engine, Utc::now());
    debug!(
        recommendations = snapshot.recommendations.len(),
        status = snapshot.approval_status().label(),
        drift = snapshot.drift_detected(),
        "analysis complete"
    );
    Json(snapshot)
}

pub(crate) async fn demo_endpoint() -> Json<DashboardSnapshot> {
    Json(demo_snapshot())
}

pub(crate) async fn dashboard_event_endpoint(
    State(engine): State<Arc<InsightEngine>>,
    Json(request): Json<DashboardEventRequest>,
) -> Json<DashboardState> {
    let DashboardEventRequest { state, event } = request;
    Json(state.apply(event, &engine))
}
