//! Statistics Routes

use axum::extract::State;
use axum::Json;
use monitor::Statistics;

use crate::{ApiError, SharedState};

/// Aggregate counters of the scheduler
pub async fn get_statistics(State(state): State<SharedState>) -> Json<Statistics> {
    Json(state.read().await.orchestrator.statistics())
}

/// Prometheus text exposition
pub async fn get_metrics(State(state): State<SharedState>) -> Result<String, ApiError> {
    let state = state.read().await;
    let handle = state.metrics.as_ref().ok_or(ApiError::MetricsUnavailable)?;
    Ok(handle.render())
}
