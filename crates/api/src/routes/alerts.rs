//! Alert Routes

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use monitor::DispatchRecord;
use serde::{Deserialize, Serialize};
use vital_types::AlertId;

use crate::{ApiError, SharedState};

/// Query parameters for alerts endpoint
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    /// Maximum number of records
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Response for alerts endpoint
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    /// Dispatched alerts, newest first
    pub data: Vec<DispatchRecord>,
    pub count: usize,
    pub unacknowledged_count: usize,
}

/// Response for a manual drain
#[derive(Debug, Serialize)]
pub struct DrainResponse {
    /// Records in dispatch order
    pub dispatched: Vec<DispatchRecord>,
    pub count: usize,
}

/// Recently dispatched alerts
pub async fn get_alerts(
    State(state): State<SharedState>,
    Query(params): Query<AlertQuery>,
) -> Json<AlertResponse> {
    let alerts = state.read().await.orchestrator.recent_dispatches(params.limit);
    let unack = alerts.iter().filter(|r| !r.alert.acknowledged).count();

    Json(AlertResponse {
        count: alerts.len(),
        unacknowledged_count: unack,
        data: alerts,
    })
}

/// Dispatch everything pending now instead of waiting for the next cycle
pub async fn drain_alerts(State(state): State<SharedState>) -> Json<DrainResponse> {
    let dispatched = state.write().await.orchestrator.drain();
    Json(DrainResponse {
        count: dispatched.len(),
        dispatched,
    })
}

/// Acknowledge a dispatched alert
pub async fn acknowledge_alert(
    State(state): State<SharedState>,
    Path(id): Path<AlertId>,
) -> Result<StatusCode, ApiError> {
    state.write().await.orchestrator.acknowledge(id)?;
    Ok(StatusCode::NO_CONTENT)
}
