//! Reading and Emergency Routes

use axum::extract::State;
use axum::Json;
use monitor::{EmergencyKind, IngestOutcome};
use serde::Deserialize;
use vital_types::{Reading, SubjectId, VitalKind};

use crate::{ApiError, SharedState};

/// A single reading pushed by a device
#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    pub subject_id: SubjectId,
    pub vital: VitalKind,
    pub value: f64,
    /// Device timestamp (Unix ms); defaults to receipt time
    pub timestamp_ms: Option<u64>,
}

/// Manual emergency injection
#[derive(Debug, Deserialize)]
pub struct EmergencyRequest {
    pub subject_id: SubjectId,
    pub kind: EmergencyKind,
}

/// Ingest one reading
///
/// Readings for unknown subjects are accepted and dropped; the outcome says so.
pub async fn post_reading(
    State(state): State<SharedState>,
    Json(request): Json<ReadingRequest>,
) -> Json<IngestOutcome> {
    let reading = match request.timestamp_ms {
        Some(ts) => Reading::new(request.subject_id, request.vital, request.value, ts),
        None => Reading::now(request.subject_id, request.vital, request.value),
    };
    Json(state.write().await.orchestrator.ingest(reading))
}

/// Inject an emergency reading for a registered subject
pub async fn post_emergency(
    State(state): State<SharedState>,
    Json(request): Json<EmergencyRequest>,
) -> Result<Json<IngestOutcome>, ApiError> {
    let outcome = state
        .write()
        .await
        .orchestrator
        .inject_emergency(request.subject_id, request.kind)?;
    Ok(Json(outcome))
}
