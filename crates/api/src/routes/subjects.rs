//! Subject Routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use monitor::{DeviceId, SubjectSummary};
use serde::{Deserialize, Serialize};
use vital_types::SubjectId;

use crate::{ApiError, SharedState};

/// Registration request
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub id: SubjectId,
    pub name: String,
    pub age: u32,
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct CreateSubjectResponse {
    pub subject: SubjectSummary,
    /// Devices attached at registration
    pub devices: Vec<DeviceId>,
}

/// List all subjects
pub async fn list_subjects(State(state): State<SharedState>) -> Json<Vec<SubjectSummary>> {
    Json(state.read().await.orchestrator.subjects())
}

/// Register a subject
pub async fn create_subject(
    State(state): State<SharedState>,
    Json(request): Json<CreateSubjectRequest>,
) -> Result<(StatusCode, Json<CreateSubjectResponse>), ApiError> {
    let mut state = state.write().await;
    let orchestrator = &mut state.orchestrator;

    let devices = orchestrator.register_subject(request.id, request.name, request.age)?;
    let subject = orchestrator
        .subject(request.id)
        .map(|s| s.summary())
        .ok_or(monitor::MonitorError::UnknownSubject(request.id))?;

    Ok((StatusCode::CREATED, Json(CreateSubjectResponse { subject, devices })))
}
