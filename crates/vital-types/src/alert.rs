//! Alert Records

use crate::{Reading, RiskLevel, SubjectId, VitalKind};
use serde::{Deserialize, Serialize};

/// Identifier assigned to an alert at creation
pub type AlertId = u64;

/// Which signal path raised an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSource {
    /// Single reading crossed a classification band
    Classifier,
    /// Sustained drift over recent readings
    Trend,
}

/// An alert raised for a subject
///
/// Everything except `acknowledged` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub subject_id: SubjectId,
    pub risk: RiskLevel,
    pub message: String,
    pub vital: VitalKind,
    /// Creation time (Unix ms)
    pub created_at_ms: u64,
    pub acknowledged: bool,
    pub source: AlertSource,
}

impl Alert {
    /// Create a new, unacknowledged alert
    pub fn new(
        id: AlertId,
        subject_id: SubjectId,
        risk: RiskLevel,
        message: impl Into<String>,
        vital: VitalKind,
        created_at_ms: u64,
        source: AlertSource,
    ) -> Self {
        Self {
            id,
            subject_id,
            risk,
            message: message.into(),
            vital,
            created_at_ms,
            acknowledged: false,
            source,
        }
    }

    /// Alert for a reading that crossed a classification band
    pub fn for_reading(
        id: AlertId,
        reading: &Reading,
        risk: RiskLevel,
        created_at_ms: u64,
    ) -> Self {
        let message = format!(
            "{} reading: {} (Priority: {})",
            reading.vital.display_name(),
            reading.value.trunc() as i64,
            risk.value()
        );
        Self::new(
            id,
            reading.subject_id,
            risk,
            message,
            reading.vital,
            created_at_ms,
            AlertSource::Classifier,
        )
    }

    /// Medium-level alert for a sustained drift in one vital
    pub fn for_trend(
        id: AlertId,
        subject_id: SubjectId,
        vital: VitalKind,
        created_at_ms: u64,
    ) -> Self {
        Self::new(
            id,
            subject_id,
            RiskLevel::Medium,
            format!("Concerning trend detected in {}", vital.display_name()),
            vital,
            created_at_ms,
            AlertSource::Trend,
        )
    }

    /// Mark the alert as acknowledged
    pub fn acknowledge(&mut self) {
        self.acknowledged = true;
    }
}
