//! Monitor Error Types

use risk_classifier::ClassifierError;
use thiserror::Error;
use vital_types::{AlertId, SubjectId};

use crate::DeviceId;

/// Errors returned by explicit control operations
///
/// The ingestion and drain paths never fail; these only surface from
/// registry and acknowledgement calls.
#[derive(Debug, Error, PartialEq)]
pub enum MonitorError {
    #[error("Subject {0} is already registered")]
    DuplicateSubject(SubjectId),

    #[error("Unknown subject: {0}")]
    UnknownSubject(SubjectId),

    #[error("Unknown device: {0}")]
    UnknownDevice(DeviceId),

    #[error("Unknown alert: {0}")]
    UnknownAlert(AlertId),

    /// Alert is still queued; only dispatched alerts can be acknowledged
    #[error("Alert {0} has not been dispatched yet")]
    NotDispatched(AlertId),

    #[error(transparent)]
    InvalidRanges(#[from] ClassifierError),
}
