//! Classifier Error Types

use thiserror::Error;
use vital_types::VitalKind;

/// Errors raised when configuring the classifier
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassifierError {
    /// Normal range bounds are reversed or not finite
    #[error("invalid normal range for {vital}: [{min}, {max}]")]
    InvalidRange {
        vital: VitalKind,
        min: f64,
        max: f64,
    },
}
