//! Vital-Sign Domain Types
//!
//! Readings, vital kinds, risk levels and alerts shared by every stage of
//! the alert scheduling pipeline.

mod alert;
mod reading;
mod risk;

pub use alert::{Alert, AlertId, AlertSource};
pub use reading::{Reading, SubjectId, VitalKind};
pub use risk::RiskLevel;

/// Current wall-clock time in Unix milliseconds
pub fn unix_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
