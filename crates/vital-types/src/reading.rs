//! Vital Kinds and Readings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a monitored subject
pub type SubjectId = u32;

/// Vital signs that a bedside device can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    /// Heart rate (beats per minute)
    HeartRate,
    /// Systolic blood pressure (mmHg)
    BloodPressure,
    /// Peripheral oxygen saturation (%)
    OxygenSaturation,
    /// Body temperature (°C)
    Temperature,
    /// Respiratory rate (breaths per minute)
    RespiratoryRate,
}

impl VitalKind {
    /// Every vital kind, in declaration order
    pub const ALL: [VitalKind; 5] = [
        VitalKind::HeartRate,
        VitalKind::BloodPressure,
        VitalKind::OxygenSaturation,
        VitalKind::Temperature,
        VitalKind::RespiratoryRate,
    ];

    /// Human-readable name used in alert messages
    pub fn display_name(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "Heart Rate",
            VitalKind::BloodPressure => "Blood Pressure",
            VitalKind::OxygenSaturation => "Oxygen Saturation",
            VitalKind::Temperature => "Temperature",
            VitalKind::RespiratoryRate => "Respiratory Rate",
        }
    }

    /// Native unit of the vital
    pub fn unit(&self) -> &'static str {
        match self {
            VitalKind::HeartRate => "bpm",
            VitalKind::BloodPressure => "mmHg",
            VitalKind::OxygenSaturation => "%",
            VitalKind::Temperature => "°C",
            VitalKind::RespiratoryRate => "breaths/min",
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single vital-sign measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Subject the reading belongs to
    pub subject_id: SubjectId,
    /// Which vital was measured
    pub vital: VitalKind,
    /// Measured value in the vital's native unit
    pub value: f64,
    /// Measurement time (Unix ms)
    pub timestamp_ms: u64,
}

impl Reading {
    /// Create a reading stamped with the given time
    pub fn new(subject_id: SubjectId, vital: VitalKind, value: f64, timestamp_ms: u64) -> Self {
        Self {
            subject_id,
            vital,
            value,
            timestamp_ms,
        }
    }

    /// Create a reading stamped with the current wall-clock time
    pub fn now(subject_id: SubjectId, vital: VitalKind, value: f64) -> Self {
        Self::new(subject_id, vital, value, crate::unix_millis())
    }
}
