//! Emergency Scenarios

use serde::{Deserialize, Serialize};
use vital_types::{Reading, SubjectId, VitalKind};

/// Canned emergency readings used for drills and manual injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyKind {
    /// Heart rate 200 bpm
    CardiacArrest,
    /// Oxygen saturation 75%
    RespiratoryFailure,
    /// Systolic pressure 220 mmHg
    HypertensiveCrisis,
    /// Body temperature 32 °C
    Hypothermia,
}

impl EmergencyKind {
    /// Vital and value reported by this emergency
    pub fn vital_value(&self) -> (VitalKind, f64) {
        match self {
            EmergencyKind::CardiacArrest => (VitalKind::HeartRate, 200.0),
            EmergencyKind::RespiratoryFailure => (VitalKind::OxygenSaturation, 75.0),
            EmergencyKind::HypertensiveCrisis => (VitalKind::BloodPressure, 220.0),
            EmergencyKind::Hypothermia => (VitalKind::Temperature, 32.0),
        }
    }

    /// Reading for `subject_id` stamped at `timestamp_ms`
    pub fn reading(&self, subject_id: SubjectId, timestamp_ms: u64) -> Reading {
        let (vital, value) = self.vital_value();
        Reading::new(subject_id, vital, value, timestamp_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_classifier::classify;
    use vital_types::RiskLevel;

    #[test]
    fn test_emergency_readings() {
        let reading = EmergencyKind::RespiratoryFailure.reading(3, 99);
        assert_eq!(reading.vital, VitalKind::OxygenSaturation);
        assert_eq!(reading.value, 75.0);
        assert_eq!(reading.subject_id, 3);
    }

    #[test]
    fn test_emergency_risk_levels() {
        let risk = |kind: EmergencyKind| {
            let (vital, value) = kind.vital_value();
            classify(vital, value)
        };
        assert_eq!(risk(EmergencyKind::CardiacArrest), RiskLevel::Critical);
        assert_eq!(risk(EmergencyKind::RespiratoryFailure), RiskLevel::Critical);
        assert_eq!(risk(EmergencyKind::HypertensiveCrisis), RiskLevel::Critical);
        // Temperature has no critical band
        assert_eq!(risk(EmergencyKind::Hypothermia), RiskLevel::High);
    }
}
