//! Per-Subject Normal Ranges

use crate::ClassifierError;
use serde::{Deserialize, Serialize};
use vital_types::VitalKind;

/// Normal (inclusive) range of each vital for one subject
///
/// Only decides between MEDIUM and LOW; critical and high bands are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalRanges {
    /// Heart rate range (bpm)
    pub heart_rate: (f64, f64),
    /// Systolic blood pressure range (mmHg)
    pub blood_pressure: (f64, f64),
    /// Oxygen saturation range (%)
    pub oxygen_saturation: (f64, f64),
    /// Temperature range (°C)
    pub temperature: (f64, f64),
    /// Respiratory rate range (breaths/min)
    pub respiratory_rate: (f64, f64),
}

impl Default for NormalRanges {
    fn default() -> Self {
        Self {
            heart_rate: (60.0, 100.0),
            blood_pressure: (90.0, 140.0),
            oxygen_saturation: (95.0, 100.0),
            temperature: (36.1, 37.2),
            respiratory_rate: (12.0, 20.0),
        }
    }
}

impl NormalRanges {
    /// Range for a vital
    pub fn get(&self, vital: VitalKind) -> (f64, f64) {
        match vital {
            VitalKind::HeartRate => self.heart_rate,
            VitalKind::BloodPressure => self.blood_pressure,
            VitalKind::OxygenSaturation => self.oxygen_saturation,
            VitalKind::Temperature => self.temperature,
            VitalKind::RespiratoryRate => self.respiratory_rate,
        }
    }

    /// Replace the range of one vital
    pub fn set(&mut self, vital: VitalKind, range: (f64, f64)) -> Result<(), ClassifierError> {
        check_range(vital, range)?;
        let slot = match vital {
            VitalKind::HeartRate => &mut self.heart_rate,
            VitalKind::BloodPressure => &mut self.blood_pressure,
            VitalKind::OxygenSaturation => &mut self.oxygen_saturation,
            VitalKind::Temperature => &mut self.temperature,
            VitalKind::RespiratoryRate => &mut self.respiratory_rate,
        };
        *slot = range;
        Ok(())
    }

    /// Whether `value` lies inside the normal range of `vital`
    pub fn contains(&self, vital: VitalKind, value: f64) -> bool {
        let (min, max) = self.get(vital);
        value >= min && value <= max
    }

    /// Check every range for finite, ordered bounds
    pub fn validate(&self) -> Result<(), ClassifierError> {
        VitalKind::ALL
            .iter()
            .try_for_each(|&vital| check_range(vital, self.get(vital)))
    }
}

fn check_range(vital: VitalKind, (min, max): (f64, f64)) -> Result<(), ClassifierError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ClassifierError::InvalidRange { vital, min, max });
    }
    Ok(())
}
