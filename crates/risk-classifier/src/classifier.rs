//! Reading Risk Classifier

use crate::{ClassifierError, NormalRanges, VitalBands};
use tracing::trace;
use vital_types::{RiskLevel, VitalKind};

/// Classify a value against the fixed bands and the default normal ranges
pub fn classify(vital: VitalKind, value: f64) -> RiskLevel {
    RiskClassifier::classify_with(&NormalRanges::default(), vital, value)
}

/// Risk classifier bound to one subject's normal ranges
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    ranges: NormalRanges,
}

impl RiskClassifier {
    /// Create a classifier with validated normal ranges
    pub fn new(ranges: NormalRanges) -> Result<Self, ClassifierError> {
        ranges.validate()?;
        Ok(Self { ranges })
    }

    /// Classify a value using this classifier's normal ranges
    pub fn classify(&self, vital: VitalKind, value: f64) -> RiskLevel {
        Self::classify_with(&self.ranges, vital, value)
    }

    /// Classify a value: critical band, high band, fixed medium band, then
    /// the normal range decides between MEDIUM and LOW
    pub fn classify_with(ranges: &NormalRanges, vital: VitalKind, value: f64) -> RiskLevel {
        let bands = VitalBands::for_vital(vital);

        let level = if bands.critical.is_some_and(|b| b.triggers(value)) {
            RiskLevel::Critical
        } else if bands.high.is_some_and(|b| b.triggers(value)) {
            RiskLevel::High
        } else if bands.medium.is_some_and(|b| b.triggers(value))
            || !ranges.contains(vital, value)
        {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        trace!("{} = {} classified {}", vital, value, level);
        level
    }

    pub fn ranges(&self) -> &NormalRanges {
        &self.ranges
    }
}
