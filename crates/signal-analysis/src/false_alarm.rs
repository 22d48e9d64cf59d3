//! Statistical False-Alarm Filter

use crate::WindowStatistics;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vital_types::{Reading, RiskLevel};

/// False-alarm filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum readings before the filter may suppress (default: 5)
    pub min_samples: usize,
    /// Readings of history handed to the filter (default: 10)
    pub window: usize,
    /// z-score below which a critical alert is treated as noise (default: 2.5)
    pub critical_z_threshold: f64,
    /// z-score below which any other alert is treated as noise (default: 1.5)
    pub z_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_samples: 5,
            window: 10,
            critical_z_threshold: 2.5,
            z_threshold: 1.5,
        }
    }
}

/// Decides whether a candidate alert is baseline noise
#[derive(Debug, Clone, Default)]
pub struct FalseAlarmFilter {
    config: FilterConfig,
}

impl FalseAlarmFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// z-score threshold applied to a candidate of the given risk
    pub fn threshold_for(&self, risk: RiskLevel) -> f64 {
        match risk {
            RiskLevel::Critical => self.config.critical_z_threshold,
            RiskLevel::High | RiskLevel::Medium | RiskLevel::Low => self.config.z_threshold,
        }
    }

    /// Whether the latest of `recent` (most recent last) sits close enough
    /// to the window's baseline to be dismissed
    ///
    /// Never suppresses with too little data or a constant window.
    pub fn is_likely_false_alarm(&self, candidate: RiskLevel, recent: &[Reading]) -> bool {
        let values: Vec<f64> = recent.iter().map(|r| r.value).collect();
        self.is_likely_false_alarm_values(candidate, &values)
    }

    /// Same as [`is_likely_false_alarm`](Self::is_likely_false_alarm) over raw values
    pub fn is_likely_false_alarm_values(&self, candidate: RiskLevel, values: &[f64]) -> bool {
        if values.len() < self.config.min_samples {
            return false;
        }
        let Some(&latest) = values.last() else {
            return false;
        };

        let stats = WindowStatistics::compute(values);
        let Some(z) = stats.z_score(latest) else {
            return false;
        };

        let threshold = self.threshold_for(candidate);
        let suppress = z < threshold;
        debug!(
            "False-alarm check: latest={} mean={:.2} sd={:.2} z={:.2} threshold={} suppress={}",
            latest, stats.mean, stats.std_dev, z, threshold, suppress
        );
        suppress
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}
