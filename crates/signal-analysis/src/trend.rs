//! Sustained Drift Detection

use crate::WindowStatistics;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vital_types::Reading;

/// Trend detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Number of most recent readings inspected (default: 5)
    pub window: usize,
    /// Absolute mean change per reading that counts as a trend (default: 2.0)
    pub threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 5,
            threshold: 2.0,
        }
    }
}

/// Flags a sustained directional drift in a reading series
#[derive(Debug, Clone, Default)]
pub struct TrendDetector {
    config: TrendConfig,
}

impl TrendDetector {
    pub fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Whether the most recent readings drift by more than the threshold on
    /// average; false with fewer readings than the window
    pub fn detect(&self, history: &[Reading]) -> bool {
        let values: Vec<f64> = history.iter().map(|r| r.value).collect();
        self.detect_values(&values)
    }

    /// Same as [`detect`](Self::detect) over raw values, oldest first
    pub fn detect_values(&self, values: &[f64]) -> bool {
        let window = self.config.window.max(2);
        if values.len() < window {
            return false;
        }

        let recent = &values[values.len() - window..];
        let stats = WindowStatistics::compute(recent);
        let trending = stats.mean_delta.abs() > self.config.threshold;

        if trending {
            debug!(
                "Trend detected: mean change {:.2} over last {} readings",
                stats.mean_delta, window
            );
        }
        trending
    }

    pub fn config(&self) -> &TrendConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rising_series_is_trend() {
        let detector = TrendDetector::default();
        assert!(detector.detect_values(&[70.0, 73.0, 76.0, 79.0, 82.0]));
    }

    #[test]
    fn test_falling_series_is_trend() {
        let detector = TrendDetector::default();
        assert!(detector.detect_values(&[98.0, 95.0, 92.0, 89.0, 86.0]));
    }

    #[test]
    fn test_flat_series_is_not_trend() {
        let detector = TrendDetector::default();
        assert!(!detector.detect_values(&[75.0, 75.0, 75.0, 75.0, 75.0]));
    }

    #[test]
    fn test_short_history_is_not_trend() {
        let detector = TrendDetector::default();
        assert!(!detector.detect_values(&[70.0, 80.0, 90.0, 100.0]));
        assert!(!detector.detect(&[]));
    }

    #[test]
    fn test_only_last_window_counts() {
        let detector = TrendDetector::default();
        // Steep early climb, then flat for the last five
        let values = [40.0, 60.0, 80.0, 100.0, 100.0, 100.0, 100.0, 100.0];
        assert!(!detector.detect_values(&values));
    }

    #[test]
    fn test_threshold_is_strict() {
        let detector = TrendDetector::default();
        // Average change exactly 2.0
        assert!(!detector.detect_values(&[70.0, 72.0, 74.0, 76.0, 78.0]));
    }

    proptest! {
        #[test]
        fn prop_negated_series_gives_same_answer(
            values in proptest::collection::vec(-200.0f64..200.0, 0..12)
        ) {
            let detector = TrendDetector::default();
            let negated: Vec<f64> = values.iter().map(|v| -v).collect();
            prop_assert_eq!(detector.detect_values(&values), detector.detect_values(&negated));
        }

        #[test]
        fn prop_short_series_is_never_trend(
            values in proptest::collection::vec(-200.0f64..200.0, 0..5)
        ) {
            prop_assert!(!TrendDetector::default().detect_values(&values));
        }
    }

    #[test]
    fn test_detect_on_readings() {
        let detector = TrendDetector::default();
        let readings: Vec<Reading> = [36.0, 38.5, 41.0, 43.5, 46.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| Reading::new(1, vital_types::VitalKind::Temperature, v, i as u64))
            .collect();
        assert!(detector.detect(&readings));
    }
}
