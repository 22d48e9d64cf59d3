//! Monitor Configuration

use risk_classifier::NormalRanges;
use serde::{Deserialize, Serialize};
use signal_analysis::{FilterConfig, TrendConfig};

/// Orchestrator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Readings kept per subject and vital (default: 100)
    pub history_capacity: usize,
    /// False-alarm filter settings
    pub filter: FilterConfig,
    /// Trend detector settings
    pub trend: TrendConfig,
    /// Pending alerts that trigger an overload warning (default: 1000)
    pub queue_warn_threshold: usize,
    /// Dispatch records kept for inspection and acknowledgement (default: 1000)
    pub dispatch_log_capacity: usize,
    /// Normal ranges given to newly registered subjects
    pub default_ranges: NormalRanges,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            history_capacity: vital_history::DEFAULT_CAPACITY,
            filter: FilterConfig::default(),
            trend: TrendConfig::default(),
            queue_warn_threshold: 1_000,
            dispatch_log_capacity: 1_000,
            default_ranges: NormalRanges::default(),
        }
    }
}
