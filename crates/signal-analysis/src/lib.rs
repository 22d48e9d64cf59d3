//! Signal Analysis
//!
//! Statistical helpers over a window of readings: summary statistics,
//! sustained-drift detection and the z-score false-alarm test.

mod false_alarm;
mod statistics;
mod trend;

pub use false_alarm::{FalseAlarmFilter, FilterConfig};
pub use statistics::WindowStatistics;
pub use trend::{TrendConfig, TrendDetector};
