//! Dispatch Counters

use crate::DispatchRecord;
use serde::{Deserialize, Serialize};
use vital_types::RiskLevel;

/// Running counters of the alert pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Alerts dispatched
    pub dispatched: u64,
    /// Candidate alerts dropped as likely false alarms
    pub suppressed: u64,
    /// Dispatches that missed their deadline
    pub sla_breaches: u64,
    /// Dispatches per risk level, most urgent first
    pub dispatched_by_level: [u64; 4],
}

impl QueueStats {
    /// Count a dispatch
    pub fn record_dispatch(&mut self, record: &DispatchRecord) {
        self.dispatched += 1;
        self.dispatched_by_level[level_index(record.alert.risk)] += 1;
        if !record.sla_met {
            self.sla_breaches += 1;
        }
    }

    /// Count a suppressed false alarm
    pub fn record_suppressed(&mut self) {
        self.suppressed += 1;
    }

    /// Dispatches of one risk level
    pub fn dispatched_for(&self, risk: RiskLevel) -> u64 {
        self.dispatched_by_level[level_index(risk)]
    }
}

fn level_index(risk: RiskLevel) -> usize {
    (risk.value() - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_types::{Alert, AlertSource, VitalKind};

    #[test]
    fn test_counts_by_level_and_breach() {
        let mut stats = QueueStats::default();
        let alert = Alert::new(
            1,
            1,
            RiskLevel::Critical,
            "x",
            VitalKind::HeartRate,
            0,
            AlertSource::Classifier,
        );

        stats.record_dispatch(&DispatchRecord::new(alert.clone(), 100));
        stats.record_dispatch(&DispatchRecord::new(alert, 5_000));
        stats.record_suppressed();

        assert_eq!(stats.dispatched, 2);
        assert_eq!(stats.dispatched_for(RiskLevel::Critical), 2);
        assert_eq!(stats.dispatched_for(RiskLevel::Low), 0);
        assert_eq!(stats.sla_breaches, 1);
        assert_eq!(stats.suppressed, 1);
    }
}
