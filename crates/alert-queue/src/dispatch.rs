//! Dispatch Records

use serde::{Deserialize, Serialize};
use vital_types::{Alert, RiskLevel};

/// Whether a response time is within the deadline of a risk level
pub fn sla_met(risk: RiskLevel, response_ms: u64) -> bool {
    response_ms <= risk.sla_deadline_ms()
}

/// Outcome of dispatching one alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// The dispatched alert
    pub alert: Alert,
    /// Dispatch time (Unix ms)
    pub dispatched_at_ms: u64,
    /// Time from alert creation to dispatch
    pub response_ms: u64,
    /// Response time within the risk level's deadline
    pub sla_met: bool,
}

impl DispatchRecord {
    /// Build the record for dispatching `alert` at `now_ms`
    pub fn new(alert: Alert, now_ms: u64) -> Self {
        // Clock skew never yields a negative response time
        let response_ms = now_ms.saturating_sub(alert.created_at_ms);
        let sla_met = sla_met(alert.risk, response_ms);
        Self {
            alert,
            dispatched_at_ms: now_ms,
            response_ms,
            sla_met,
        }
    }
}
