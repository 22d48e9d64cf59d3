//! Alert Delivery Sinks

use alert_queue::DispatchRecord;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};
use vital_types::RiskLevel;

/// Errors reported by a sink; logged by the orchestrator, never fatal
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Receiver of every dispatched alert
pub trait AlertSink: Send + Sync {
    /// Sink name, used in logs
    fn name(&self) -> &str;

    /// Deliver one dispatch record
    fn deliver(&self, record: &DispatchRecord) -> Result<(), SinkError>;
}

/// Writes each dispatch to the tracing log
#[derive(Debug, Default)]
pub struct TracingSink;

impl AlertSink for TracingSink {
    fn name(&self) -> &str {
        "tracing"
    }

    fn deliver(&self, record: &DispatchRecord) -> Result<(), SinkError> {
        let alert = &record.alert;
        let at = DateTime::<Utc>::from_timestamp_millis(record.dispatched_at_ms as i64)
            .map(|t| t.format("%H:%M:%S%.3f").to_string())
            .unwrap_or_default();

        match alert.risk {
            RiskLevel::Critical => error!(
                at = %at,
                risk = %alert.risk,
                subject = alert.subject_id,
                response_ms = record.response_ms,
                sla_met = record.sla_met,
                action = alert.risk.response_action(),
                "{}",
                alert.message
            ),
            RiskLevel::High => warn!(
                at = %at,
                risk = %alert.risk,
                subject = alert.subject_id,
                response_ms = record.response_ms,
                sla_met = record.sla_met,
                action = alert.risk.response_action(),
                "{}",
                alert.message
            ),
            RiskLevel::Medium | RiskLevel::Low => info!(
                at = %at,
                risk = %alert.risk,
                subject = alert.subject_id,
                response_ms = record.response_ms,
                sla_met = record.sla_met,
                action = alert.risk.response_action(),
                "{}",
                alert.message
            ),
        }
        Ok(())
    }
}
