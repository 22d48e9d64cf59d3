//! Prometheus Metrics

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use monitor::{AlertSink, DispatchRecord, SinkError};

/// Records every dispatch as Prometheus metrics
#[derive(Debug, Default)]
pub struct MetricsSink;

impl AlertSink for MetricsSink {
    fn name(&self) -> &str {
        "metrics"
    }

    fn deliver(&self, record: &DispatchRecord) -> Result<(), SinkError> {
        let level = record.alert.risk.as_str();
        counter!("vitals_alerts_dispatched_total", "level" => level).increment(1);
        histogram!("vitals_alert_response_ms", "level" => level).record(record.response_ms as f64);
        if !record.sla_met {
            counter!("vitals_sla_breaches_total", "level" => level).increment(1);
        }
        Ok(())
    }
}

/// Install the global Prometheus recorder
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .add_global_label("service", "vitals-monitor")
        .install_recorder()
}

pub(crate) fn record_queue_depth(pending: usize) {
    gauge!("vitals_pending_alerts").set(pending as f64);
}
