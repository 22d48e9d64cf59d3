//! Scheduling Orchestrator

use crate::{
    AlertSink, Clock, Device, DeviceId, EmergencyKind, MonitorConfig, MonitorError, ReadingSource,
    Subject, SubjectSummary, SystemClock, TracingSink, DEFAULT_DEVICE_VITALS,
};
use alert_queue::{AlertQueue, DispatchRecord};
use risk_classifier::{NormalRanges, RiskClassifier};
use serde::{Deserialize, Serialize};
use signal_analysis::{FalseAlarmFilter, TrendDetector};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, info, warn};
use vital_types::{Alert, AlertId, Reading, RiskLevel, SubjectId, VitalKind};

/// Why a reading was discarded before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// No subject registered under the reading's id
    UnknownSubject,
    /// Value was NaN or infinite
    NonFiniteValue,
}

/// Result of ingesting one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestOutcome {
    Dropped {
        reason: DropReason,
    },
    Processed {
        /// Classification of the reading
        risk: RiskLevel,
        /// Classifier alert queued for this reading
        alert: Option<AlertId>,
        /// Classifier alert dropped as a likely false alarm
        suppressed: bool,
        /// Trend alert queued for this reading
        trend_alert: Option<AlertId>,
    },
}

impl IngestOutcome {
    /// Ids of every alert this reading queued
    pub fn queued(&self) -> Vec<AlertId> {
        match self {
            IngestOutcome::Dropped { .. } => Vec::new(),
            IngestOutcome::Processed { alert, trend_alert, .. } => {
                alert.iter().chain(trend_alert.iter()).copied().collect()
            }
        }
    }
}

/// Summary of one monitoring cycle
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// Cycle number, starting at 1
    pub cycle: u64,
    /// Readings collected from active devices
    pub readings: usize,
    /// Alerts dispatched at the end of the cycle, in dispatch order
    pub dispatched: Vec<DispatchRecord>,
}

/// Aggregate statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub subject_count: usize,
    pub device_count: usize,
    pub active_device_count: usize,
    pub alerts_dispatched: u64,
    pub false_alarms_suppressed: u64,
    pub sla_breaches: u64,
    pub pending_alerts: usize,
    pub readings_ingested: u64,
    pub readings_dropped: u64,
    pub cycles_completed: u64,
}

/// Coordinates classification, filtering, queueing and dispatch
///
/// Sole owner and writer of subject histories; every mutation goes through
/// `&mut self`, so readings for one subject and vital are never interleaved.
pub struct SchedulingOrchestrator {
    config: MonitorConfig,
    /// Registered subjects by id
    subjects: BTreeMap<SubjectId, Subject>,
    /// Devices in registration order; a device's id is its index
    devices: Vec<Device>,
    queue: AlertQueue,
    filter: FalseAlarmFilter,
    trend: TrendDetector,
    /// Recently dispatched alerts, oldest first
    dispatch_log: VecDeque<DispatchRecord>,
    sinks: Vec<Box<dyn AlertSink>>,
    clock: Arc<dyn Clock>,
    next_alert_id: AlertId,
    readings_ingested: u64,
    readings_dropped: u64,
    cycles_completed: u64,
}

impl SchedulingOrchestrator {
    /// Create an orchestrator on the wall clock, logging dispatches via tracing
    pub fn new(config: MonitorConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an orchestrator on a custom clock
    pub fn with_clock(config: MonitorConfig, clock: Arc<dyn Clock>) -> Self {
        info!("Creating scheduling orchestrator with config: {:?}", config);
        Self {
            queue: AlertQueue::with_warn_threshold(config.queue_warn_threshold),
            filter: FalseAlarmFilter::new(config.filter.clone()),
            trend: TrendDetector::new(config.trend.clone()),
            dispatch_log: VecDeque::with_capacity(config.dispatch_log_capacity.min(1_024)),
            subjects: BTreeMap::new(),
            devices: Vec::new(),
            sinks: vec![Box::new(TracingSink)],
            clock,
            next_alert_id: 1,
            readings_ingested: 0,
            readings_dropped: 0,
            cycles_completed: 0,
            config,
        }
    }

    /// Add a sink that receives every dispatched alert
    pub fn add_sink(&mut self, sink: Box<dyn AlertSink>) {
        info!("Registered alert sink: {}", sink.name());
        self.sinks.push(sink);
    }

    /// Register a subject and attach one device per default vital
    pub fn register_subject(
        &mut self,
        id: SubjectId,
        name: impl Into<String>,
        age: u32,
    ) -> Result<Vec<DeviceId>, MonitorError> {
        if self.subjects.contains_key(&id) {
            return Err(MonitorError::DuplicateSubject(id));
        }

        let subject = Subject::new(
            id,
            name,
            age,
            self.config.default_ranges,
            self.config.history_capacity,
        );
        info!("Registered subject {} ({}, age {})", id, subject.name, subject.age);
        self.subjects.insert(id, subject);

        let devices = DEFAULT_DEVICE_VITALS
            .iter()
            .map(|&vital| self.push_device(id, vital))
            .collect();
        Ok(devices)
    }

    /// Attach an extra device to a registered subject
    pub fn attach_device(
        &mut self,
        subject_id: SubjectId,
        vital: VitalKind,
    ) -> Result<DeviceId, MonitorError> {
        if !self.subjects.contains_key(&subject_id) {
            return Err(MonitorError::UnknownSubject(subject_id));
        }
        Ok(self.push_device(subject_id, vital))
    }

    fn push_device(&mut self, subject_id: SubjectId, vital: VitalKind) -> DeviceId {
        let id = self.devices.len() as DeviceId;
        self.devices.push(Device::new(id, subject_id, vital));
        debug!("Attached device {} ({}) to subject {}", id, vital, subject_id);
        id
    }

    /// Stop polling a device in monitoring cycles
    pub fn deactivate_device(&mut self, id: DeviceId) -> Result<(), MonitorError> {
        let device = self
            .devices
            .get_mut(id as usize)
            .ok_or(MonitorError::UnknownDevice(id))?;
        device.active = false;
        info!("Device {} deactivated", id);
        Ok(())
    }

    /// Replace a subject's normal ranges
    pub fn set_normal_ranges(
        &mut self,
        subject_id: SubjectId,
        ranges: NormalRanges,
    ) -> Result<(), MonitorError> {
        ranges.validate()?;
        let subject = self
            .subjects
            .get_mut(&subject_id)
            .ok_or(MonitorError::UnknownSubject(subject_id))?;
        subject.ranges = ranges;
        Ok(())
    }

    /// Run one reading through history, classification, filtering and
    /// trend detection
    ///
    /// Never fails: unusable readings are dropped and reported in the outcome.
    pub fn ingest(&mut self, reading: Reading) -> IngestOutcome {
        let Some(subject) = self.subjects.get_mut(&reading.subject_id) else {
            debug!("Dropping reading for unknown subject {}", reading.subject_id);
            self.readings_dropped += 1;
            return IngestOutcome::Dropped {
                reason: DropReason::UnknownSubject,
            };
        };

        if !reading.value.is_finite() {
            warn!(
                "Dropping non-finite {} reading for subject {}",
                reading.vital, reading.subject_id
            );
            self.readings_dropped += 1;
            return IngestOutcome::Dropped {
                reason: DropReason::NonFiniteValue,
            };
        }

        let now = self.clock.now_ms();
        subject.history.record(reading);
        let risk = RiskClassifier::classify_with(&subject.ranges, reading.vital, reading.value);
        subject.update_risk(reading.vital, risk);

        let recent = subject.history.recent(reading.vital, self.filter.config().window);
        let trend_window = subject.history.recent(reading.vital, self.trend.config().window);
        let trending = self.trend.detect(&trend_window);
        self.readings_ingested += 1;

        let mut alert = None;
        let mut suppressed = false;
        if risk != RiskLevel::Low {
            let candidate = Alert::for_reading(self.allocate_alert_id(), &reading, risk, now);
            if self.filter.is_likely_false_alarm(risk, &recent) {
                info!(
                    "False alarm filtered for subject {}: {}",
                    candidate.subject_id, candidate.message
                );
                self.queue.record_suppressed();
                suppressed = true;
            } else {
                alert = Some(candidate.id);
                self.queue.push(candidate);
            }
        }

        // Trend alerts run in parallel with classifier alerts and are not deduplicated
        let trend_alert = if trending {
            let alert =
                Alert::for_trend(self.allocate_alert_id(), reading.subject_id, reading.vital, now);
            let id = alert.id;
            self.queue.push(alert);
            Some(id)
        } else {
            None
        };

        debug!(
            "Subject {} {} = {} {} -> {} (alert={:?}, suppressed={}, trend={:?})",
            reading.subject_id,
            reading.vital,
            reading.value,
            reading.vital.unit(),
            risk,
            alert,
            suppressed,
            trend_alert
        );

        IngestOutcome::Processed {
            risk,
            alert,
            suppressed,
            trend_alert,
        }
    }

    /// Ingest the canned reading of an emergency scenario
    pub fn inject_emergency(
        &mut self,
        subject_id: SubjectId,
        kind: EmergencyKind,
    ) -> Result<IngestOutcome, MonitorError> {
        if !self.subjects.contains_key(&subject_id) {
            return Err(MonitorError::UnknownSubject(subject_id));
        }
        warn!("Emergency {:?} injected for subject {}", kind, subject_id);
        let reading = kind.reading(subject_id, self.clock.now_ms());
        Ok(self.ingest(reading))
    }

    /// Dispatch every pending alert in priority order
    ///
    /// Each record goes to every sink; sink failures are logged and skipped.
    pub fn drain(&mut self) -> Vec<DispatchRecord> {
        let now = self.clock.now_ms();
        let records = self.queue.dispatch_all(now);
        let log_capacity = self.config.dispatch_log_capacity.max(1);

        for record in &records {
            for sink in &self.sinks {
                if let Err(e) = sink.deliver(record) {
                    warn!(
                        "Sink {} failed to deliver alert {}: {}",
                        sink.name(),
                        record.alert.id,
                        e
                    );
                }
            }

            while self.dispatch_log.len() >= log_capacity {
                self.dispatch_log.pop_front();
            }
            self.dispatch_log.push_back(record.clone());
        }

        records
    }

    /// Poll every active device once, ingest the readings, then drain
    pub fn run_cycle<S: ReadingSource + ?Sized>(&mut self, source: &mut S) -> CycleReport {
        let readings: Vec<Reading> = self
            .devices
            .iter()
            .filter(|d| d.active)
            .filter_map(|d| source.next_reading(d))
            .collect();

        for reading in &readings {
            self.ingest(*reading);
        }

        let dispatched = self.drain();
        self.cycles_completed += 1;
        info!(
            "Cycle {} complete: {} readings, {} alerts dispatched",
            self.cycles_completed,
            readings.len(),
            dispatched.len()
        );

        CycleReport {
            cycle: self.cycles_completed,
            readings: readings.len(),
            dispatched,
        }
    }

    /// Mark a dispatched alert as acknowledged
    ///
    /// Acknowledging twice is a no-op.
    pub fn acknowledge(&mut self, alert_id: AlertId) -> Result<(), MonitorError> {
        if let Some(record) = self.dispatch_log.iter_mut().find(|r| r.alert.id == alert_id) {
            if !record.alert.acknowledged {
                record.alert.acknowledge();
                info!("Alert {} acknowledged", alert_id);
            }
            return Ok(());
        }

        if self.queue.contains(alert_id) {
            Err(MonitorError::NotDispatched(alert_id))
        } else {
            Err(MonitorError::UnknownAlert(alert_id))
        }
    }

    /// Most recent dispatches, newest first
    pub fn recent_dispatches(&self, limit: usize) -> Vec<DispatchRecord> {
        self.dispatch_log.iter().rev().take(limit).cloned().collect()
    }

    pub fn statistics(&self) -> Statistics {
        let stats = self.queue.stats();
        Statistics {
            subject_count: self.subjects.len(),
            device_count: self.devices.len(),
            active_device_count: self.devices.iter().filter(|d| d.active).count(),
            alerts_dispatched: stats.dispatched,
            false_alarms_suppressed: stats.suppressed,
            sla_breaches: stats.sla_breaches,
            pending_alerts: self.queue.len(),
            readings_ingested: self.readings_ingested,
            readings_dropped: self.readings_dropped,
            cycles_completed: self.cycles_completed,
        }
    }

    /// Summaries of all subjects, ordered by id
    pub fn subjects(&self) -> Vec<SubjectSummary> {
        self.subjects.values().map(Subject::summary).collect()
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(&id)
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn has_pending(&self) -> bool {
        self.queue.has_pending()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    fn allocate_alert_id(&mut self) -> AlertId {
        let id = self.next_alert_id;
        self.next_alert_id += 1;
        id
    }
}

impl Default for SchedulingOrchestrator {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManualClock, ScriptedSource, SinkError};
    use std::sync::Mutex;

    /// Records every dispatch it receives
    #[derive(Clone, Default)]
    struct CollectingSink {
        records: Arc<Mutex<Vec<DispatchRecord>>>,
    }

    impl AlertSink for CollectingSink {
        fn name(&self) -> &str {
            "collecting"
        }

        fn deliver(&self, record: &DispatchRecord) -> Result<(), SinkError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl AlertSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        fn deliver(&self, _record: &DispatchRecord) -> Result<(), SinkError> {
            Err(SinkError::DeliveryFailed("pager offline".to_string()))
        }
    }

    fn orchestrator() -> (SchedulingOrchestrator, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        let orchestrator =
            SchedulingOrchestrator::with_clock(MonitorConfig::default(), clock.clone());
        (orchestrator, clock)
    }

    fn feed(
        orch: &mut SchedulingOrchestrator,
        subject: SubjectId,
        vital: VitalKind,
        values: &[f64],
    ) -> Vec<IngestOutcome> {
        values
            .iter()
            .map(|&v| orch.ingest(Reading::new(subject, vital, v, 0)))
            .collect()
    }

    #[test]
    fn test_first_critical_reading_is_dispatched_within_sla() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test Subject", 45).unwrap();

        let outcome = orch.ingest(Reading::new(1, VitalKind::HeartRate, 220.0, 0));
        match outcome {
            IngestOutcome::Processed { risk, alert, suppressed, trend_alert } => {
                assert_eq!(risk, RiskLevel::Critical);
                assert!(alert.is_some());
                assert!(!suppressed);
                assert!(trend_alert.is_none());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let records = orch.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alert.risk, RiskLevel::Critical);
        assert_eq!(records[0].response_ms, 0);
        assert!(records[0].sla_met);
        assert!(!orch.has_pending());
    }

    #[test]
    fn test_response_time_tracks_clock() {
        let (mut orch, clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();

        orch.ingest(Reading::new(1, VitalKind::OxygenSaturation, 80.0, 0));
        clock.advance(2_500);
        let records = orch.drain();

        assert_eq!(records[0].response_ms, 2_500);
        assert!(!records[0].sla_met);
        assert_eq!(orch.statistics().sla_breaches, 1);
    }

    #[test]
    fn test_unknown_subject_is_dropped() {
        let (mut orch, _clock) = orchestrator();

        let outcome = orch.ingest(Reading::new(99, VitalKind::HeartRate, 220.0, 0));
        assert_eq!(outcome, IngestOutcome::Dropped { reason: DropReason::UnknownSubject });
        assert!(!orch.has_pending());
        assert_eq!(orch.statistics().readings_dropped, 1);
    }

    #[test]
    fn test_non_finite_reading_is_dropped() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();

        let outcome = orch.ingest(Reading::new(1, VitalKind::HeartRate, f64::NAN, 0));
        assert_eq!(outcome, IngestOutcome::Dropped { reason: DropReason::NonFiniteValue });
        assert_eq!(orch.subject(1).unwrap().history.len(VitalKind::HeartRate), 0);
    }

    #[test]
    fn test_unknown_subject_wins_over_non_finite() {
        let (mut orch, _clock) = orchestrator();

        let outcome = orch.ingest(Reading::new(8, VitalKind::HeartRate, f64::INFINITY, 0));
        assert_eq!(outcome, IngestOutcome::Dropped { reason: DropReason::UnknownSubject });
        assert_eq!(orch.statistics().readings_dropped, 1);
    }

    #[test]
    fn test_stuck_high_reading_is_never_suppressed() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();

        let outcomes = feed(&mut orch, 1, VitalKind::HeartRate, &[121.7; 10]);
        assert!(outcomes.iter().all(|o| matches!(
            o,
            IngestOutcome::Processed { risk: RiskLevel::High, suppressed: false, .. }
        )));

        assert_eq!(orch.drain().len(), 10);
        assert_eq!(orch.statistics().false_alarms_suppressed, 0);
    }

    #[test]
    fn test_suppression_is_counted() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();
        let ranges = NormalRanges {
            heart_rate: (60.0, 75.0),
            ..Default::default()
        };
        orch.set_normal_ranges(1, ranges).unwrap();

        // 76 is MEDIUM under these ranges but sits on the noisy baseline
        let outcomes = feed(
            &mut orch,
            1,
            VitalKind::HeartRate,
            &[75.0, 76.0, 74.0, 75.0, 75.0, 76.0, 74.0, 75.0, 75.0, 76.0],
        );
        let suppressed = outcomes
            .iter()
            .filter(|o| matches!(o, IngestOutcome::Processed { suppressed: true, .. }))
            .count();
        assert_eq!(suppressed, 2);

        let records = orch.drain();
        assert_eq!(records.len(), 1); // The second reading, before the filter had data

        let stats = orch.statistics();
        assert_eq!(stats.false_alarms_suppressed, 2);
        assert_eq!(stats.alerts_dispatched, 1);
    }

    #[test]
    fn test_trend_fires_on_low_readings() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();

        let outcomes = feed(&mut orch, 1, VitalKind::HeartRate, &[70.0, 73.0, 76.0, 79.0, 82.0]);
        assert_eq!(outcomes[4].queued().len(), 1);

        let records = orch.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alert.risk, RiskLevel::Medium);
        assert_eq!(records[0].alert.message, "Concerning trend detected in Heart Rate");
    }

    #[test]
    fn test_one_reading_can_raise_two_alerts() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();

        let outcomes = feed(&mut orch, 1, VitalKind::HeartRate, &[75.0, 75.0, 75.0, 75.0, 130.0]);
        assert_eq!(outcomes[4].queued().len(), 2);

        let order: Vec<RiskLevel> = orch.drain().iter().map(|r| r.alert.risk).collect();
        assert_eq!(order, vec![RiskLevel::High, RiskLevel::Medium]);
    }

    #[test]
    fn test_drain_orders_across_subjects() {
        let (mut orch, clock) = orchestrator();
        orch.register_subject(1, "A", 30).unwrap();
        orch.register_subject(2, "B", 40).unwrap();

        orch.ingest(Reading::new(1, VitalKind::Temperature, 38.0, 0)); // MEDIUM
        clock.advance(10);
        orch.ingest(Reading::new(2, VitalKind::BloodPressure, 170.0, 0)); // HIGH
        clock.advance(10);
        orch.ingest(Reading::new(1, VitalKind::OxygenSaturation, 80.0, 0)); // CRITICAL

        let records = orch.drain();
        let order: Vec<(SubjectId, RiskLevel)> = records
            .iter()
            .map(|r| (r.alert.subject_id, r.alert.risk))
            .collect();
        assert_eq!(
            order,
            vec![(1, RiskLevel::Critical), (2, RiskLevel::High), (1, RiskLevel::Medium)]
        );
        assert!(orch.drain().is_empty());
    }

    #[test]
    fn test_history_stays_bounded() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();

        for _ in 0..150 {
            orch.ingest(Reading::new(1, VitalKind::Temperature, 36.8, 0));
        }
        let history = &orch.subject(1).unwrap().history;
        assert_eq!(history.len(VitalKind::Temperature), history.capacity());
        assert_eq!(history.len(VitalKind::Temperature), 100);
        assert_eq!(orch.statistics().readings_ingested, 150);
    }

    #[test]
    fn test_registration_and_statistics() {
        let (mut orch, _clock) = orchestrator();
        let devices = orch.register_subject(1, "A", 30).unwrap();
        assert_eq!(devices, vec![0, 1, 2, 3]);
        orch.register_subject(2, "B", 40).unwrap();

        assert_eq!(orch.register_subject(1, "Again", 50), Err(MonitorError::DuplicateSubject(1)));

        orch.deactivate_device(5).unwrap();
        assert_eq!(orch.deactivate_device(42), Err(MonitorError::UnknownDevice(42)));
        let extra = orch.attach_device(2, VitalKind::RespiratoryRate).unwrap();
        assert_eq!(orch.devices()[extra as usize].vital, VitalKind::RespiratoryRate);
        assert!(!orch.devices()[5].active);
        assert_eq!(
            orch.attach_device(9, VitalKind::HeartRate),
            Err(MonitorError::UnknownSubject(9))
        );

        let stats = orch.statistics();
        assert_eq!(stats.subject_count, 2);
        assert_eq!(stats.device_count, 9);
        assert_eq!(stats.active_device_count, 8);
        assert_eq!(stats.false_alarms_suppressed, 0);
    }

    #[test]
    fn test_run_cycle_polls_active_devices() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "A", 30).unwrap();
        orch.register_subject(2, "B", 40).unwrap();

        let mut source = ScriptedSource::new(0, 1_000);
        source
            .push_values(1, VitalKind::HeartRate, &[75.0])
            .push_values(1, VitalKind::OxygenSaturation, &[80.0])
            .push_values(2, VitalKind::BloodPressure, &[220.0]);

        // Subject 2's blood pressure device
        orch.deactivate_device(5).unwrap();

        let report = orch.run_cycle(&mut source);
        assert_eq!(report.cycle, 1);
        assert_eq!(report.readings, 2);
        assert_eq!(report.dispatched.len(), 1);
        assert_eq!(report.dispatched[0].alert.vital, VitalKind::OxygenSaturation);
        assert_eq!(source.remaining(), 1);
        assert_eq!(orch.statistics().cycles_completed, 1);
    }

    #[test]
    fn test_acknowledge_lifecycle() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(1, "Test", 30).unwrap();

        let outcome = orch.ingest(Reading::new(1, VitalKind::HeartRate, 200.0, 0));
        let id = outcome.queued()[0];

        assert_eq!(orch.acknowledge(id), Err(MonitorError::NotDispatched(id)));
        orch.drain();
        assert!(orch.acknowledge(id).is_ok());
        assert!(orch.acknowledge(id).is_ok());
        assert!(orch.recent_dispatches(10)[0].alert.acknowledged);
        assert_eq!(orch.acknowledge(999), Err(MonitorError::UnknownAlert(999)));
    }

    #[test]
    fn test_sink_failure_does_not_stop_dispatch() {
        let (mut orch, _clock) = orchestrator();
        let collector = CollectingSink::default();
        orch.add_sink(Box::new(FailingSink));
        orch.add_sink(Box::new(collector.clone()));
        orch.register_subject(1, "Test", 30).unwrap();

        orch.ingest(Reading::new(1, VitalKind::HeartRate, 200.0, 0));
        orch.ingest(Reading::new(1, VitalKind::BloodPressure, 170.0, 0));

        assert_eq!(orch.drain().len(), 2);
        assert_eq!(collector.records.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_emergency_injection() {
        let (mut orch, _clock) = orchestrator();
        orch.register_subject(3, "Test", 60).unwrap();

        let outcome = orch.inject_emergency(3, EmergencyKind::CardiacArrest).unwrap();
        assert!(matches!(outcome, IngestOutcome::Processed { risk: RiskLevel::Critical, .. }));
        assert_eq!(orch.subject(3).unwrap().current_risk(), RiskLevel::Critical);

        assert_eq!(
            orch.inject_emergency(4, EmergencyKind::Hypothermia),
            Err(MonitorError::UnknownSubject(4))
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = IngestOutcome::Dropped {
            reason: DropReason::UnknownSubject,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "dropped");
        assert_eq!(json["reason"], "unknown_subject");

        let outcome = IngestOutcome::Processed {
            risk: RiskLevel::High,
            alert: Some(3),
            suppressed: false,
            trend_alert: None,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["risk"], "HIGH");
        assert_eq!(json["alert"], 3);
    }

    #[test]
    fn test_dispatch_log_is_bounded() {
        let clock = Arc::new(ManualClock::new(0));
        let config = MonitorConfig {
            dispatch_log_capacity: 3,
            ..Default::default()
        };
        let mut orch = SchedulingOrchestrator::with_clock(config, clock);
        orch.register_subject(1, "Test", 30).unwrap();

        for _ in 0..5 {
            orch.ingest(Reading::new(1, VitalKind::BloodPressure, 220.0, 0));
        }
        orch.drain();

        assert_eq!(orch.recent_dispatches(10).len(), 3);
        assert_eq!(orch.statistics().alerts_dispatched, 5);
    }
}
