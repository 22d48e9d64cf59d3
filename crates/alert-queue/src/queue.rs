//! Priority Alert Queue

use crate::{DispatchRecord, QueueEntry, QueueStats};
use std::collections::BinaryHeap;
use tracing::{debug, info, warn};
use vital_types::{Alert, AlertId};

/// Default pending-alert count that triggers an overload warning
pub const DEFAULT_WARN_THRESHOLD: usize = 1_000;

/// Unbounded priority queue of pending alerts
pub struct AlertQueue {
    /// Pending alerts, most urgent on top
    heap: BinaryHeap<QueueEntry>,
    /// Next arrival sequence number
    next_seq: u64,
    /// Pending count at which an overload warning is logged
    warn_threshold: usize,
    /// Whether the queue is currently above the warning threshold
    overloaded: bool,
    /// Running counters
    stats: QueueStats,
}

impl AlertQueue {
    /// Create an empty queue with the default overload warning threshold
    pub fn new() -> Self {
        Self::with_warn_threshold(DEFAULT_WARN_THRESHOLD)
    }

    /// Create an empty queue that warns once `warn_threshold` alerts are pending
    pub fn with_warn_threshold(warn_threshold: usize) -> Self {
        info!("Alert queue created (overload warning at {} pending)", warn_threshold);
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            warn_threshold: warn_threshold.max(1),
            overloaded: false,
            stats: QueueStats::default(),
        }
    }

    /// Enqueue an alert
    pub fn push(&mut self, alert: Alert) {
        debug!(
            "Queued alert {} [{}] for subject {}: {}",
            alert.id, alert.risk, alert.subject_id, alert.message
        );
        let entry = QueueEntry::new(alert, self.next_seq);
        self.next_seq += 1;
        self.heap.push(entry);

        if self.heap.len() >= self.warn_threshold {
            if !self.overloaded {
                warn!(
                    "Alert queue overloaded: {} pending (threshold {})",
                    self.heap.len(),
                    self.warn_threshold
                );
            }
            self.overloaded = true;
        }
    }

    /// Remove and return the most urgent alert
    pub fn pop_highest(&mut self) -> Option<Alert> {
        let entry = self.heap.pop()?;
        if self.heap.len() < self.warn_threshold {
            self.overloaded = false;
        }
        Some(entry.alert)
    }

    /// Most urgent alert without removing it
    pub fn peek(&self) -> Option<&Alert> {
        self.heap.peek().map(|e| &e.alert)
    }

    /// Remove every pending alert, in dispatch order
    pub fn drain_all(&mut self) -> Vec<Alert> {
        let mut drained = Vec::with_capacity(self.heap.len());
        while let Some(alert) = self.pop_highest() {
            drained.push(alert);
        }
        drained
    }

    /// Drain the queue and build a dispatch record for each alert at `now_ms`
    ///
    /// Missed deadlines are logged and counted; dispatch always proceeds.
    pub fn dispatch_all(&mut self, now_ms: u64) -> Vec<DispatchRecord> {
        let records: Vec<DispatchRecord> = self
            .drain_all()
            .into_iter()
            .map(|alert| DispatchRecord::new(alert, now_ms))
            .collect();

        for record in &records {
            self.stats.record_dispatch(record);
            if !record.sla_met {
                warn!(
                    "SLA breach: {} alert {} for subject {} dispatched after {}ms (deadline {}ms)",
                    record.alert.risk,
                    record.alert.id,
                    record.alert.subject_id,
                    record.response_ms,
                    record.alert.risk.sla_deadline_ms()
                );
            }
        }

        if !records.is_empty() {
            debug!("Dispatched {} alerts", records.len());
        }
        records
    }

    /// Count a candidate alert that was dropped as a likely false alarm
    pub fn record_suppressed(&mut self) {
        self.stats.record_suppressed();
    }

    /// Whether an alert with this id is still pending
    pub fn contains(&self, id: AlertId) -> bool {
        self.heap.iter().any(|e| e.alert.id == id)
    }

    pub fn has_pending(&self) -> bool {
        !self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new()
    }
}
