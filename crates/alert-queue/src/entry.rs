//! Queue Entry Ordering

use std::cmp::Ordering;
use vital_types::Alert;

/// An alert as held by the queue, tagged with its arrival sequence
#[derive(Debug, Clone)]
pub struct QueueEntry {
    /// The queued alert
    pub alert: Alert,
    /// Arrival order within the queue
    pub seq: u64,
}

impl QueueEntry {
    pub fn new(alert: Alert, seq: u64) -> Self {
        Self { alert, seq }
    }
}

impl Eq for QueueEntry {}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry, so every key is reversed:
        // most urgent level, then earliest creation, then earliest arrival
        other
            .alert
            .risk
            .cmp(&self.alert.risk)
            .then_with(|| other.alert.created_at_ms.cmp(&self.alert.created_at_ms))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
