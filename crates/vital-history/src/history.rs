//! Per-Subject History

use crate::ReadingWindow;
use std::collections::HashMap;
use vital_types::{Reading, VitalKind};

/// All reading windows of one subject, one per vital
#[derive(Debug, Clone)]
pub struct SubjectHistory {
    windows: HashMap<VitalKind, ReadingWindow>,
    capacity: usize,
}

impl SubjectHistory {
    /// Create an empty history whose windows hold `capacity` readings each
    pub fn new(capacity: usize) -> Self {
        Self {
            windows: HashMap::new(),
            capacity,
        }
    }

    /// Record a reading in its vital's window
    pub fn record(&mut self, reading: Reading) -> Option<Reading> {
        let capacity = self.capacity;
        self.windows
            .entry(reading.vital)
            .or_insert_with(|| ReadingWindow::new(capacity))
            .push(reading)
    }

    /// Window for a vital, if any reading was recorded
    pub fn window(&self, vital: VitalKind) -> Option<&ReadingWindow> {
        self.windows.get(&vital)
    }

    /// Last `count` readings of a vital, oldest first
    pub fn recent(&self, vital: VitalKind, count: usize) -> Vec<Reading> {
        self.windows
            .get(&vital)
            .map(|w| w.recent(count))
            .unwrap_or_default()
    }

    /// Values of the last `count` readings of a vital, oldest first
    pub fn recent_values(&self, vital: VitalKind, count: usize) -> Vec<f64> {
        self.windows
            .get(&vital)
            .map(|w| w.recent_values(count))
            .unwrap_or_default()
    }

    /// Number of readings held for a vital
    pub fn len(&self, vital: VitalKind) -> usize {
        self.windows.get(&vital).map_or(0, |w| w.len())
    }

    /// Total readings held across all vitals
    pub fn total_len(&self) -> usize {
        self.windows.values().map(|w| w.len()).sum()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SubjectHistory {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CAPACITY)
    }
}
