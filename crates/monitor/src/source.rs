//! Reading Sources

use crate::Device;
use std::collections::{HashMap, VecDeque};
use vital_types::{Reading, SubjectId, VitalKind};

/// Supplies at most one reading per device per monitoring cycle
pub trait ReadingSource {
    /// Next reading for `device`, or `None` if it has nothing to report
    fn next_reading(&mut self, device: &Device) -> Option<Reading>;
}

/// Replays queued values per subject and vital
///
/// Timestamps start at `start_ms` and advance by `step_ms` per reading.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: HashMap<(SubjectId, VitalKind), VecDeque<f64>>,
    next_ms: u64,
    step_ms: u64,
}

impl ScriptedSource {
    pub fn new(start_ms: u64, step_ms: u64) -> Self {
        Self {
            script: HashMap::new(),
            next_ms: start_ms,
            step_ms,
        }
    }

    /// Queue values for one subject and vital, replayed in order
    pub fn push_values(
        &mut self,
        subject_id: SubjectId,
        vital: VitalKind,
        values: &[f64],
    ) -> &mut Self {
        self.script
            .entry((subject_id, vital))
            .or_default()
            .extend(values.iter().copied());
        self
    }

    /// Values still queued across all devices
    pub fn remaining(&self) -> usize {
        self.script.values().map(|v| v.len()).sum()
    }
}

impl ReadingSource for ScriptedSource {
    fn next_reading(&mut self, device: &Device) -> Option<Reading> {
        let value = self.script.get_mut(&(device.subject_id, device.vital))?.pop_front()?;
        let reading = Reading::new(device.subject_id, device.vital, value, self.next_ms);
        self.next_ms += self.step_ms;
        Some(reading)
    }
}
