//! Fixed-Capacity Reading Window

use std::collections::VecDeque;
use vital_types::Reading;

/// Default window capacity (readings kept per subject and vital)
pub const DEFAULT_CAPACITY: usize = 100;

/// Sliding window of readings, oldest first
#[derive(Debug, Clone)]
pub struct ReadingWindow {
    /// Stored readings, oldest at the front
    readings: VecDeque<Reading>,
    /// Maximum number of readings kept
    capacity: usize,
    /// Total readings ever pushed (for statistics)
    total_pushed: usize,
}

impl ReadingWindow {
    /// Create a window holding at most `capacity` readings
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
            total_pushed: 0,
        }
    }

    /// Create a window with the default capacity (100 readings)
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Append a reading, evicting the oldest if the window is full
    ///
    /// Returns the evicted reading, if any.
    pub fn push(&mut self, reading: Reading) -> Option<Reading> {
        let evicted = if self.readings.len() >= self.capacity {
            self.readings.pop_front()
        } else {
            None
        };
        self.readings.push_back(reading);
        self.total_pushed += 1;
        evicted
    }

    /// Number of readings currently held
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.readings.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent reading
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Last `count` readings, oldest first (most recent last)
    pub fn recent(&self, count: usize) -> Vec<Reading> {
        let skip = self.readings.len().saturating_sub(count);
        self.readings.iter().skip(skip).copied().collect()
    }

    /// Values of the last `count` readings, oldest first
    pub fn recent_values(&self, count: usize) -> Vec<f64> {
        let skip = self.readings.len().saturating_sub(count);
        self.readings.iter().skip(skip).map(|r| r.value).collect()
    }

    /// Iterate over all held readings, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// Total readings ever pushed, including evicted ones
    pub fn total_pushed(&self) -> usize {
        self.total_pushed
    }
}

impl Default for ReadingWindow {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vital_types::VitalKind;

    fn reading(value: f64, ts: u64) -> Reading {
        Reading::new(1, VitalKind::HeartRate, value, ts)
    }

    #[test]
    fn test_push_and_recent() {
        let mut window = ReadingWindow::new(10);

        for i in 0..5 {
            window.push(reading(70.0 + i as f64, i));
        }

        assert_eq!(window.len(), 5);

        let recent = window.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].value, 72.0);
        assert_eq!(recent[2].value, 74.0); // Most recent last
        assert_eq!(window.latest().map(|r| r.value), Some(74.0));
    }

    #[test]
    fn test_evicts_oldest() {
        let mut window = ReadingWindow::new(5);

        for i in 0..5 {
            assert!(window.push(reading(i as f64, i)).is_none());
        }
        assert!(window.is_full());

        let evicted = window.push(reading(5.0, 5));
        assert_eq!(evicted.map(|r| r.value), Some(0.0));
        assert_eq!(window.len(), 5);
        assert_eq!(window.recent_values(5), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(window.total_pushed(), 6);
    }

    #[test]
    fn test_recent_more_than_held() {
        let mut window = ReadingWindow::default();
        window.push(reading(80.0, 0));
        window.push(reading(81.0, 1));

        assert_eq!(window.recent_values(10), vec![80.0, 81.0]);
        assert_eq!(window.capacity(), DEFAULT_CAPACITY);
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(capacity in 1usize..50, pushes in 0usize..300) {
            let mut window = ReadingWindow::new(capacity);
            for i in 0..pushes {
                window.push(reading(i as f64, i as u64));
                prop_assert!(window.len() <= capacity);
            }
            prop_assert_eq!(window.len(), pushes.min(capacity));
            if pushes > 0 {
                prop_assert_eq!(window.latest().map(|r| r.value), Some((pushes - 1) as f64));
            }
        }
    }
}
