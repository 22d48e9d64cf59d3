//! Window Statistics

/// Summary statistics of a window of values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowStatistics {
    /// Number of values
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Average signed change between successive values
    pub mean_delta: f64,
}

impl WindowStatistics {
    /// Compute statistics from a slice of values (oldest first)
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        // sum / n does not round-trip for most decimals, so a constant window
        // is detected from its range rather than from the variance
        let (mean, std_dev) = if min == max {
            (min, 0.0)
        } else {
            let mean = values.iter().sum::<f64>() / n;
            // Population variance (divide by n, not n - 1)
            let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
            (mean, variance.sqrt())
        };

        let mean_delta = if values.len() >= 2 {
            let total: f64 = values.windows(2).map(|w| w[1] - w[0]).sum();
            total / (values.len() - 1) as f64
        } else {
            0.0
        };

        Self {
            count: values.len(),
            mean,
            std_dev,
            min,
            max,
            mean_delta,
        }
    }

    /// Absolute z-score of `value`, or `None` for a constant window
    pub fn z_score(&self, value: f64) -> Option<f64> {
        if self.std_dev == 0.0 {
            None
        } else {
            Some(((value - self.mean) / self.std_dev).abs())
        }
    }
}
