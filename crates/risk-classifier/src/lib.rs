//! Risk Classification
//!
//! Maps a single vital-sign value to a risk level using fixed critical/high
//! bands and a per-subject normal range for the medium/low split.

mod bands;
mod classifier;
mod error;
mod ranges;

pub use bands::{Band, VitalBands};
pub use classifier::{classify, RiskClassifier};
pub use error::ClassifierError;
pub use ranges::NormalRanges;
