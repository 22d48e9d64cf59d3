//! Fixed Threshold Bands

use vital_types::VitalKind;

/// Values strictly below `low` or strictly above `high` fall in the band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl Band {
    /// Band triggered outside `[low, high]`
    pub const fn outside(low: f64, high: f64) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    /// Band triggered below `low` only
    pub const fn below(low: f64) -> Self {
        Self {
            low: Some(low),
            high: None,
        }
    }

    /// Whether `value` falls in the band
    pub fn triggers(&self, value: f64) -> bool {
        self.low.is_some_and(|low| value < low) || self.high.is_some_and(|high| value > high)
    }
}

/// Critical, high and fixed medium bands of one vital
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalBands {
    pub critical: Option<Band>,
    pub high: Option<Band>,
    pub medium: Option<Band>,
}

const HEART_RATE: VitalBands = VitalBands {
    critical: Some(Band::outside(30.0, 180.0)),
    high: Some(Band::outside(50.0, 120.0)),
    medium: None,
};

const OXYGEN_SATURATION: VitalBands = VitalBands {
    critical: Some(Band::below(85.0)),
    high: Some(Band::below(92.0)),
    medium: None,
};

const BLOOD_PRESSURE: VitalBands = VitalBands {
    critical: Some(Band::outside(60.0, 200.0)),
    high: Some(Band::outside(80.0, 160.0)),
    medium: None,
};

const TEMPERATURE: VitalBands = VitalBands {
    critical: None,
    high: Some(Band::outside(35.0, 39.0)),
    medium: Some(Band::outside(35.5, 38.5)),
};

const RESPIRATORY_RATE: VitalBands = VitalBands {
    critical: None,
    high: Some(Band::outside(8.0, 30.0)),
    medium: Some(Band::outside(10.0, 25.0)),
};

impl VitalBands {
    /// Bands for a vital; these are constants, not per-subject
    pub fn for_vital(vital: VitalKind) -> &'static VitalBands {
        match vital {
            VitalKind::HeartRate => &HEART_RATE,
            VitalKind::OxygenSaturation => &OXYGEN_SATURATION,
            VitalKind::BloodPressure => &BLOOD_PRESSURE,
            VitalKind::Temperature => &TEMPERATURE,
            VitalKind::RespiratoryRate => &RESPIRATORY_RATE,
        }
    }
}
