//! Bedside Devices

use serde::{Deserialize, Serialize};
use vital_types::{SubjectId, VitalKind};

/// Identifier of a monitoring device
pub type DeviceId = u32;

/// Vitals monitored by the devices attached at registration
pub const DEFAULT_DEVICE_VITALS: [VitalKind; 4] = [
    VitalKind::HeartRate,
    VitalKind::BloodPressure,
    VitalKind::OxygenSaturation,
    VitalKind::Temperature,
];

/// A device reporting one vital of one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub subject_id: SubjectId,
    pub vital: VitalKind,
    /// Inactive devices are skipped by monitoring cycles
    pub active: bool,
}

impl Device {
    pub fn new(id: DeviceId, subject_id: SubjectId, vital: VitalKind) -> Self {
        Self {
            id,
            subject_id,
            vital,
            active: true,
        }
    }
}
