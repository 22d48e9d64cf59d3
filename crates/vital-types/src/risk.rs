//! Risk Levels and Response Deadlines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a reading or alert
///
/// Lower discriminant means more urgent, so the derived `Ord` sorts
/// `Critical` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum RiskLevel {
    /// Immediate medical attention (respond within 2 s)
    Critical = 1,
    /// Urgent nurse response (within 30 s)
    High = 2,
    /// Check on subject (within 5 min)
    Medium = 3,
    /// Routine (within 1 h)
    Low = 4,
}

impl RiskLevel {
    /// All levels, most urgent first
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
    ];

    /// Numeric level (1 = most urgent)
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Maximum acceptable time between alert creation and dispatch
    pub fn sla_deadline_ms(&self) -> u64 {
        match self {
            RiskLevel::Critical => 2_000,
            RiskLevel::High => 30_000,
            RiskLevel::Medium => 300_000,
            RiskLevel::Low => 3_600_000,
        }
    }

    /// Expected response for a dispatched alert of this level
    pub fn response_action(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Immediate medical attention required",
            RiskLevel::High => "Nurse response needed within 30 seconds",
            RiskLevel::Medium => "Check on subject within 5 minutes",
            RiskLevel::Low => "Routine check during next rounds",
        }
    }

    /// Short lowercase label, used for metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Critical => write!(f, "CRITICAL"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::Low => write!(f, "LOW"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_ordering() {
        assert!(RiskLevel::Critical < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::Low);
        assert_eq!(RiskLevel::Critical.value(), 1);
        assert_eq!(RiskLevel::Low.value(), 4);
    }

    #[test]
    fn test_sla_deadlines() {
        assert_eq!(RiskLevel::Critical.sla_deadline_ms(), 2_000);
        assert_eq!(RiskLevel::High.sla_deadline_ms(), 30_000);
        assert_eq!(RiskLevel::Medium.sla_deadline_ms(), 300_000);
        assert_eq!(RiskLevel::Low.sla_deadline_ms(), 3_600_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskLevel::Critical.to_string(), "CRITICAL");
        assert_eq!(RiskLevel::Medium.as_str(), "medium");
    }
}
