//! Monitored Subjects

use risk_classifier::NormalRanges;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vital_history::SubjectHistory;
use vital_types::{RiskLevel, SubjectId, VitalKind};

/// A monitored subject and everything recorded about it
#[derive(Debug, Clone)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub age: u32,
    /// Normal ranges used for the medium/low split
    pub ranges: NormalRanges,
    /// Bounded reading windows, one per vital
    pub history: SubjectHistory,
    /// Risk of the latest reading of each vital
    latest_risk: HashMap<VitalKind, RiskLevel>,
}

impl Subject {
    pub fn new(
        id: SubjectId,
        name: impl Into<String>,
        age: u32,
        ranges: NormalRanges,
        history_capacity: usize,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            ranges,
            history: SubjectHistory::new(history_capacity),
            latest_risk: HashMap::new(),
        }
    }

    /// Remember the classification of the latest reading of a vital
    pub fn update_risk(&mut self, vital: VitalKind, risk: RiskLevel) {
        self.latest_risk.insert(vital, risk);
    }

    /// Most urgent risk across the latest reading of every vital
    pub fn current_risk(&self) -> RiskLevel {
        self.latest_risk.values().min().copied().unwrap_or(RiskLevel::Low)
    }

    pub fn summary(&self) -> SubjectSummary {
        SubjectSummary {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            current_risk: self.current_risk(),
            readings_held: self.history.total_len(),
        }
    }
}

/// Read-only view of a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub id: SubjectId,
    pub name: String,
    pub age: u32,
    pub current_risk: RiskLevel,
    pub readings_held: usize,
}
