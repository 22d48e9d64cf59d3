//! Monitoring Orchestrator
//!
//! Owns the subject and device registries, runs every reading through
//! classification, false-alarm filtering and trend detection, and drains
//! the resulting alerts in priority order once per monitoring cycle.

mod clock;
mod config;
mod device;
mod emergency;
mod error;
mod orchestrator;
mod sink;
mod source;
mod subject;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::MonitorConfig;
pub use device::{Device, DeviceId, DEFAULT_DEVICE_VITALS};
pub use emergency::EmergencyKind;
pub use error::MonitorError;
pub use orchestrator::{CycleReport, DropReason, IngestOutcome, SchedulingOrchestrator, Statistics};
pub use sink::{AlertSink, SinkError, TracingSink};
pub use source::{ReadingSource, ScriptedSource};
pub use subject::{Subject, SubjectSummary};

pub use alert_queue::DispatchRecord;
