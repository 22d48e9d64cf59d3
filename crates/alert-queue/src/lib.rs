//! Alert Queue
//!
//! Orders pending alerts by urgency, then creation time, then arrival, and
//! checks each dispatch against the response deadline of its risk level.

mod dispatch;
mod entry;
mod queue;
mod stats;

pub use dispatch::{sla_met, DispatchRecord};
pub use entry::QueueEntry;
pub use queue::AlertQueue;
pub use stats::QueueStats;
