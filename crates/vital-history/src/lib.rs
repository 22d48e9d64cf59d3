//! Bounded Reading History
//!
//! Keeps the most recent readings of each vital for a subject. Windows are
//! fixed-capacity and drop the oldest reading on overflow.

mod history;
mod window;

pub use history::SubjectHistory;
pub use window::{ReadingWindow, DEFAULT_CAPACITY};
