//! Candidate schedules and the operators that create them.
//!
//! - [`construct`]: priority-tiered greedy initializer
//! - [`perturb`]: reroll a handful of slots to get a neighbor
//! - [`report`]: text renderings for the export side

mod candidate;
mod greedy;
mod perturb;
pub mod report;

pub use candidate::{Assignment, CandidateSchedule};
pub use greedy::construct;
pub use perturb::{perturb, DEFAULT_NUM_CHANGES};
