//! Read-only capacity and constraint model.
//!
//! Holds per-slot staffing requirements, per-worker hour budgets and
//! per-worker per-slot preferences. Built once, then shared by every
//! candidate schedule through an `Arc`.

mod constraints;
mod types;

pub use constraints::{ConstraintModel, ConstraintModelBuilder, DEFAULT_MAX_AWARD};
pub use types::{
    Location, Preference, Priority, Slot, SlotIdx, SlotKey, Worker, WorkerIdx, SELECTION_TIERS,
};
