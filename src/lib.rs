//! Staffing rota optimization.
//!
//! Assigns workers to `(hour, day)` slots at two locations so that every
//! operating hour is staffed while honouring each worker's hour budget and
//! stated preferences.
//!
//! - **Model**: read-only constraint model of slots, requirements, worker
//!   budgets and per-slot preferences, built through
//!   [`model::ConstraintModelBuilder`] or the [`ingest`] boundary.
//! - **Schedule**: candidate schedules with copy-on-write rosters, the
//!   priority-tiered greedy constructor and the slot-reroll perturbation.
//! - **Objective**: multi-term energy (gaps, fairness, priority, desire,
//!   shift fragmentation) over a candidate.
//! - **Simulated Annealing (SA)**: generic geometric-cooling runner plus a
//!   parameter sweep, with the staffing problem wired in by [`staffing`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_staffing::model::{ConstraintModelBuilder, Preference, Priority, SlotKey};
//! use u_staffing::objective::ObjectiveWeights;
//! use u_staffing::sa::SaConfig;
//! use u_staffing::schedule::report;
//!
//! let mut b = ConstraintModelBuilder::new();
//! for hour in 9..=11 {
//!     b.add_slot(SlotKey::new(hour, 2), 1, 0).unwrap();
//! }
//! let ana = b.add_worker("Ana", 2, 3).unwrap();
//! let ben = b.add_worker("Ben", 1, 2).unwrap();
//! for hour in 9..=11 {
//!     b.set_preference(ana, SlotKey::new(hour, 2), Preference::both(Priority::First)).unwrap();
//!     b.set_preference(ben, SlotKey::new(hour, 2), Preference::both(Priority::Second)).unwrap();
//! }
//!
//! let result = u_staffing::staffing::solve(Arc::new(b.build()), &SaConfig::default().with_seed(1)).unwrap();
//! assert_eq!(result.best.metrics().gaps, 0);
//! println!("{}", report::full_report(&result.best, &ObjectiveWeights::default()));
//! ```

pub mod error;
pub mod ingest;
pub mod model;
pub mod objective;
pub mod random;
pub mod sa;
pub mod schedule;
pub mod staffing;

#[cfg(test)]
mod test_utils;

pub use error::{Result, StaffingError};
