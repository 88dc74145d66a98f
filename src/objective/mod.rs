//! Multi-term objective for candidate schedules.
//!
//! Lower energy is better. Gap avoidance dominates; the floor of hours
//! given to any worker and the fairness proportion are rewarded; priority
//! and desire satisfaction act as multiplicative bonuses; shift
//! fragmentation (trips in) divides the score.
//!
//! ```text
//! base   = gaps * -1000 + min_filled * 100 + min_proportion^2 * 100 + total_hours
//! energy = -(base / trips_in * (avg_priority^2 + 1) * (mean_desired_weighted + 1))
//! ```

mod config;
mod metrics;
mod terms;

pub use config::ObjectiveWeights;
pub use metrics::{base_score, compose, ScheduleMetrics};
pub use terms::{
    average_priority, average_trips_in, count_gaps, geometric_mean_desired, mean_desired_weighted,
    min_hours_filled, min_hours_proportion, total_hours,
};

use crate::schedule::CandidateSchedule;

/// Energy of `ps` under `weights`. Lower is better.
pub fn evaluate(ps: &CandidateSchedule, weights: &ObjectiveWeights) -> f64 {
    ScheduleMetrics::compute(ps, weights).energy
}
