//! Metrics bundle and the composed objective.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::ObjectiveWeights;
use super::terms;
use crate::schedule::CandidateSchedule;

/// Snapshot of every objective term for one candidate.
///
/// `energy` is the minimized quantity; `score = -energy` is the
/// higher-is-better number shown to people.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleMetrics {
    pub gaps: u32,
    pub min_filled: u32,
    pub min_proportion: f64,
    pub total_hours: u32,
    pub average_priority: f64,
    pub average_trips_in: f64,
    pub mean_desired_weighted: f64,
    pub geometric_mean_desired: f64,
    /// Additive part before the multiplicative factors.
    pub base_score: f64,
    pub energy: f64,
}

impl ScheduleMetrics {
    /// Computes every term of `ps` and composes the energy.
    pub fn compute(ps: &CandidateSchedule, weights: &ObjectiveWeights) -> Self {
        let gaps = terms::count_gaps(ps);
        let min_filled = terms::min_hours_filled(ps);
        let min_proportion = terms::min_hours_proportion(ps);
        let total_hours = terms::total_hours(ps);
        let average_priority = terms::average_priority(ps);
        let average_trips_in = terms::average_trips_in(ps);
        let mean_desired_weighted = terms::mean_desired_weighted(ps, weights.desire_trust_ratio);

        let base_score = base_score(gaps, min_filled, min_proportion, total_hours, weights);
        let energy = compose(
            base_score,
            average_trips_in,
            average_priority,
            mean_desired_weighted,
        );

        Self {
            gaps,
            min_filled,
            min_proportion,
            total_hours,
            average_priority,
            average_trips_in,
            mean_desired_weighted,
            geometric_mean_desired: terms::geometric_mean_desired(ps),
            base_score,
            energy,
        }
    }

    /// User-facing score, higher is better.
    pub fn score(&self) -> f64 {
        -self.energy
    }
}

/// `gaps * -gap_penalty + min_filled * w1 + min_proportion^2 * w2 + total_hours`.
pub fn base_score(
    gaps: u32,
    min_filled: u32,
    min_proportion: f64,
    total_hours: u32,
    weights: &ObjectiveWeights,
) -> f64 {
    -(gaps as f64) * weights.gap_penalty
        + min_filled as f64 * weights.min_filled
        + min_proportion.powi(2) * weights.min_proportion
        + total_hours as f64
}

/// Applies the trip divisor and the priority and desire multipliers, and
/// negates the result so that lower is better.
///
/// A zero trips-in average (nobody scheduled) leaves the base score
/// undivided.
pub fn compose(
    base_score: f64,
    average_trips_in: f64,
    average_priority: f64,
    mean_desired_weighted: f64,
) -> f64 {
    let mut score = base_score;
    if average_trips_in > 0.0 {
        score /= average_trips_in;
    }
    score *= average_priority.powi(2) + 1.0;
    score *= mean_desired_weighted + 1.0;
    -score
}

impl fmt::Display for ScheduleMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Avg Priority: {:.2}", self.average_priority)?;
        writeln!(f, " Total hours filled: {}", self.total_hours)?;
        writeln!(f, " Min hrs filled: {}", self.min_filled)?;
        writeln!(f, " Min hrs proportion: {:.2}", self.min_proportion)?;
        writeln!(
            f,
            " Mean desired (weighted) filled: {:.2}",
            self.mean_desired_weighted
        )?;
        writeln!(f, " Mean trips in: {:.2}", self.average_trips_in)?;
        writeln!(f, " Geom mean desired: {:.2}", self.geometric_mean_desired)?;
        writeln!(f, " Gaps in schedule: {}", self.gaps)?;
        writeln!(f, " Score: {:.2}", self.score())
    }
}
