//! Individual objective terms.
//!
//! Each term is a pure function of a candidate. Terms that average over a
//! data-derived count return 0 when that count is zero.

use crate::model::Location;
use crate::schedule::CandidateSchedule;

/// Missing workers summed over every slot and location.
pub fn count_gaps(ps: &CandidateSchedule) -> u32 {
    Location::ALL
        .into_iter()
        .map(|loc| ps.gaps_at(loc).map(|(_, missing)| missing).sum::<u32>())
        .sum()
}

/// Smallest number of hours given to any worker.
pub fn min_hours_filled(ps: &CandidateSchedule) -> u32 {
    ps.hours_assigned().iter().copied().min().unwrap_or(0)
}

/// Hours over desired hours for each worker with a nonzero desire.
fn proportions(ps: &CandidateSchedule) -> impl Iterator<Item = f64> + '_ {
    ps.model()
        .worker_indices()
        .filter_map(move |w| proportion(ps, w.0))
}

fn proportion(ps: &CandidateSchedule, worker: usize) -> Option<f64> {
    let desired = ps.model().workers()[worker].desired_hours;
    (desired > 0).then(|| ps.hours_assigned()[worker] as f64 / desired as f64)
}

/// Smallest hours/desired proportion over all workers.
pub fn min_hours_proportion(ps: &CandidateSchedule) -> f64 {
    proportions(ps).reduce(f64::min).unwrap_or(0.0)
}

/// Total hours assigned.
pub fn total_hours(ps: &CandidateSchedule) -> u32 {
    ps.total_hours()
}

/// Assignments that do not continue the same worker's shift from the
/// previous hour at the same location, averaged over workers.
pub fn average_trips_in(ps: &CandidateSchedule) -> f64 {
    let workers = ps.model().num_workers();
    if workers == 0 {
        return 0.0;
    }
    let trips = ps
        .assignments()
        .filter(|(loc, slot, a)| {
            ps.model()
                .previous_slot(*slot)
                .map_or(true, |prev| !ps.is_assigned(*loc, prev, a.worker))
        })
        .count();
    trips as f64 / workers as f64
}

/// Mean satisfaction (2 first choice, 1 second, 0 otherwise) over assignments.
pub fn average_priority(ps: &CandidateSchedule) -> f64 {
    let (sum, count) = ps
        .assignments()
        .fold((0.0, 0usize), |(sum, count), (loc, _, a)| {
            (sum + a.preference.at(loc).satisfaction(), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Mean hours/desired proportion over workers with `open / desired` above
/// `trust_ratio`.
pub fn mean_desired_weighted(ps: &CandidateSchedule, trust_ratio: f64) -> f64 {
    let (sum, count) = ps
        .model()
        .workers()
        .iter()
        .enumerate()
        .filter(|(_, w)| w.availability_ratio() > trust_ratio)
        .filter_map(|(i, _)| proportion(ps, i))
        .fold((0.0, 0usize), |(sum, count), p| (sum + p, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Geometric mean of the hours/desired proportions. Reported only.
pub fn geometric_mean_desired(ps: &CandidateSchedule) -> f64 {
    let (product, count) = proportions(ps).fold((1.0, 0usize), |(p, c), x| (p * x, c + 1));
    if count == 0 {
        0.0
    } else {
        product.powf(1.0 / count as f64)
    }
}
