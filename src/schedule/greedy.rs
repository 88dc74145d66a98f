//! Priority-tiered greedy construction.
//!
//! # Algorithm
//!
//! For each location, for each slot, positions are filled in two passes:
//!
//! 1. **Desire pass**: walk the tiers `First, Second, Acceptable`; the pool is
//!    workers at that tier who are still below their desired hours and are
//!    not already rostered at the other location for the same slot.
//! 2. **Allotment pass** (only if need remains): same tiers, but the pool is
//!    workers below their awarded hours who were not picked in pass 1.
//!
//! A pool smaller than the remaining need is taken whole; otherwise a
//! uniform sample of exactly the remaining need is drawn and the pass stops.
//! Whatever is still missing afterwards is left as a gap.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use super::candidate::{Assignment, CandidateSchedule};
use crate::model::{ConstraintModel, Location, Preference, SlotIdx, WorkerIdx, SELECTION_TIERS};
use crate::random::sample;

/// Builds an initial candidate schedule from scratch.
pub fn construct<R: Rng + ?Sized>(model: Arc<ConstraintModel>, rng: &mut R) -> CandidateSchedule {
    let mut ps = CandidateSchedule::new(model);
    for location in Location::ALL {
        for slot in ps.model().slot_indices() {
            let picked = fill_slot(&ps, location, slot, rng);
            ps.add_workers(location, slot, picked);
        }
    }

    debug!(
        total_hours = ps.total_hours(),
        gaps = crate::objective::count_gaps(&ps),
        "greedy construction finished"
    );
    ps
}

/// Picks the workers for one slot at one location without mutating `ps`.
fn fill_slot<R: Rng + ?Sized>(
    ps: &CandidateSchedule,
    location: Location,
    slot: SlotIdx,
    rng: &mut R,
) -> Vec<Assignment> {
    let model = ps.model();
    let needed = model.required_count(slot, location) as usize;
    let entries = model.preferences_at(slot);
    let other = location.other();
    let mut picked = Vec::with_capacity(needed);

    fill_by_tiers(entries, location, needed, &mut picked, rng, |_, w| {
        ps.desires_more_hours(w) && !ps.is_assigned(other, slot, w)
    });

    if picked.len() < needed {
        fill_by_tiers(entries, location, needed, &mut picked, rng, |chosen, w| {
            ps.allotted_more_hours(w)
                && !chosen.iter().any(|a| a.worker == w)
                && !ps.is_assigned(other, slot, w)
        });
    }

    picked
}

/// Walks the selection tiers, topping `picked` up towards `needed`.
fn fill_by_tiers<R, F>(
    entries: &[(WorkerIdx, Preference)],
    location: Location,
    needed: usize,
    picked: &mut Vec<Assignment>,
    rng: &mut R,
    eligible: F,
) where
    R: Rng + ?Sized,
    F: Fn(&[Assignment], WorkerIdx) -> bool,
{
    for tier in SELECTION_TIERS {
        let remaining = needed.saturating_sub(picked.len());
        let pool: Vec<Assignment> = entries
            .iter()
            .filter(|(w, p)| p.at(location) == tier && eligible(picked, *w))
            .map(|&(worker, preference)| Assignment { worker, preference })
            .collect();

        if pool.len() < remaining {
            picked.extend(pool);
        } else {
            picked.extend(sample(&pool, remaining, rng));
            return;
        }
    }
}
