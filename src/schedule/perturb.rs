//! Neighbor generation by rerolling a few slots.
//!
//! Refills are drawn from every worker with any availability at the
//! location who still has awarded hours left. Unlike the greedy constructor
//! this ignores desired hours and does not check whether the worker is
//! already rostered at the other location for the same slot.

use rand::Rng;
use tracing::debug;

use super::candidate::{Assignment, CandidateSchedule};
use crate::model::{Location, SlotIdx};
use crate::random::sample;

/// Number of slots rerolled per location by default.
pub const DEFAULT_NUM_CHANGES: usize = 8;

/// Returns a neighbor of `ps` with up to `num_changes` slots per location
/// rerolled. `ps` is left untouched and shares every other roster with the
/// neighbor.
pub fn perturb<R: Rng + ?Sized>(
    ps: &CandidateSchedule,
    num_changes: usize,
    rng: &mut R,
) -> CandidateSchedule {
    let mut child = ps.clone();
    let model = ps.shared_model().clone();

    for location in Location::ALL {
        let staffed: Vec<SlotIdx> = model
            .slot_indices()
            .filter(|&s| model.required_count(s, location) > 0)
            .collect();
        if num_changes > staffed.len() {
            debug!(
                %location,
                num_changes,
                staffed = staffed.len(),
                "fewer staffed slots than requested changes; rerolling all of them"
            );
        }
        let reroll = sample(&staffed, num_changes, rng);

        for &slot in &reroll {
            child.clear_slot(location, slot);
        }

        for &slot in &reroll {
            let pool: Vec<Assignment> = model
                .preferences_at(slot)
                .iter()
                .filter(|(w, p)| p.at(location).is_available() && child.allotted_more_hours(*w))
                .map(|&(worker, preference)| Assignment { worker, preference })
                .collect();
            let count = pool.len().min(model.required_count(slot, location) as usize);
            let chosen = sample(&pool, count, rng);
            child.add_workers(location, slot, chosen);
        }
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConstraintModelBuilder, Preference, Priority, SlotKey, WorkerIdx};
    use crate::random::create_rng;
    use crate::schedule::construct;
    use crate::test_utils::small_week;
    use std::sync::Arc;

    fn changed_slots(a: &CandidateSchedule, b: &CandidateSchedule, loc: Location) -> usize {
        a.model()
            .slot_indices()
            .filter(|&s| a.roster(loc, s) != b.roster(loc, s))
            .count()
    }

    #[test]
    fn test_parent_unchanged() {
        let model = Arc::new(small_week());
        let mut rng = create_rng(3);
        let parent = construct(model.clone(), &mut rng);
        let hours_before = parent.hours_assigned().to_vec();
        let rosters_before: Vec<Vec<Assignment>> = model
            .slot_indices()
            .map(|s| parent.roster(Location::A, s).to_vec())
            .collect();

        let _child = perturb(&parent, 3, &mut rng);

        assert_eq!(parent.hours_assigned(), &hours_before[..]);
        for s in model.slot_indices() {
            assert_eq!(parent.roster(Location::A, s), &rosters_before[s.0][..]);
        }
    }

    #[test]
    fn test_locality() {
        let model = Arc::new(small_week());
        let mut rng = create_rng(8);
        let mut ps = construct(model.clone(), &mut rng);
        for _ in 0..50 {
            let child = perturb(&ps, 2, &mut rng);
            for loc in Location::ALL {
                assert!(changed_slots(&ps, &child, loc) <= 2);
                let untouched = model
                    .slot_indices()
                    .filter(|&s| child.shares_roster(&ps, loc, s))
                    .count();
                assert!(untouched >= model.num_slots() - 2);
            }
            ps = child;
        }
    }

    #[test]
    fn test_hours_bound_holds() {
        let model = Arc::new(small_week());
        let mut rng = create_rng(21);
        let mut ps = construct(model.clone(), &mut rng);
        for _ in 0..200 {
            ps = perturb(&ps, DEFAULT_NUM_CHANGES, &mut rng);
            for w in model.worker_indices() {
                assert!(ps.hours(w) <= model.capacity_of(w).awarded_hours);
            }
            let counted: u32 = ps.assignments().count() as u32;
            assert_eq!(counted, ps.total_hours());
        }
    }

    #[test]
    fn test_may_double_book_across_locations() {
        // A single worker available everywhere with room for both positions:
        // perturbation is allowed to put them at both locations at once.
        let mut b = ConstraintModelBuilder::new();
        let key = SlotKey::new(9, 2);
        b.add_slot(key, 1, 1).unwrap();
        let w = b.add_worker("Ada", 2, 2).unwrap();
        b.set_preference(w, key, Preference::both(Priority::First)).unwrap();
        let model = Arc::new(b.build());

        let ps = construct(model, &mut create_rng(0));
        assert!(!ps.is_assigned(Location::B, SlotIdx(0), w));

        let child = perturb(&ps, 1, &mut create_rng(0));
        assert!(child.is_assigned(Location::A, SlotIdx(0), w));
        assert!(child.is_assigned(Location::B, SlotIdx(0), w));
        assert_eq!(child.hours(WorkerIdx(0)), 2);
    }

    #[test]
    fn test_zero_requirement_slots_never_touched() {
        let model = Arc::new(small_week());
        let mut rng = create_rng(4);
        let ps = construct(model.clone(), &mut rng);
        let child = perturb(&ps, 100, &mut rng);
        for s in model.slot_indices() {
            if model.required_count(s, Location::B) == 0 {
                assert!(child.shares_roster(&ps, Location::B, s));
            }
        }
    }

    #[test]
    fn test_excess_changes_reroll_every_staffed_slot() {
        let model = Arc::new(small_week());
        let mut rng = create_rng(13);
        let parent = construct(model.clone(), &mut rng);
        let child = perturb(&parent, 100, &mut rng);
        for loc in Location::ALL {
            for s in model.slot_indices() {
                let staffed = model.required_count(s, loc) > 0;
                assert_eq!(!child.shares_roster(&parent, loc, s), staffed);
            }
        }
    }
}
