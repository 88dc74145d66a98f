//! Candidate schedule: the mutable unit of search.

use std::sync::Arc;

use crate::model::{ConstraintModel, Location, Preference, SlotIdx, WorkerIdx};
use crate::objective::{ObjectiveWeights, ScheduleMetrics};

/// One worker placed in one slot at one location.
///
/// The preference is a snapshot of what the worker recorded for the slot
/// when they were placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub worker: WorkerIdx,
    pub preference: Preference,
}

/// Roster of one slot at one location. Shared between clones until written.
type Roster = Arc<Vec<Assignment>>;

/// A complete assignment of workers to slots.
///
/// The constraint model is shared by reference count. Hour counters are
/// owned per candidate, and rosters are copy-on-write: cloning a candidate
/// is cheap and only the rosters that are later modified get copied.
#[derive(Debug, Clone)]
pub struct CandidateSchedule {
    model: Arc<ConstraintModel>,
    hours: Vec<u32>,
    rosters: [Vec<Roster>; 2],
}

impl CandidateSchedule {
    /// An empty schedule over `model`.
    pub fn new(model: Arc<ConstraintModel>) -> Self {
        let empty: Roster = Arc::new(Vec::new());
        let slots = model.num_slots();
        Self {
            hours: vec![0; model.num_workers()],
            rosters: [vec![empty.clone(); slots], vec![empty; slots]],
            model,
        }
    }

    pub fn model(&self) -> &ConstraintModel {
        &self.model
    }

    pub fn shared_model(&self) -> &Arc<ConstraintModel> {
        &self.model
    }

    /// Hours assigned so far to `worker`.
    pub fn hours(&self, worker: WorkerIdx) -> u32 {
        self.hours[worker.0]
    }

    /// Hours assigned so far, indexed by worker.
    pub fn hours_assigned(&self) -> &[u32] {
        &self.hours
    }

    pub fn total_hours(&self) -> u32 {
        self.hours.iter().sum()
    }

    pub fn roster(&self, location: Location, slot: SlotIdx) -> &[Assignment] {
        &self.rosters[location.index()][slot.0]
    }

    pub fn is_assigned(&self, location: Location, slot: SlotIdx, worker: WorkerIdx) -> bool {
        self.roster(location, slot).iter().any(|a| a.worker == worker)
    }

    /// True while `worker` is below their desired hours.
    pub fn desires_more_hours(&self, worker: WorkerIdx) -> bool {
        self.hours[worker.0] < self.model.capacity_of(worker).desired_hours
    }

    /// True while `worker` is below their awarded hours.
    pub fn allotted_more_hours(&self, worker: WorkerIdx) -> bool {
        self.hours[worker.0] < self.model.capacity_of(worker).awarded_hours
    }

    /// Appends `workers` to a roster and bumps each one's hour counter.
    pub fn add_workers<I>(&mut self, location: Location, slot: SlotIdx, workers: I)
    where
        I: IntoIterator<Item = Assignment>,
    {
        let roster = Arc::make_mut(&mut self.rosters[location.index()][slot.0]);
        for assignment in workers {
            let w = assignment.worker.0;
            self.hours[w] += 1;
            debug_assert!(self.hours[w] <= self.model.workers()[w].awarded_hours);
            roster.push(assignment);
        }
    }

    /// Empties a roster, releasing each removed worker's hour.
    ///
    /// Returns the number of workers removed.
    pub fn clear_slot(&mut self, location: Location, slot: SlotIdx) -> usize {
        let roster = &mut self.rosters[location.index()][slot.0];
        for a in roster.iter() {
            self.hours[a.worker.0] -= 1;
        }
        let removed = roster.len();
        *roster = Arc::new(Vec::new());
        removed
    }

    /// Every assignment as `(location, slot, assignment)`.
    pub fn assignments(&self) -> impl Iterator<Item = (Location, SlotIdx, &Assignment)> + '_ {
        Location::ALL.into_iter().flat_map(move |loc| {
            self.rosters[loc.index()]
                .iter()
                .enumerate()
                .flat_map(move |(i, r)| r.iter().map(move |a| (loc, SlotIdx(i), a)))
        })
    }

    /// Slots of `location` whose roster is empty or short of the requirement.
    pub fn gaps_at(&self, location: Location) -> impl Iterator<Item = (SlotIdx, u32)> + '_ {
        self.model.slot_indices().filter_map(move |s| {
            let need = self.model.required_count(s, location);
            let have = self.roster(location, s).len() as u32;
            (have < need).then(|| (s, need - have))
        })
    }

    /// True when this roster is still the same allocation as `other`'s.
    pub fn shares_roster(&self, other: &CandidateSchedule, location: Location, slot: SlotIdx) -> bool {
        Arc::ptr_eq(
            &self.rosters[location.index()][slot.0],
            &other.rosters[location.index()][slot.0],
        )
    }

    /// Full metrics bundle under the default weights.
    pub fn metrics(&self) -> ScheduleMetrics {
        self.metrics_with(&ObjectiveWeights::default())
    }

    /// Full metrics bundle under `weights`.
    pub fn metrics_with(&self, weights: &ObjectiveWeights) -> ScheduleMetrics {
        ScheduleMetrics::compute(self, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, SlotKey};
    use crate::test_utils::small_week;

    fn first_a() -> Preference {
        Preference::only(Location::A, Priority::First)
    }

    #[test]
    fn test_add_and_clear_track_hours() {
        let model = Arc::new(small_week());
        let mut ps = CandidateSchedule::new(model.clone());
        let s = model.slot_idx(SlotKey::new(9, 2)).unwrap();
        let w0 = WorkerIdx(0);
        let w1 = WorkerIdx(1);
        ps.add_workers(
            Location::A,
            s,
            [
                Assignment { worker: w0, preference: first_a() },
                Assignment { worker: w1, preference: first_a() },
            ],
        );
        assert_eq!(ps.hours(w0), 1);
        assert_eq!(ps.total_hours(), 2);
        assert!(ps.is_assigned(Location::A, s, w1));
        assert!(!ps.is_assigned(Location::B, s, w1));

        assert_eq!(ps.clear_slot(Location::A, s), 2);
        assert_eq!(ps.total_hours(), 0);
        assert!(ps.roster(Location::A, s).is_empty());
    }

    #[test]
    fn test_clone_is_copy_on_write() {
        let model = Arc::new(small_week());
        let mut parent = CandidateSchedule::new(model.clone());
        let s0 = SlotIdx(0);
        let s1 = SlotIdx(1);
        parent.add_workers(Location::A, s0, [Assignment { worker: WorkerIdx(0), preference: first_a() }]);
        parent.add_workers(Location::A, s1, [Assignment { worker: WorkerIdx(1), preference: first_a() }]);

        let mut child = parent.clone();
        assert!(child.shares_roster(&parent, Location::A, s0));

        child.clear_slot(Location::A, s0);
        assert!(!child.shares_roster(&parent, Location::A, s0));
        assert!(child.shares_roster(&parent, Location::A, s1));
        assert_eq!(parent.roster(Location::A, s0).len(), 1);
        assert_eq!(parent.hours(WorkerIdx(0)), 1);
        assert_eq!(child.hours(WorkerIdx(0)), 0);
    }

    #[test]
    fn test_desire_and_allotment() {
        let model = Arc::new(small_week());
        let mut ps = CandidateSchedule::new(model.clone());
        let w = WorkerIdx(0);
        let cap = model.capacity_of(w).clone();
        for i in 0..cap.desired_hours as usize {
            ps.add_workers(Location::A, SlotIdx(i), [Assignment { worker: w, preference: first_a() }]);
        }
        assert!(!ps.desires_more_hours(w));
        assert_eq!(ps.allotted_more_hours(w), cap.awarded_hours > cap.desired_hours);
    }

    #[test]
    fn test_empty_schedule_gaps() {
        let model = Arc::new(small_week());
        let ps = CandidateSchedule::new(model.clone());
        let gaps: u32 = Location::ALL
            .into_iter()
            .flat_map(|loc| ps.gaps_at(loc).map(|(_, n)| n).collect::<Vec<_>>())
            .sum();
        assert_eq!(gaps, model.total_required_hours());
        assert_eq!(ps.assignments().count(), 0);
    }
}
