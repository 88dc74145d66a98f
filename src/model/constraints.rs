//! The constraint model and its validating builder.

use std::collections::HashMap;

use super::types::{Location, Preference, Slot, SlotIdx, SlotKey, Worker, WorkerIdx};
use crate::error::{Result, StaffingError};

/// Upper bound on awarded hours unless overridden.
pub const DEFAULT_MAX_AWARD: u32 = 15;

/// Immutable staffing facts shared by every candidate schedule.
///
/// # Examples
///
/// ```
/// use u_staffing::model::{ConstraintModelBuilder, Location, Preference, Priority, SlotKey};
///
/// let mut builder = ConstraintModelBuilder::new();
/// let slot = builder.add_slot(SlotKey::new(9, 2), 1, 0).unwrap();
/// let ada = builder.add_worker("Ada", 1, 2).unwrap();
/// builder
///     .set_preference(ada, SlotKey::new(9, 2), Preference::only(Location::A, Priority::First))
///     .unwrap();
/// let model = builder.build();
///
/// assert_eq!(model.required_count(slot, Location::A), 1);
/// assert_eq!(model.capacity_of(ada).open_hours, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    workers: Vec<Worker>,
    slots: Vec<Slot>,
    slot_index: HashMap<SlotKey, SlotIdx>,
    availability: Vec<Vec<(WorkerIdx, Preference)>>,
    previous: Vec<Option<SlotIdx>>,
}

impl ConstraintModel {
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, slot: SlotIdx) -> &Slot {
        &self.slots[slot.0]
    }

    /// Slot indices in model order.
    pub fn slot_indices(&self) -> impl Iterator<Item = SlotIdx> {
        (0..self.slots.len()).map(SlotIdx)
    }

    /// Worker indices in model order.
    pub fn worker_indices(&self) -> impl Iterator<Item = WorkerIdx> {
        (0..self.workers.len()).map(WorkerIdx)
    }

    pub fn slot_idx(&self, key: SlotKey) -> Option<SlotIdx> {
        self.slot_index.get(&key).copied()
    }

    pub fn worker_by_name(&self, name: &str) -> Option<WorkerIdx> {
        self.workers
            .iter()
            .position(|w| w.name == name)
            .map(WorkerIdx)
    }

    /// Number of workers required at `slot` for `location`.
    pub fn required_count(&self, slot: SlotIdx, location: Location) -> u32 {
        self.slots[slot.0].required(location)
    }

    /// Every recorded preference at `slot`, ordered by worker index.
    pub fn preferences_at(&self, slot: SlotIdx) -> &[(WorkerIdx, Preference)] {
        &self.availability[slot.0]
    }

    /// The preference `worker` recorded for `slot`, if any.
    pub fn preference(&self, slot: SlotIdx, worker: WorkerIdx) -> Option<Preference> {
        let entries = &self.availability[slot.0];
        entries
            .binary_search_by_key(&worker, |(w, _)| *w)
            .ok()
            .map(|i| entries[i].1)
    }

    /// Desired, awarded and open hours of `worker`.
    pub fn capacity_of(&self, worker: WorkerIdx) -> &Worker {
        &self.workers[worker.0]
    }

    /// The slot one hour before `slot` on the same day, when the model has it.
    pub fn previous_slot(&self, slot: SlotIdx) -> Option<SlotIdx> {
        self.previous[slot.0]
    }

    /// Sum of required positions over all slots and locations.
    pub fn total_required_hours(&self) -> u32 {
        self.slots
            .iter()
            .map(|s| s.required(Location::A) + s.required(Location::B))
            .sum()
    }
}

/// Validating builder for [`ConstraintModel`].
///
/// Rejects the malformed records the search assumes never occur: blank or
/// duplicate names, awarded hours outside `(0, max_award]`, desired hours
/// outside `(0, awarded]`, and preferences for unknown slots.
#[derive(Debug, Clone)]
pub struct ConstraintModelBuilder {
    max_award: u32,
    workers: Vec<Worker>,
    slots: Vec<Slot>,
    slot_index: HashMap<SlotKey, SlotIdx>,
    availability: Vec<HashMap<WorkerIdx, Preference>>,
}

impl Default for ConstraintModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintModelBuilder {
    pub fn new() -> Self {
        Self {
            max_award: DEFAULT_MAX_AWARD,
            workers: Vec::new(),
            slots: Vec::new(),
            slot_index: HashMap::new(),
            availability: Vec::new(),
        }
    }

    pub fn with_max_award(mut self, max_award: u32) -> Self {
        self.max_award = max_award;
        self
    }

    pub fn max_award(&self) -> u32 {
        self.max_award
    }

    /// Registers a slot and its per-location requirement.
    pub fn add_slot(&mut self, key: SlotKey, required_a: u32, required_b: u32) -> Result<SlotIdx> {
        if self.slot_index.contains_key(&key) {
            return Err(StaffingError::DuplicateSlot(key));
        }
        let idx = SlotIdx(self.slots.len());
        self.slots.push(Slot::new(key, required_a, required_b));
        self.slot_index.insert(key, idx);
        self.availability.push(HashMap::new());
        Ok(idx)
    }

    /// Registers a worker after validating the hour budget.
    pub fn add_worker(&mut self, name: &str, desired: u32, awarded: u32) -> Result<WorkerIdx> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StaffingError::BlankWorkerName);
        }
        if self.workers.iter().any(|w| w.name == name) {
            return Err(StaffingError::DuplicateWorker(name.to_string()));
        }
        if awarded == 0 || awarded > self.max_award {
            return Err(StaffingError::InvalidAwardedHours {
                worker: name.to_string(),
                awarded,
                max_award: self.max_award,
            });
        }
        if desired == 0 || desired > awarded {
            return Err(StaffingError::InvalidDesiredHours {
                worker: name.to_string(),
                desired,
                awarded,
            });
        }

        let idx = WorkerIdx(self.workers.len());
        self.workers.push(Worker {
            name: name.to_string(),
            desired_hours: desired,
            awarded_hours: awarded,
            open_hours: 0,
        });
        Ok(idx)
    }

    /// Records `worker`'s preference at the slot with `key`.
    ///
    /// Setting a preference twice for the same slot replaces the first entry.
    pub fn set_preference(
        &mut self,
        worker: WorkerIdx,
        key: SlotKey,
        preference: Preference,
    ) -> Result<()> {
        if worker.0 >= self.workers.len() {
            return Err(StaffingError::UnknownWorker(worker.0));
        }
        let slot = self
            .slot_index
            .get(&key)
            .copied()
            .ok_or(StaffingError::UnknownSlot(key))?;
        self.availability[slot.0].insert(worker, preference);
        Ok(())
    }

    /// Finalizes the model, deriving open hours and the previous-hour links.
    pub fn build(self) -> ConstraintModel {
        let mut workers = self.workers;
        let mut availability = Vec::with_capacity(self.availability.len());

        for entries in self.availability {
            let mut entries: Vec<(WorkerIdx, Preference)> = entries.into_iter().collect();
            entries.sort_by_key(|(w, _)| *w);
            for (w, _) in &entries {
                workers[w.0].open_hours += 1;
            }
            availability.push(entries);
        }

        let previous = self
            .slots
            .iter()
            .map(|s| {
                s.key
                    .previous_hour()
                    .and_then(|k| self.slot_index.get(&k).copied())
            })
            .collect();

        ConstraintModel {
            workers,
            slots: self.slots,
            slot_index: self.slot_index,
            availability,
            previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn pref_a(p: Priority) -> Preference {
        Preference::only(Location::A, p)
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut b = ConstraintModelBuilder::new();
        assert_eq!(b.add_worker("  ", 1, 2), Err(StaffingError::BlankWorkerName));
    }

    #[test]
    fn test_rejects_duplicate_worker() {
        let mut b = ConstraintModelBuilder::new();
        b.add_worker("Ada", 1, 2).unwrap();
        assert!(matches!(
            b.add_worker("Ada", 1, 2),
            Err(StaffingError::DuplicateWorker(_))
        ));
    }

    #[test]
    fn test_rejects_award_out_of_range() {
        let mut b = ConstraintModelBuilder::new();
        assert!(b.add_worker("Ada", 1, 0).is_err());
        assert!(b.add_worker("Ada", 1, DEFAULT_MAX_AWARD + 1).is_err());
        assert!(b.add_worker("Ada", 1, DEFAULT_MAX_AWARD).is_ok());
    }

    #[test]
    fn test_custom_max_award() {
        let mut b = ConstraintModelBuilder::new().with_max_award(20);
        assert!(b.add_worker("Ada", 18, 20).is_ok());
    }

    #[test]
    fn test_rejects_desired_out_of_range() {
        let mut b = ConstraintModelBuilder::new();
        assert!(matches!(
            b.add_worker("Ada", 0, 5),
            Err(StaffingError::InvalidDesiredHours { .. })
        ));
        assert!(matches!(
            b.add_worker("Ada", 6, 5),
            Err(StaffingError::InvalidDesiredHours { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_slot() {
        let mut b = ConstraintModelBuilder::new();
        b.add_slot(SlotKey::new(9, 2), 1, 0).unwrap();
        assert_eq!(
            b.add_slot(SlotKey::new(9, 2), 2, 2),
            Err(StaffingError::DuplicateSlot(SlotKey::new(9, 2)))
        );
    }

    #[test]
    fn test_rejects_unknown_slot_preference() {
        let mut b = ConstraintModelBuilder::new();
        let w = b.add_worker("Ada", 1, 2).unwrap();
        assert_eq!(
            b.set_preference(w, SlotKey::new(1, 1), pref_a(Priority::First)),
            Err(StaffingError::UnknownSlot(SlotKey::new(1, 1)))
        );
        assert_eq!(
            b.set_preference(WorkerIdx(4), SlotKey::new(1, 1), pref_a(Priority::First)),
            Err(StaffingError::UnknownWorker(4))
        );
    }

    #[test]
    fn test_open_hours_and_lookup() {
        let mut b = ConstraintModelBuilder::new();
        let s9 = b.add_slot(SlotKey::new(9, 2), 1, 1).unwrap();
        let s10 = b.add_slot(SlotKey::new(10, 2), 1, 0).unwrap();
        let bo = b.add_worker("Bo", 2, 3).unwrap();
        let ada = b.add_worker("Ada", 1, 2).unwrap();
        b.set_preference(ada, SlotKey::new(9, 2), pref_a(Priority::First))
            .unwrap();
        b.set_preference(bo, SlotKey::new(9, 2), Preference::both(Priority::Second))
            .unwrap();
        b.set_preference(bo, SlotKey::new(10, 2), pref_a(Priority::Acceptable))
            .unwrap();
        let model = b.build();

        assert_eq!(model.capacity_of(bo).open_hours, 2);
        assert_eq!(model.capacity_of(ada).open_hours, 1);
        assert_eq!(model.preferences_at(s9).len(), 2);
        assert_eq!(model.preferences_at(s9)[0].0, bo);
        assert_eq!(model.preference(s10, ada), None);
        assert_eq!(
            model.preference(s10, bo).map(|p| p.at(Location::A)),
            Some(Priority::Acceptable)
        );
        assert_eq!(model.previous_slot(s10), Some(s9));
        assert_eq!(model.previous_slot(s9), None);
        assert_eq!(model.total_required_hours(), 3);
        assert_eq!(model.worker_by_name("Ada"), Some(ada));
        assert_eq!(model.slot_idx(SlotKey::new(10, 2)), Some(s10));
    }
}
