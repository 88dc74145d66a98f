//! Human-readable reports for the export side.
//!
//! Everything here renders to `String`; writing files is the caller's job.

use std::cmp::Ordering;

use super::candidate::CandidateSchedule;
use crate::model::{ConstraintModel, Location, Priority, SlotIdx, WorkerIdx};
use crate::objective::ObjectiveWeights;

/// Text for one roster cell: names joined by `",\n"`, or `"-"` when empty.
pub fn roster_cell(ps: &CandidateSchedule, location: Location, slot: SlotIdx) -> String {
    let roster = ps.roster(location, slot);
    if roster.is_empty() {
        return "-".to_string();
    }
    roster
        .iter()
        .map(|a| ps.model().capacity_of(a.worker).name.as_str())
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Per-worker hours, sorted by hours/desired proportion (highest first).
pub fn worker_report(ps: &CandidateSchedule) -> String {
    let model = ps.model();
    let proportion = |w: WorkerIdx| {
        let desired = model.capacity_of(w).desired_hours;
        if desired == 0 {
            0.0
        } else {
            ps.hours(w) as f64 / desired as f64
        }
    };

    let mut workers: Vec<WorkerIdx> = model.worker_indices().collect();
    workers.sort_by(|a, b| {
        proportion(*b)
            .partial_cmp(&proportion(*a))
            .unwrap_or(Ordering::Equal)
    });

    let mut out = String::new();
    for w in workers {
        let cap = model.capacity_of(w);
        out.push_str(&format!(
            "{} \n- Desired: {:>2} Scheduled: {:>2} Proportion: {:>4.2} Open: {}\n",
            cap.name,
            cap.desired_hours,
            ps.hours(w),
            proportion(w),
            cap.open_hours
        ));
    }
    out
}

/// Score block under `weights` followed by the worker block.
///
/// Pass the weights the schedule was searched with so the printed score
/// matches the annealer's best cost.
pub fn full_report(ps: &CandidateSchedule, weights: &ObjectiveWeights) -> String {
    format!("{}\n{}", ps.metrics_with(weights), worker_report(ps))
}

/// Workers worth asking about an open slot: those who ranked it as a first
/// or second choice, or, if nobody did, those who marked it acceptable.
pub fn slot_candidates(
    model: &ConstraintModel,
    slot: SlotIdx,
    location: Location,
) -> Vec<(WorkerIdx, Priority)> {
    let ranked: Vec<_> = model
        .preferences_at(slot)
        .iter()
        .map(|(w, p)| (*w, p.at(location)))
        .filter(|(_, p)| matches!(p, Priority::First | Priority::Second))
        .collect();
    if !ranked.is_empty() {
        return ranked;
    }
    model
        .preferences_at(slot)
        .iter()
        .map(|(w, p)| (*w, p.at(location)))
        .filter(|(_, p)| *p == Priority::Acceptable)
        .collect()
}

/// Candidate list of every staffed slot, one block per location.
pub fn constraint_report(model: &ConstraintModel) -> String {
    let mut out = String::new();
    for location in Location::ALL {
        out.push_str(&format!("Location {location}\n"));
        for slot in model.slot_indices() {
            if model.required_count(slot, location) == 0 {
                continue;
            }
            let people: Vec<String> = slot_candidates(model, slot, location)
                .into_iter()
                .map(|(w, p)| format!("{}: {}", model.capacity_of(w).name, p.code()))
                .collect();
            out.push_str(&format!("  {} {}\n", model.slot(slot).key, people.join(", ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConstraintModelBuilder, Preference, SlotKey};
    use crate::random::create_rng;
    use crate::schedule::{construct, Assignment};
    use std::sync::Arc;

    fn model() -> Arc<ConstraintModel> {
        let mut b = ConstraintModelBuilder::new();
        let k9 = SlotKey::new(9, 2);
        let k10 = SlotKey::new(10, 2);
        b.add_slot(k9, 2, 0).unwrap();
        b.add_slot(k10, 1, 0).unwrap();
        let ada = b.add_worker("Ada", 2, 2).unwrap();
        let bo = b.add_worker("Bo", 1, 1).unwrap();
        b.set_preference(ada, k9, Preference::only(Location::A, Priority::Second))
            .unwrap();
        b.set_preference(bo, k9, Preference::only(Location::A, Priority::Acceptable))
            .unwrap();
        b.set_preference(bo, k10, Preference::only(Location::A, Priority::Acceptable))
            .unwrap();
        Arc::new(b.build())
    }

    #[test]
    fn test_roster_cell() {
        let m = model();
        let mut ps = CandidateSchedule::new(m.clone());
        assert_eq!(roster_cell(&ps, Location::A, SlotIdx(0)), "-");
        let p = Preference::only(Location::A, Priority::First);
        ps.add_workers(
            Location::A,
            SlotIdx(0),
            [
                Assignment { worker: WorkerIdx(0), preference: p },
                Assignment { worker: WorkerIdx(1), preference: p },
            ],
        );
        assert_eq!(roster_cell(&ps, Location::A, SlotIdx(0)), "Ada,\nBo");
    }

    #[test]
    fn test_worker_report_sorted_by_proportion() {
        let m = model();
        let mut ps = CandidateSchedule::new(m);
        let p = Preference::only(Location::A, Priority::Acceptable);
        ps.add_workers(Location::A, SlotIdx(1), [Assignment { worker: WorkerIdx(1), preference: p }]);
        let text = worker_report(&ps);
        let bo = text.find("Bo").unwrap();
        let ada = text.find("Ada").unwrap();
        assert!(bo < ada);
        assert!(text.contains("- Desired:  1 Scheduled:  1 Proportion: 1.00 Open: 2"));
    }

    #[test]
    fn test_slot_candidates_fall_back_to_acceptable() {
        let m = model();
        assert_eq!(
            slot_candidates(&m, SlotIdx(0), Location::A),
            vec![(WorkerIdx(0), Priority::Second)]
        );
        assert_eq!(
            slot_candidates(&m, SlotIdx(1), Location::A),
            vec![(WorkerIdx(1), Priority::Acceptable)]
        );
        assert!(slot_candidates(&m, SlotIdx(1), Location::B).is_empty());
    }

    #[test]
    fn test_constraint_report_skips_unstaffed() {
        let text = constraint_report(&model());
        assert!(text.contains("(9, 2) Ada: 2"));
        assert!(text.contains("(10, 2) Bo: 0"));
        let b_block = text.split("Location B").nth(1).unwrap();
        assert!(!b_block.contains("(9, 2)"));
    }

    #[test]
    fn test_full_report() {
        let ps = construct(model(), &mut create_rng(2));
        let text = full_report(&ps, &ObjectiveWeights::default());
        assert!(text.contains("Score:"));
        assert!(text.contains("Ada"));
    }

    #[test]
    fn test_full_report_uses_given_weights() {
        let ps = CandidateSchedule::new(model());
        // Three positions unfilled.
        let default_text = full_report(&ps, &ObjectiveWeights::default());
        let light = ObjectiveWeights::default().with_gap_penalty(10.0);
        let light_text = full_report(&ps, &light);
        assert!(default_text.contains("Score: -3000.00"), "{default_text}");
        assert!(light_text.contains("Score: -30.00"), "{light_text}");
    }
}
