//! Staffing as an annealing problem.
//!
//! [`StaffingProblem`] plugs the greedy constructor, the slot-reroll
//! perturbation and the schedule objective into [`SaRunner`].

use std::sync::Arc;

use rand::Rng;

use crate::error::Result;
use crate::model::ConstraintModel;
use crate::objective::{evaluate, ObjectiveWeights, ScheduleMetrics};
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};
use crate::schedule::{construct, perturb, report, CandidateSchedule, DEFAULT_NUM_CHANGES};

/// Schedule search over a fixed constraint model.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_staffing::model::{ConstraintModelBuilder, Preference, Priority, SlotKey};
/// use u_staffing::sa::{SaConfig, SaRunner};
/// use u_staffing::staffing::StaffingProblem;
///
/// let mut b = ConstraintModelBuilder::new();
/// b.add_slot(SlotKey::new(9, 2), 1, 0).unwrap();
/// let w = b.add_worker("Solo", 1, 1).unwrap();
/// b.set_preference(w, SlotKey::new(9, 2), Preference::both(Priority::First)).unwrap();
///
/// let problem = StaffingProblem::new(Arc::new(b.build()));
/// let result = SaRunner::run(&problem, &SaConfig::default().with_seed(7)).unwrap();
/// assert_eq!(result.best.metrics().gaps, 0);
/// ```
#[derive(Debug, Clone)]
pub struct StaffingProblem {
    model: Arc<ConstraintModel>,
    num_changes: usize,
    weights: ObjectiveWeights,
}

impl StaffingProblem {
    pub fn new(model: Arc<ConstraintModel>) -> Self {
        Self {
            model,
            num_changes: DEFAULT_NUM_CHANGES,
            weights: ObjectiveWeights::default(),
        }
    }

    /// Slots rerolled per location by each neighbor move.
    pub fn with_num_changes(mut self, n: usize) -> Self {
        self.num_changes = n;
        self
    }

    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn model(&self) -> &Arc<ConstraintModel> {
        &self.model
    }

    pub fn weights(&self) -> &ObjectiveWeights {
        &self.weights
    }

    /// Metrics of `ps` under this problem's weights; `energy` equals
    /// [`SaProblem::cost`].
    pub fn metrics(&self, ps: &CandidateSchedule) -> ScheduleMetrics {
        ps.metrics_with(&self.weights)
    }

    /// Score and worker report of `ps` under this problem's weights.
    pub fn report(&self, ps: &CandidateSchedule) -> String {
        report::full_report(ps, &self.weights)
    }
}

impl SaProblem for StaffingProblem {
    type Solution = CandidateSchedule;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> CandidateSchedule {
        construct(Arc::clone(&self.model), rng)
    }

    fn cost(&self, ps: &CandidateSchedule) -> f64 {
        evaluate(ps, &self.weights)
    }

    fn neighbor<R: Rng>(&self, ps: &CandidateSchedule, rng: &mut R) -> CandidateSchedule {
        perturb(ps, self.num_changes, rng)
    }
}

/// Anneals a schedule for `model` with default weights and move size.
pub fn solve(model: Arc<ConstraintModel>, config: &SaConfig) -> Result<SaResult<CandidateSchedule>> {
    SaRunner::run(&StaffingProblem::new(model), config)
}
