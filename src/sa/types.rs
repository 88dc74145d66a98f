//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The problem supplies the starting point, the energy and the neighbor
/// move; the runner owns temperature, acceptance and best tracking.
///
/// # Minimization
///
/// SA minimizes the cost. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// impl SaProblem for StaffingProblem {
///     type Solution = CandidateSchedule;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> CandidateSchedule {
///         construct(self.model.clone(), rng)
///     }
///
///     fn cost(&self, ps: &CandidateSchedule) -> f64 {
///         evaluate(ps, &self.weights)
///     }
///
///     fn neighbor<R: Rng>(&self, ps: &CandidateSchedule, rng: &mut R) -> CandidateSchedule {
///         perturb(ps, self.num_changes, rng)
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the energy of a solution. Lower is better. Must be pure.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor without modifying `solution`.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
