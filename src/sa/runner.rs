//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Build the initial solution; it is both current and best.
//! 2. While `T > min_temperature`:
//!    a. Generate a neighbor of the current solution
//!    b. Accept it with [`acceptance_probability`]
//!    c. Record it as best if it beats the best seen, accepted or not
//!    d. Cool: `T *= 1 - cooling_rate`
//! 3. Return the best solution seen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use crate::random::create_rng;

/// One iteration of the search, for plotting progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub temperature: f64,
    /// Energy of the neighbor evaluated at this step (initial energy for the
    /// first point).
    pub energy: f64,
    /// Best energy seen up to and including this step.
    pub best: f64,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of neighbors strictly better than the current solution.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Wall time of the search, construction included.
    pub elapsed: Duration,

    /// Best cost after construction and after every iteration.
    pub cost_history: Vec<f64>,

    /// Per-iteration trace, empty unless [`SaConfig::record_trace`] is set.
    pub trace: Vec<TracePoint>,
}

/// Probability of moving from energy `current` to energy `candidate` at
/// temperature `temperature`.
///
/// Strictly better candidates are always accepted; otherwise the Metropolis
/// criterion `exp((current - candidate) / T)` applies.
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        1.0
    } else {
        ((current - candidate) / temperature).exp()
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The RNG is seeded from `config.seed`, or from entropy when unset.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, cancel, &mut rng)
    }

    /// Runs SA drawing every random decision from `rng`.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;
        let start = Instant::now();

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        debug!(
            initial_temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
            initial_cost = current_cost,
            "annealing started"
        );

        let mut cost_history = Vec::with_capacity(config.expected_iterations() + 1);
        cost_history.push(best_cost);
        let mut trace_points = Vec::new();
        if config.record_trace {
            trace_points.push(TracePoint {
                temperature,
                energy: current_cost,
                best: best_cost,
            });
        }

        while temperature > config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                break;
            }

            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);

            if neighbor_cost < current_cost {
                improving_moves += 1;
            }
            let probability = acceptance_probability(current_cost, neighbor_cost, temperature);
            let accept = rng.random_range(0.0..1.0) < probability;

            if neighbor_cost < best_cost {
                trace!(
                    iteration = total_iterations,
                    temperature,
                    best_cost = neighbor_cost,
                    "new best"
                );
                best = neighbor.clone();
                best_cost = neighbor_cost;
            }

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            total_iterations += 1;
            cost_history.push(best_cost);
            if config.record_trace {
                trace_points.push(TracePoint {
                    temperature,
                    energy: neighbor_cost,
                    best: best_cost,
                });
            }

            temperature *= 1.0 - config.cooling_rate;
        }

        let elapsed = start.elapsed();
        info!(
            iterations = total_iterations,
            elapsed_secs = elapsed.as_secs_f64(),
            best_score = -best_cost,
            cancelled,
            "annealing completed"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            elapsed,
            cost_history,
            trace: trace_points,
        })
    }
}
