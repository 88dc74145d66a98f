//! Parameter sweep over `(initial_temperature, cooling_rate)` grids.
//!
//! Every grid point is run `repetitions` times with its own seed. Runs
//! share only the problem, so with the `parallel` feature they execute on
//! the rayon pool; results are identical either way.

use std::time::Duration;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::config::SaConfig;
use super::runner::{SaResult, SaRunner};
use super::types::SaProblem;
use crate::error::{Result, StaffingError};

/// Grid definition for a sweep.
///
/// # Examples
///
/// ```
/// use u_staffing::sa::ParameterSweep;
///
/// let sweep = ParameterSweep::default()
///     .with_temperatures(vec![1000.0, 4000.0])
///     .with_cooling_rates(vec![0.01])
///     .with_repetitions(3);
/// assert_eq!(sweep.total_runs(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct ParameterSweep {
    pub temperatures: Vec<f64>,
    pub cooling_rates: Vec<f64>,
    /// Runs per grid point.
    pub repetitions: usize,
    /// Settings shared by every run; its temperature, rate and seed are
    /// overridden per run.
    pub base: SaConfig,
    /// Seed of the first run; run `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for ParameterSweep {
    fn default() -> Self {
        Self {
            temperatures: (1..=10u32).map(|x| f64::from(x * x * 1000)).collect(),
            cooling_rates: vec![0.001, 0.005, 0.01, 0.02],
            repetitions: 10,
            base: SaConfig::default(),
            seed: 0,
        }
    }
}

/// Aggregate of the runs at one grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry {
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    /// Lowest best cost over the repetitions.
    pub best_cost: f64,
    pub mean_best_cost: f64,
    pub mean_elapsed: Duration,
}

/// Outcome of a sweep.
#[derive(Debug, Clone)]
pub struct SweepReport<S: Clone> {
    /// One entry per grid point, temperatures outermost.
    pub entries: Vec<SweepEntry>,
    /// Best solution over every run.
    pub best: S,
    pub best_cost: f64,
    /// `(initial_temperature, cooling_rate)` that produced `best`.
    pub best_params: (f64, f64),
    pub total_elapsed: Duration,
}

impl ParameterSweep {
    pub fn with_temperatures(mut self, temperatures: Vec<f64>) -> Self {
        self.temperatures = temperatures;
        self
    }

    pub fn with_cooling_rates(mut self, rates: Vec<f64>) -> Self {
        self.cooling_rates = rates;
        self
    }

    pub fn with_repetitions(mut self, n: usize) -> Self {
        self.repetitions = n;
        self
    }

    pub fn with_base(mut self, base: SaConfig) -> Self {
        self.base = base;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn total_runs(&self) -> usize {
        self.temperatures.len() * self.cooling_rates.len() * self.repetitions
    }

    fn grid(&self) -> Vec<(f64, f64)> {
        self.temperatures
            .iter()
            .flat_map(|&t| self.cooling_rates.iter().map(move |&r| (t, r)))
            .collect()
    }

    fn config_for(&self, temperature: f64, rate: f64, run: usize) -> SaConfig {
        self.base
            .clone()
            .with_initial_temperature(temperature)
            .with_cooling_rate(rate)
            .with_seed(self.seed.wrapping_add(run as u64))
    }

    /// Validates the grid and every configuration it produces.
    pub fn validate(&self) -> Result<()> {
        if self.total_runs() == 0 {
            return Err(StaffingError::InvalidConfig(
                "sweep needs at least one temperature, cooling rate and repetition".into(),
            ));
        }
        for (t, r) in self.grid() {
            self.config_for(t, r, 0).validate()?;
        }
        Ok(())
    }

    /// Runs every grid point and reduces by lowest best cost.
    pub fn run<P: SaProblem>(&self, problem: &P) -> Result<SweepReport<P::Solution>> {
        self.validate()?;
        let grid = self.grid();
        let jobs: Vec<(usize, SaConfig)> = grid
            .iter()
            .enumerate()
            .flat_map(|(point, &(t, r))| {
                (0..self.repetitions).map(move |rep| (point, self.repetitions * point + rep, t, r))
            })
            .map(|(point, run, t, r)| (point, self.config_for(t, r, run)))
            .collect();

        info!(
            grid_points = grid.len(),
            repetitions = self.repetitions,
            "launching parameter sweep"
        );

        let execute = |(point, config): &(usize, SaConfig)| -> Result<(usize, SaResult<P::Solution>)> {
            SaRunner::run(problem, config).map(|r| (*point, r))
        };

        #[cfg(feature = "parallel")]
        let results: Vec<(usize, SaResult<P::Solution>)> =
            jobs.par_iter().map(execute).collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let results: Vec<(usize, SaResult<P::Solution>)> =
            jobs.iter().map(execute).collect::<Result<_>>()?;

        let mut total_elapsed = Duration::ZERO;
        let mut entries: Vec<SweepEntry> = grid
            .iter()
            .map(|&(t, r)| SweepEntry {
                initial_temperature: t,
                cooling_rate: r,
                best_cost: f64::INFINITY,
                mean_best_cost: 0.0,
                mean_elapsed: Duration::ZERO,
            })
            .collect();
        let mut overall: Option<(usize, SaResult<P::Solution>)> = None;

        for (point, result) in results {
            let entry = &mut entries[point];
            entry.best_cost = entry.best_cost.min(result.best_cost);
            entry.mean_best_cost += result.best_cost / self.repetitions as f64;
            entry.mean_elapsed += result.elapsed / self.repetitions as u32;
            total_elapsed += result.elapsed;

            if overall
                .as_ref()
                .map_or(true, |(_, best)| result.best_cost < best.best_cost)
            {
                overall = Some((point, result));
            }
        }

        let (point, best) = overall.ok_or_else(|| {
            StaffingError::InvalidConfig("sweep produced no runs".into())
        })?;
        let best_params = grid[point];
        info!(
            initial_temperature = best_params.0,
            cooling_rate = best_params.1,
            best_score = -best.best_cost,
            "parameter sweep finished"
        );

        Ok(SweepReport {
            entries,
            best_cost: best.best_cost,
            best: best.best,
            best_params,
            total_elapsed,
        })
    }
}
