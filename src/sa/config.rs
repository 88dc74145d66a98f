//! SA configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffingError};

/// Configuration for the annealing run.
///
/// Temperature decays geometrically, `T_{k+1} = T_k * (1 - cooling_rate)`,
/// with one neighbor evaluated per temperature step. The run stops once
/// `T <= min_temperature`.
///
/// # Examples
///
/// ```
/// use u_staffing::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10_000.0)
///     .with_cooling_rate(0.005)
///     .with_seed(42);
/// assert_eq!(config.expected_iterations(), 1838);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values accept worse neighbors for longer.
    pub initial_temperature: f64,

    /// The run ends when the temperature is at or below this floor.
    pub min_temperature: f64,

    /// Fractional temperature decrease per step, in (0, 1).
    pub cooling_rate: f64,

    /// Hard iteration budget. 0 = no limit.
    pub max_iterations: usize,

    /// Record temperature and energies for every iteration.
    pub record_trace: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            min_temperature: 1.0,
            cooling_rate: 0.005,
            max_iterations: 0,
            record_trace: false,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, r: f64) -> Self {
        self.cooling_rate = r;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of iterations the cooling schedule allows:
    /// `ceil(ln(T_min / T0) / ln(1 - r))`.
    ///
    /// Ignores `max_iterations`. Returns 0 for an invalid configuration.
    pub fn expected_iterations(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let steps = (self.min_temperature / self.initial_temperature).ln()
            / (1.0 - self.cooling_rate).ln();
        steps.ceil() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0) {
            return Err(StaffingError::InvalidConfig(
                "initial_temperature must be positive".into(),
            ));
        }
        if !(self.min_temperature > 0.0) {
            return Err(StaffingError::InvalidConfig(
                "min_temperature must be positive".into(),
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(StaffingError::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(StaffingError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
