//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! Cooling is geometric and each temperature step evaluates one neighbor.
//! [`ParameterSweep`] runs a grid of `(T0, rate)` pairs for tuning.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod sweep;
mod types;

pub use config::SaConfig;
pub use runner::{acceptance_probability, SaResult, SaRunner, TracePoint};
pub use sweep::{ParameterSweep, SweepEntry, SweepReport};
pub use types::SaProblem;
