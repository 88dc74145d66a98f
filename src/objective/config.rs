//! Objective weights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffingError};

/// Weights of the additive part of the objective and the desire-trust
/// threshold.
///
/// # Examples
///
/// ```
/// use u_staffing::objective::ObjectiveWeights;
///
/// let weights = ObjectiveWeights::default().with_gap_penalty(5000.0);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectiveWeights {
    /// Subtracted from the base score per missing worker.
    pub gap_penalty: f64,

    /// Multiplies the smallest number of hours given to any worker.
    pub min_filled: f64,

    /// Multiplies the square of the smallest hours/desired proportion.
    pub min_proportion: f64,

    /// Workers whose `open / desired` exceeds this ratio count towards the
    /// desire factor; the rest had too little availability for their desire
    /// to be meaningful.
    pub desire_trust_ratio: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            gap_penalty: 1000.0,
            min_filled: 100.0,
            min_proportion: 100.0,
            desire_trust_ratio: 2.0,
        }
    }
}

impl ObjectiveWeights {
    pub fn with_gap_penalty(mut self, w: f64) -> Self {
        self.gap_penalty = w;
        self
    }

    pub fn with_min_filled(mut self, w: f64) -> Self {
        self.min_filled = w;
        self
    }

    pub fn with_min_proportion(mut self, w: f64) -> Self {
        self.min_proportion = w;
        self
    }

    pub fn with_desire_trust_ratio(mut self, r: f64) -> Self {
        self.desire_trust_ratio = r;
        self
    }

    /// Validates the weights.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("gap_penalty", self.gap_penalty),
            ("min_filled", self.min_filled),
            ("min_proportion", self.min_proportion),
            ("desire_trust_ratio", self.desire_trust_ratio),
        ];
        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(StaffingError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let w = ObjectiveWeights::default();
        assert!((w.gap_penalty - 1000.0).abs() < 1e-12);
        assert!((w.desire_trust_ratio - 2.0).abs() < 1e-12);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(ObjectiveWeights::default()
            .with_min_filled(-1.0)
            .validate()
            .is_err());
        assert!(ObjectiveWeights::default()
            .with_gap_penalty(f64::NAN)
            .validate()
            .is_err());
    }
}
