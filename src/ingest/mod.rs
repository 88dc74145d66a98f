//! Ingestion boundary.
//!
//! Turns the raw text of an operating-hours grid and of worker availability
//! forms into a validated [`ConstraintModel`](crate::model::ConstraintModel).
//! Reading the grids out of spreadsheet files is left to the caller; this
//! module only owns the cell grammar and the record validation.

mod cells;
mod form;

pub use cells::{parse_availability, parse_requirement, AvailabilityCell, CellLabels};
pub use form::{AvailabilityForm, Ingestor};
