//! Form-level ingestion into a [`ConstraintModel`].

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cells::{parse_availability, parse_requirement, AvailabilityCell, CellLabels};
use crate::error::{Result, StaffingError};
use crate::model::{ConstraintModel, ConstraintModelBuilder, Preference, SlotKey, WorkerIdx};

/// One worker's availability form: header fields plus the raw grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvailabilityForm {
    pub name: String,
    pub desired_hours: u32,
    pub awarded_hours: u32,
    pub cells: Vec<(SlotKey, String)>,
}

/// Accumulates operating hours and availability forms into a model.
///
/// # Examples
///
/// ```
/// use u_staffing::ingest::{AvailabilityForm, Ingestor};
/// use u_staffing::model::SlotKey;
///
/// let mut ingestor = Ingestor::new();
/// ingestor
///     .operating_hours([(SlotKey::new(9, 2), "csb 1"), (SlotKey::new(10, 2), "sju 1")])
///     .unwrap();
/// ingestor
///     .availability_form(&AvailabilityForm {
///         name: "Ada".into(),
///         desired_hours: 1,
///         awarded_hours: 2,
///         cells: vec![(SlotKey::new(9, 2), "1".into())],
///     })
///     .unwrap();
/// let model = ingestor.finish();
/// assert_eq!(model.num_slots(), 2);
/// assert_eq!(model.num_workers(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    labels: CellLabels,
    builder: ConstraintModelBuilder,
}

impl Ingestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, labels: CellLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_max_award(mut self, max_award: u32) -> Self {
        self.builder = self.builder.with_max_award(max_award);
        self
    }

    /// Registers every slot of the operating-hours grid.
    ///
    /// Stops at the first cell that is not a staffing count; in that case
    /// none of the grid's slots are registered.
    pub fn operating_hours<'a, I>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = (SlotKey, &'a str)>,
    {
        let mut probe = self.builder.clone();
        for (slot, text) in cells {
            let (a, b) = parse_requirement(text, &self.labels).ok_or_else(|| {
                StaffingError::InvalidRequirementCell {
                    slot,
                    text: text.to_string(),
                }
            })?;
            probe.add_slot(slot, a, b)?;
        }
        self.builder = probe;
        Ok(())
    }

    /// Validates and records one availability form.
    ///
    /// The form is rejected as a whole when its header is invalid or any
    /// cell is unreadable; in that case the model is left untouched.
    pub fn availability_form(&mut self, form: &AvailabilityForm) -> Result<WorkerIdx> {
        let mut entries: Vec<(SlotKey, Preference)> = Vec::new();
        let mut bad = Vec::new();
        for (slot, text) in &form.cells {
            match parse_availability(text, &self.labels) {
                AvailabilityCell::Blank => {}
                AvailabilityCell::Entry(p) => entries.push((*slot, p)),
                AvailabilityCell::Invalid => bad.push(*slot),
            }
        }

        // Header problems are reported before cell problems.
        let mut probe = self.builder.clone();
        let worker = probe.add_worker(&form.name, form.desired_hours, form.awarded_hours)?;

        if !bad.is_empty() {
            return Err(StaffingError::InvalidAvailabilityCells {
                worker: form.name.trim().to_string(),
                slots: bad,
            });
        }
        for (slot, preference) in entries {
            probe.set_preference(worker, slot, preference)?;
        }

        self.builder = probe;
        debug!(worker = %form.name.trim(), "availability form accepted");
        Ok(worker)
    }

    /// Records every form, collecting the errors of the rejected ones.
    pub fn availability_forms<'a, I>(&mut self, forms: I) -> Vec<StaffingError>
    where
        I: IntoIterator<Item = &'a AvailabilityForm>,
    {
        let mut errors = Vec::new();
        for form in forms {
            if let Err(e) = self.availability_form(form) {
                warn!(error = %e, "availability form rejected");
                errors.push(e);
            }
        }
        errors
    }

    pub fn finish(self) -> ConstraintModel {
        self.builder.build()
    }
}
