//! Error types.
//!
//! Only input validation and configuration validation can fail. The search
//! itself never errors: unfillable slots become gaps and are scored.

use thiserror::Error;

use crate::model::SlotKey;

/// Errors raised while building a constraint model or validating a config.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StaffingError {
    #[error("worker name is blank")]
    BlankWorkerName,

    #[error("worker `{0}` is defined more than once")]
    DuplicateWorker(String),

    #[error("slot {0} is defined more than once")]
    DuplicateSlot(SlotKey),

    #[error("unknown slot {0}")]
    UnknownSlot(SlotKey),

    #[error("unknown worker index {0}")]
    UnknownWorker(usize),

    #[error("worker `{worker}`: awarded hours {awarded} outside (0, {max_award}]")]
    InvalidAwardedHours {
        worker: String,
        awarded: u32,
        max_award: u32,
    },

    #[error("worker `{worker}`: desired hours {desired} outside (0, {awarded}]")]
    InvalidDesiredHours {
        worker: String,
        desired: u32,
        awarded: u32,
    },

    #[error("priority code {0} is not one of -1, 0, 1, 2")]
    InvalidPriorityCode(i64),

    #[error("requirement cell at {slot} is not a staffing count: `{text}`")]
    InvalidRequirementCell { slot: SlotKey, text: String },

    #[error("worker `{worker}`: improper availability entries at {}", format_slots(.slots))]
    InvalidAvailabilityCells { worker: String, slots: Vec<SlotKey> },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn format_slots(slots: &[SlotKey]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StaffingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cells_lists_every_slot() {
        let err = StaffingError::InvalidAvailabilityCells {
            worker: "Ada".into(),
            slots: vec![SlotKey::new(9, 2), SlotKey::new(10, 3)],
        };
        let msg = err.to_string();
        assert!(msg.contains("Ada"));
        assert!(msg.contains("(9, 2)"));
        assert!(msg.contains("(10, 3)"));
    }

    #[test]
    fn test_awarded_message() {
        let err = StaffingError::InvalidAwardedHours {
            worker: "Bo".into(),
            awarded: 20,
            max_award: 15,
        };
        assert_eq!(
            err.to_string(),
            "worker `Bo`: awarded hours 20 outside (0, 15]"
        );
    }
}
