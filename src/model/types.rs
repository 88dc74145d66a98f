//! Core value types: locations, slots, priorities, workers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffingError};

/// One of the two staffed locations.
///
/// Each slot carries an independent staffing requirement per location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Location {
    A,
    B,
}

impl Location {
    /// Both locations, in construction order.
    pub const ALL: [Location; 2] = [Location::A, Location::B];

    /// Array index of this location (`A = 0`, `B = 1`).
    pub fn index(self) -> usize {
        match self {
            Location::A => 0,
            Location::B => 1,
        }
    }

    /// The opposite location.
    pub fn other(self) -> Location {
        match self {
            Location::A => Location::B,
            Location::B => Location::A,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::A => f.write_str("A"),
            Location::B => f.write_str("B"),
        }
    }
}

/// A worker's stated priority for one slot at one location.
///
/// Wire codes: `-1` unavailable, `0` acceptable, `1` first choice,
/// `2` second choice. Note that the code order is not the preference
/// order; use [`Priority::rank`] for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Priority {
    Unavailable,
    Acceptable,
    First,
    Second,
}

/// Tier order used by the greedy constructor.
pub const SELECTION_TIERS: [Priority; 3] = [Priority::First, Priority::Second, Priority::Acceptable];

impl Priority {
    /// Parses a wire code.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            -1 => Ok(Priority::Unavailable),
            0 => Ok(Priority::Acceptable),
            1 => Ok(Priority::First),
            2 => Ok(Priority::Second),
            other => Err(StaffingError::InvalidPriorityCode(other)),
        }
    }

    /// The wire code.
    pub fn code(self) -> i8 {
        match self {
            Priority::Unavailable => -1,
            Priority::Acceptable => 0,
            Priority::First => 1,
            Priority::Second => 2,
        }
    }

    /// Ordinal rank, higher is more preferred: `First > Second > Acceptable > Unavailable`.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Unavailable => 0,
            Priority::Acceptable => 1,
            Priority::Second => 2,
            Priority::First => 3,
        }
    }

    pub fn is_available(self) -> bool {
        self != Priority::Unavailable
    }

    /// Contribution of one assignment to the average priority score.
    pub fn satisfaction(self) -> f64 {
        match self {
            Priority::First => 2.0,
            Priority::Second => 1.0,
            _ => 0.0,
        }
    }
}

/// A pair of priorities, one per location, for one (worker, slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preference {
    a: Priority,
    b: Priority,
}

impl Preference {
    pub fn new(a: Priority, b: Priority) -> Self {
        Self { a, b }
    }

    /// Builds a preference from a pair of wire codes.
    pub fn from_codes(a: i64, b: i64) -> Result<Self> {
        Ok(Self::new(Priority::from_code(a)?, Priority::from_code(b)?))
    }

    /// Same priority at both locations.
    pub fn both(p: Priority) -> Self {
        Self::new(p, p)
    }

    /// Available at `location` with priority `p`, unavailable at the other.
    pub fn only(location: Location, p: Priority) -> Self {
        match location {
            Location::A => Self::new(p, Priority::Unavailable),
            Location::B => Self::new(Priority::Unavailable, p),
        }
    }

    pub fn at(&self, location: Location) -> Priority {
        match location {
            Location::A => self.a,
            Location::B => self.b,
        }
    }
}

/// `(hour, day)` key of a recurring weekly slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotKey {
    pub hour: u32,
    pub day: u32,
}

impl SlotKey {
    pub fn new(hour: u32, day: u32) -> Self {
        Self { hour, day }
    }

    /// The key one hour earlier on the same day.
    pub fn previous_hour(&self) -> Option<SlotKey> {
        self.hour.checked_sub(1).map(|hour| SlotKey::new(hour, self.day))
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.hour, self.day)
    }
}

/// Stable index of a slot within a [`ConstraintModel`](super::ConstraintModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotIdx(pub usize);

/// Stable index of a worker within a [`ConstraintModel`](super::ConstraintModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerIdx(pub usize);

/// A slot with its per-location staffing requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    pub key: SlotKey,
    required: [u32; 2],
}

impl Slot {
    pub fn new(key: SlotKey, required_a: u32, required_b: u32) -> Self {
        Self {
            key,
            required: [required_a, required_b],
        }
    }

    pub fn required(&self, location: Location) -> u32 {
        self.required[location.index()]
    }
}

/// A worker's hour capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Worker {
    /// Display name, unique within a model.
    pub name: String,
    /// Target hours to schedule.
    pub desired_hours: u32,
    /// Hard upper bound on scheduled hours.
    pub awarded_hours: u32,
    /// Number of slots with a recorded preference entry.
    pub open_hours: u32,
}

impl Worker {
    /// `open_hours / desired_hours`, or 0 when nothing is desired.
    pub fn availability_ratio(&self) -> f64 {
        if self.desired_hours == 0 {
            0.0
        } else {
            self.open_hours as f64 / self.desired_hours as f64
        }
    }
}
