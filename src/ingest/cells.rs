//! Cell-text grammar for operating-hour and availability entries.
//!
//! Both grammars name locations with short, case-insensitive labels
//! (default `csb` for location A and `sju` for location B). A bare number
//! refers to location A.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{Location, Preference, Priority};

/// Text labels that identify each location inside a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellLabels {
    pub a: String,
    pub b: String,
}

impl Default for CellLabels {
    fn default() -> Self {
        Self::new("csb", "sju")
    }
}

impl CellLabels {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.trim().to_lowercase(),
            b: b.trim().to_lowercase(),
        }
    }

    fn label(&self, location: Location) -> &str {
        match location {
            Location::A => &self.a,
            Location::B => &self.b,
        }
    }

    /// Splits `part` into an optional location label and an integer.
    ///
    /// Accepts `"<label> n"`, `"n <label>"` and `"n"`.
    fn labelled_number(&self, part: &str) -> Option<(Option<Location>, i64)> {
        let part = part.trim();
        for location in Location::ALL {
            let label = self.label(location);
            if label.is_empty() {
                continue;
            }
            if let Some(rest) = part
                .strip_prefix(label)
                .or_else(|| part.strip_suffix(label))
            {
                return rest.trim().parse().ok().map(|n| (Some(location), n));
            }
        }
        part.parse().ok().map(|n| (None, n))
    }
}

/// Parses a requirement cell into `(required_a, required_b)`.
///
/// Returns `None` when the text is not a staffing count.
///
/// ```
/// use u_staffing::ingest::{parse_requirement, CellLabels};
///
/// let labels = CellLabels::default();
/// assert_eq!(parse_requirement("", &labels), Some((0, 0)));
/// assert_eq!(parse_requirement("2", &labels), Some((2, 0)));
/// assert_eq!(parse_requirement("SJU 1, CSB 3", &labels), Some((3, 1)));
/// assert_eq!(parse_requirement("lots", &labels), None);
/// ```
pub fn parse_requirement(text: &str, labels: &CellLabels) -> Option<(u32, u32)> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return Some((0, 0));
    }

    let mut counts = [None::<u32>; 2];
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() > 2 {
        return None;
    }
    for part in &parts {
        let (location, n) = labels.labelled_number(part)?;
        let n = u32::try_from(n).ok()?;
        let location = match location {
            Some(loc) => loc,
            // An unlabelled count only makes sense on its own.
            None if parts.len() == 1 => Location::A,
            None => return None,
        };
        let slot = &mut counts[location.index()];
        if slot.is_some() {
            return None;
        }
        *slot = Some(n);
    }
    Some((counts[0].unwrap_or(0), counts[1].unwrap_or(0)))
}

/// Parsed content of an availability cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityCell {
    /// Nothing recorded: blank, `x`, or `-`.
    Blank,
    /// A recorded preference pair.
    Entry(Preference),
    /// Text that fits none of the accepted forms.
    Invalid,
}

/// Parses an availability cell.
///
/// ```
/// use u_staffing::ingest::{parse_availability, AvailabilityCell, CellLabels};
/// use u_staffing::model::{Preference, Priority};
///
/// let labels = CellLabels::default();
/// assert_eq!(parse_availability("x", &labels), AvailabilityCell::Blank);
/// assert_eq!(
///     parse_availability("csb or sju 2", &labels),
///     AvailabilityCell::Entry(Preference::both(Priority::Second)),
/// );
/// assert_eq!(parse_availability("maybe", &labels), AvailabilityCell::Invalid);
/// ```
pub fn parse_availability(text: &str, labels: &CellLabels) -> AvailabilityCell {
    let text = text.trim().to_lowercase();
    if text.is_empty() || text.contains('x') || text.contains('-') {
        return AvailabilityCell::Blank;
    }

    let either = [
        format!("{} or {}", labels.a, labels.b),
        format!("{} or {}", labels.b, labels.a),
    ];
    for prefix in &either {
        if let Some(rest) = text.strip_prefix(prefix.as_str()) {
            return match rest.trim().parse::<i64>().map(Priority::from_code) {
                Ok(Ok(p)) => AvailabilityCell::Entry(Preference::both(p)),
                _ => AvailabilityCell::Invalid,
            };
        }
    }

    match labels.labelled_number(&text) {
        Some((location, code)) => match Priority::from_code(code) {
            Ok(p) => AvailabilityCell::Entry(Preference::only(location.unwrap_or(Location::A), p)),
            Err(_) => AvailabilityCell::Invalid,
        },
        None => AvailabilityCell::Invalid,
    }
}
