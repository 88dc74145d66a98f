//! Shared fixtures for unit tests.

use crate::model::{ConstraintModel, ConstraintModelBuilder, Preference, Priority, SlotKey};

/// Two days, hours 9..=12. Location A needs one worker every hour,
/// location B one worker at 10 and 11. Five workers with a rotating
/// preference pattern.
pub(crate) fn small_week() -> ConstraintModel {
    let mut b = ConstraintModelBuilder::new();
    let mut keys = Vec::new();
    for day in 2..=3 {
        for hour in 9..=12 {
            let key = SlotKey::new(hour, day);
            let need_b = u32::from(hour == 10 || hour == 11);
            b.add_slot(key, 1, need_b).unwrap();
            keys.push(key);
        }
    }

    let workers = [("Ada", 3, 4), ("Bo", 2, 3), ("Cy", 2, 2), ("Di", 1, 3), ("Ed", 2, 5)];
    for (w, (name, desired, awarded)) in workers.into_iter().enumerate() {
        let idx = b.add_worker(name, desired, awarded).unwrap();
        for (i, key) in keys.iter().enumerate() {
            let pref = match (i + 2 * w) % 5 {
                0 => Preference::new(Priority::First, Priority::Unavailable),
                1 => Preference::both(Priority::Second),
                2 => Preference::new(Priority::Unavailable, Priority::Acceptable),
                3 => Preference::both(Priority::Acceptable),
                _ => continue,
            };
            b.set_preference(idx, *key, pref).unwrap();
        }
    }
    b.build()
}

/// One slot needing one worker at A and none at B, one worker with
/// `desired = awarded = 1` and the given preference there.
pub(crate) fn single_slot(preference: Preference) -> ConstraintModel {
    let mut b = ConstraintModelBuilder::new();
    b.add_slot(SlotKey::new(9, 2), 1, 0).unwrap();
    let w = b.add_worker("Solo", 1, 1).unwrap();
    b.set_preference(w, SlotKey::new(9, 2), preference).unwrap();
    b.build()
}
