//! The fixed daily slot grid.
//!
//! Every day offers the same 12 interview slots: 08:00 through 15:20 in
//! 40-minute steps. The grid is derived, never persisted.

use chrono::{Duration, NaiveTime};

/// Number of slots offered per day.
pub const SLOT_COUNT: usize = 12;

/// Spacing between consecutive slots, in minutes.
pub const SLOT_SPACING_MINUTES: i64 = 40;

/// Returns the ordered `HH:MM` labels of the daily grid.
///
/// Deterministic: every call yields the same 12 labels, starting at
/// "08:00" and ending at "15:20".
pub fn slot_grid() -> Vec<String> {
    let first = NaiveTime::from_hms_opt(8, 0, 0).expect("grid start time is valid");

    (0..SLOT_COUNT)
        .map(|i| {
            (first + Duration::minutes(SLOT_SPACING_MINUTES * i as i64))
                .format("%H:%M")
                .to_string()
        })
        .collect()
}

/// True when `label` is one of the grid's slot labels.
pub fn is_grid_slot(label: &str) -> bool {
    slot_grid().iter().any(|slot| slot == label)
}
