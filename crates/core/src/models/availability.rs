use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One grid slot tagged with whether it is still free on the queried date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub slots: Vec<SlotAvailability>,
}

/// Bookable date range hints for the booking form: today and the furthest
/// date the form accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingWindowResponse {
    pub default_date: NaiveDate,
    pub max_date: NaiveDate,
}

/// Combines the grid with the slots already booked on a date.
///
/// Recomputed on every request; never cached. A slot is available exactly
/// when no booking for it exists on the date.
pub fn availability(grid: &[String], booked: &[String]) -> Vec<SlotAvailability> {
    grid.iter()
        .map(|slot| SlotAvailability {
            time: slot.clone(),
            available: !booked.iter().any(|taken| taken == slot),
        })
        .collect()
}
