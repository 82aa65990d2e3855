//! Date parsing, validation, and classification.
//!
//! `NaiveDate` is the canonical date type everywhere inside the service.
//! Display strings are produced here for the presentation boundary and are
//! never parsed back into dates.

use chrono::NaiveDate;

use crate::errors::{BookingError, BookingResult};

/// Wire format for dates in requests and storage.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable rendering used in listings and notification emails,
/// e.g. "Tuesday, June 10, 2025".
pub const DISPLAY_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Classification of a booking relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Upcoming,
    Completed,
}

/// Parses a strict `YYYY-MM-DD` date string.
pub fn parse_iso_date(input: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT)
        .map_err(|_| BookingError::Validation("Invalid date format".to_string()))
}

/// Parses a booking date and rejects dates before `today`.
///
/// `today` is passed in rather than read from the clock so the rule is
/// testable against fixed dates.
pub fn validate_booking_date(input: &str, today: NaiveDate) -> BookingResult<NaiveDate> {
    let date = parse_iso_date(input)?;

    if date < today {
        return Err(BookingError::Validation(
            "Cannot book appointments in the past".to_string(),
        ));
    }

    Ok(date)
}

/// Classifies a booking date: `Upcoming` when the date is today or later,
/// `Completed` otherwise.
pub fn classify(date: NaiveDate, today: NaiveDate) -> BookingStatus {
    if date >= today {
        BookingStatus::Upcoming
    } else {
        BookingStatus::Completed
    }
}

/// Renders a date for display. One-way: nothing in the service parses
/// this format back.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
