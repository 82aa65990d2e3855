//! Notice templates for the two notification kinds the service sends.

/// A rendered notice, ready to hand to a `Mailer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub subject: String,
    pub body: String,
}

/// Confirmation sent to the requester right after their booking commits.
///
/// `display_date` is the human-readable rendering produced at the
/// presentation boundary, e.g. "Tuesday, June 10, 2025".
pub fn confirmation(name: &str, display_date: &str, slot: &str) -> Notice {
    Notice {
        subject: "Interview Slot Confirmation".to_string(),
        body: format!(
            "Hello {name},\n\nYour interview is scheduled on {display_date} at {slot}.\n\nBest of luck!"
        ),
    }
}

/// Notice sent to the original requester when an admin cancels their booking.
pub fn cancellation(name: &str, display_date: &str, slot: &str) -> Notice {
    Notice {
        subject: "Interview Slot Cancelled".to_string(),
        body: format!(
            "Hello {name},\n\nYour interview scheduled on {display_date} at {slot} has been cancelled by the admin.\nIf you have any questions, please contact us."
        ),
    }
}
