use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub slot: String,
    pub interview_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub slot: String,
    /// Requested date in `YYYY-MM-DD` form; validated before any write.
    pub interview_date: String,
}

/// Outcome of the post-commit notification step. A failed delivery never
/// undoes the committed store mutation; it is reported here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub name: String,
    pub slot: String,
    pub interview_date: NaiveDate,
    pub notification: NotificationStatus,
}

/// A booking as shown on the admin dashboard: the canonical date plus its
/// one-way display rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminBookingEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub slot: String,
    pub interview_date: NaiveDate,
    pub display_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    pub upcoming: Vec<AdminBookingEntry>,
    pub completed: Vec<AdminBookingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    pub id: Uuid,
    pub notification: NotificationStatus,
}
