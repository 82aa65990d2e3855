//! Admin dashboard: booking review and cancellation.
//!
//! Both handlers require an [`AdminContext`], so they never run without a
//! validated session. Classification into upcoming/completed happens on the
//! canonical `NaiveDate`; the display string is rendered once per row and
//! never parsed back.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use std::sync::Arc;
use slotbook_core::{
    dates::{self, BookingStatus},
    errors::BookingError,
    models::booking::{
        AdminBookingEntry, CancelBookingResponse, ListBookingsResponse, NotificationStatus,
    },
};
use slotbook_db::repositories::booking;
use slotbook_mailer::{messages, Mailer as _};
use uuid::Uuid;

use crate::{
    middleware::{auth::AdminContext, error_handling::AppError},
    ApiState,
};

/// `GET /api/admin/bookings`
///
/// All bookings ordered by date then slot, partitioned relative to today.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    _admin: AdminContext,
) -> Result<Json<ListBookingsResponse>, AppError> {
    let bookings = booking::list_bookings(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    let today = Local::now().date_naive();
    let mut upcoming = Vec::new();
    let mut completed = Vec::new();

    for row in bookings {
        let entry = AdminBookingEntry {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            slot: row.slot,
            interview_date: row.interview_date,
            display_date: dates::display_date(row.interview_date),
        };

        match dates::classify(entry.interview_date, today) {
            BookingStatus::Upcoming => upcoming.push(entry),
            BookingStatus::Completed => completed.push(entry),
        }
    }

    Ok(Json(ListBookingsResponse { upcoming, completed }))
}

/// `DELETE /api/admin/bookings/:id`
///
/// Cancels a booking and notifies the original requester. The deletion is
/// committed before the notice goes out; a delivery failure leaves the
/// cancellation in place and is reported in the response.
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    _admin: AdminContext,
    Path(id): Path<Uuid>,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let row = booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    // The delete reports whether the row still existed, so a cancellation
    // racing another one surfaces as not-found instead of succeeding twice.
    let removed = booking::delete_booking(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !removed {
        return Err(AppError(BookingError::NotFound(format!(
            "Booking with ID {} not found",
            id
        ))));
    }

    let notice = messages::cancellation(
        &row.name,
        &dates::display_date(row.interview_date),
        &row.slot,
    );
    let notification = match state
        .mailer
        .send(&row.email, &notice.subject, &notice.body)
        .await
    {
        Ok(()) => NotificationStatus::Sent,
        Err(err) => {
            tracing::warn!("Cancellation email to {} failed: {}", row.email, err);
            NotificationStatus::Failed
        }
    };

    Ok(Json(CancelBookingResponse { id, notification }))
}
