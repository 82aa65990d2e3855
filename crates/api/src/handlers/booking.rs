//! Public booking submission.
//!
//! A submission passes two checkpoints before any write: the slot label must
//! belong to the grid and the date must be a well-formed, non-past
//! `YYYY-MM-DD`. The conflict pre-check is an early exit only; the unique
//! constraint on `(slot, interview_date)` decides the race, surfaced here as
//! a `None` insert result.

use axum::{extract::State, Json};
use chrono::Local;
use std::sync::Arc;
use slotbook_core::{
    dates,
    errors::BookingError,
    models::booking::{CreateBookingRequest, CreateBookingResponse, NotificationStatus},
    slots,
};
use slotbook_mailer::{messages, Mailer as _};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    // Checkpoint 1: the slot must be one of the grid labels
    if !slots::is_grid_slot(&payload.slot) {
        return Err(AppError(BookingError::Validation(
            "Unknown slot".to_string(),
        )));
    }

    // Checkpoint 2: well-formed date, not in the past
    let today = Local::now().date_naive();
    let interview_date = dates::validate_booking_date(&payload.interview_date, today)?;

    // Early-exit conflict check; the insert below is the source of truth
    let existing = slotbook_db::repositories::booking::get_booking_by_slot_and_date(
        &state.db_pool,
        &payload.slot,
        interview_date,
    )
    .await
    .map_err(BookingError::Database)?;

    if existing.is_some() {
        return Err(AppError(BookingError::Conflict(
            "Slot already booked for this date".to_string(),
        )));
    }

    // Atomic conditional insert; a lost race comes back as None
    let created = slotbook_db::repositories::booking::create_booking(
        &state.db_pool,
        &payload.name,
        &payload.email,
        &payload.phone,
        &payload.slot,
        interview_date,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::Conflict("Slot already booked for this date".to_string())
    })?;

    // The booking is committed from here on. A failed confirmation email is
    // reported in the response, never used to undo the insert.
    let notice = messages::confirmation(
        &created.name,
        &dates::display_date(created.interview_date),
        &created.slot,
    );
    let notification = match state
        .mailer
        .send(&created.email, &notice.subject, &notice.body)
        .await
    {
        Ok(()) => NotificationStatus::Sent,
        Err(err) => {
            tracing::warn!(
                "Confirmation email to {} failed: {}",
                created.email,
                err
            );
            NotificationStatus::Failed
        }
    };

    let response = CreateBookingResponse {
        id: created.id,
        name: created.name,
        slot: created.slot,
        interview_date: created.interview_date,
        notification,
    };

    Ok(Json(response))
}
