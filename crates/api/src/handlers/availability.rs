//! Per-date availability view.
//!
//! The view is recomputed from the grid and the booked slots on every
//! request; nothing is cached. Missing or malformed dates are rejected with
//! a 400 before any database work.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Duration, Local};
use serde::Deserialize;
use std::sync::Arc;
use slotbook_core::{
    dates,
    errors::BookingError,
    models::availability::{availability, AvailabilityResponse, BookingWindowResponse},
    slots,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the available-slots endpoint
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Requested date in `YYYY-MM-DD` form
    pub date: Option<String>,
}

/// `GET /get_available_slots?date=YYYY-MM-DD`
///
/// Returns every grid slot tagged with whether it is still free on the
/// requested date.
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let raw_date = query.date.ok_or_else(|| {
        AppError(BookingError::Validation("Date is required".to_string()))
    })?;

    let date = dates::parse_iso_date(&raw_date)?;

    let grid = slots::slot_grid();
    let booked = slotbook_db::repositories::booking::get_booked_slots(&state.db_pool, date)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(AvailabilityResponse {
        slots: availability(&grid, &booked),
    }))
}

/// `GET /api/booking_window`
///
/// Date range hints for the booking form: today as the default and a
/// 90-day horizon as the maximum.
#[axum::debug_handler]
pub async fn booking_window(
    State(_state): State<Arc<ApiState>>,
) -> Json<BookingWindowResponse> {
    let today = Local::now().date_naive();

    Json(BookingWindowResponse {
        default_date: today,
        max_date: today + Duration::days(90),
    })
}
