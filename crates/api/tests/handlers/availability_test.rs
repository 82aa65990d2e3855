use axum::Json;
use mockall::predicate;
use pretty_assertions::assert_eq;
use slotbook_core::{
    dates,
    errors::BookingError,
    models::availability::{availability, AvailabilityResponse},
    slots,
};

use crate::test_utils::{date, TestContext};
use slotbook_api::middleware::error_handling::AppError;

// Mirrors the get_available_slots handler: reject missing/malformed dates
// before any store access, then tag the grid with the booked slots.
async fn test_get_available_slots_wrapper(
    ctx: &mut TestContext,
    raw_date: Option<String>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let raw_date = raw_date.ok_or_else(|| {
        AppError(BookingError::Validation("Date is required".to_string()))
    })?;

    let parsed = dates::parse_iso_date(&raw_date)?;

    let grid = slots::slot_grid();
    let booked = ctx.booking_repo.get_booked_slots(parsed).await?;

    Ok(Json(AvailabilityResponse {
        slots: availability(&grid, &booked),
    }))
}

#[tokio::test]
async fn test_missing_date_is_rejected() {
    // No expectations: the store must not be touched
    let mut ctx = TestContext::new();

    let err = test_get_available_slots_wrapper(&mut ctx, None)
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let mut ctx = TestContext::new();

    let err = test_get_available_slots_wrapper(&mut ctx, Some("10/06/2025".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_booked_slots_are_unavailable() {
    let mut ctx = TestContext::new();
    let queried = date(2025, 6, 10);

    ctx.booking_repo
        .expect_get_booked_slots()
        .with(predicate::eq(queried))
        .returning(|_| Ok(vec!["08:00".to_string(), "12:00".to_string()]));

    let response = test_get_available_slots_wrapper(&mut ctx, Some("2025-06-10".to_string()))
        .await
        .expect("availability query should succeed");

    let view = &response.0.slots;
    assert_eq!(view.len(), 12);

    let by_time = |time: &str| {
        view.iter()
            .find(|entry| entry.time == time)
            .unwrap_or_else(|| panic!("slot {time} missing from view"))
    };

    assert!(!by_time("08:00").available);
    assert!(!by_time("12:00").available);
    assert!(by_time("08:40").available);
    assert!(by_time("15:20").available);
}

#[tokio::test]
async fn test_empty_date_has_full_availability() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_get_booked_slots()
        .returning(|_| Ok(Vec::new()));

    let response = test_get_available_slots_wrapper(&mut ctx, Some("2025-06-10".to_string()))
        .await
        .expect("availability query should succeed");

    assert!(response.0.slots.iter().all(|entry| entry.available));
}
