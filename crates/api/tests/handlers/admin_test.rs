use axum::Json;
use chrono::NaiveDate;
use mockall::predicate;
use pretty_assertions::assert_eq;
use slotbook_core::{
    dates::{self, BookingStatus},
    errors::BookingError,
    models::booking::{
        AdminBookingEntry, CancelBookingResponse, ListBookingsResponse, NotificationStatus,
    },
};
use slotbook_mailer::{messages, Mailer as _};
use uuid::Uuid;

use crate::test_utils::{date, db_booking, TestContext};
use slotbook_api::middleware::error_handling::AppError;

// Mirrors list_bookings: partition the ordered rows around `today` on the
// canonical date, rendering the display string exactly once.
async fn test_list_bookings_wrapper(
    ctx: &mut TestContext,
    today: NaiveDate,
) -> Result<Json<ListBookingsResponse>, AppError> {
    let bookings = ctx.booking_repo.list_bookings().await?;

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

// Mirrors cancel_booking: lookup, delete, then best-effort notice.
async fn test_cancel_booking_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let row = ctx
        .booking_repo
        .get_booking_by_id(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    let removed = ctx.booking_repo.delete_booking(id).await?;
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
    let notification = match ctx
        .mailer
        .send(&row.email, &notice.subject, &notice.body)
        .await
    {
        Ok(()) => NotificationStatus::Sent,
        Err(_) => NotificationStatus::Failed,
    };

    Ok(Json(CancelBookingResponse { id, notification }))
}

#[tokio::test]
async fn test_listing_splits_upcoming_and_completed() {
    let mut ctx = TestContext::new();
    let today = date(2025, 6, 10);

    // One booking yesterday, one tomorrow, one today
    ctx.booking_repo.expect_list_bookings().returning(move || {
        Ok(vec![
            db_booking("08:00", date(2025, 6, 9)),
            db_booking("08:40", date(2025, 6, 10)),
            db_booking("09:20", date(2025, 6, 11)),
        ])
    });

    let response = test_list_bookings_wrapper(&mut ctx, today)
        .await
        .expect("listing should succeed");

    let listing = response.0;
    assert_eq!(listing.completed.len(), 1);
    assert_eq!(listing.completed[0].interview_date, date(2025, 6, 9));

    // Today's booking counts as upcoming
    assert_eq!(listing.upcoming.len(), 2);
    assert_eq!(listing.upcoming[0].interview_date, date(2025, 6, 10));
    assert_eq!(listing.upcoming[1].interview_date, date(2025, 6, 11));
}

#[tokio::test]
async fn test_listing_renders_display_dates() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_list_bookings()
        .returning(|| Ok(vec![db_booking("08:00", date(2025, 6, 10))]));

    let response = test_list_bookings_wrapper(&mut ctx, date(2025, 6, 1))
        .await
        .expect("listing should succeed");

    assert_eq!(
        response.0.upcoming[0].display_date,
        "Tuesday, June 10, 2025"
    );
}

#[tokio::test]
async fn test_cancel_unknown_id_is_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    // delete_booking has no expectation: nothing may be deleted
    ctx.booking_repo
        .expect_get_booking_by_id()
        .with(predicate::eq(id))
        .returning(|_| Ok(None));

    let err = test_cancel_booking_wrapper(&mut ctx, id).await.unwrap_err();
    assert!(matches!(err.0, BookingError::NotFound(_)));
}

#[tokio::test]
async fn test_cancel_deletes_and_notifies() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.booking_repo
        .expect_get_booking_by_id()
        .with(predicate::eq(id))
        .returning(|_| Ok(Some(db_booking("08:00", date(2025, 6, 10)))));

    ctx.booking_repo
        .expect_delete_booking()
        .with(predicate::eq(id))
        .returning(|_| Ok(true));

    ctx.mailer
        .expect_send()
        .withf(|recipient, subject, body| {
            recipient == "ada@example.com"
                && subject == "Interview Slot Cancelled"
                && body.contains("Tuesday, June 10, 2025")
                && body.contains("08:00")
        })
        .returning(|_, _, _| Ok(()));

    let response = test_cancel_booking_wrapper(&mut ctx, id)
        .await
        .expect("cancellation should succeed");

    assert_eq!(response.0.id, id);
    assert_eq!(response.0.notification, NotificationStatus::Sent);
}

#[tokio::test]
async fn test_cancel_stands_when_mail_fails() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.booking_repo
        .expect_get_booking_by_id()
        .returning(|_| Ok(Some(db_booking("08:00", date(2025, 6, 10)))));

    ctx.booking_repo
        .expect_delete_booking()
        .returning(|_| Ok(true));

    ctx.mailer
        .expect_send()
        .returning(|_, _, _| Err(eyre::eyre!("SMTP timeout")));

    // Deletion already committed; the failure only degrades the status
    let response = test_cancel_booking_wrapper(&mut ctx, id)
        .await
        .expect("cancellation should still succeed");

    assert_eq!(response.0.notification, NotificationStatus::Failed);
}

#[tokio::test]
async fn test_cancel_racing_delete_reports_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    // The row vanishes between lookup and delete
    ctx.booking_repo
        .expect_get_booking_by_id()
        .returning(|_| Ok(Some(db_booking("08:00", date(2025, 6, 10)))));

    ctx.booking_repo
        .expect_delete_booking()
        .returning(|_| Ok(false));

    let err = test_cancel_booking_wrapper(&mut ctx, id).await.unwrap_err();
    assert!(matches!(err.0, BookingError::NotFound(_)));
}
