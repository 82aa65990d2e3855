use crate::models::DbBooking;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a booking, atomically enforcing slot uniqueness per date.
///
/// Returns `None` when another booking already holds `(slot, interview_date)`;
/// the unique constraint decides, so two concurrent submissions for the same
/// pair cannot both succeed.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    phone: &str,
    slot: &str,
    interview_date: NaiveDate,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, slot={}, date={}",
        id,
        slot,
        interview_date
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, name, email, phone, slot, interview_date, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (slot, interview_date) DO NOTHING
        RETURNING id, name, email, phone, slot, interview_date, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(slot)
    .bind(interview_date)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if booking.is_some() {
        tracing::debug!("Booking created successfully: id={}", id);
    } else {
        tracing::debug!(
            "Booking insert lost to existing row: slot={}, date={}",
            slot,
            interview_date
        );
    }

    Ok(booking)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    tracing::debug!("Getting booking by id: {}", id);

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, name, email, phone, slot, interview_date, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn get_booking_by_slot_and_date(
    pool: &Pool<Postgres>,
    slot: &str,
    interview_date: NaiveDate,
) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, name, email, phone, slot, interview_date, created_at
        FROM bookings
        WHERE slot = $1 AND interview_date = $2
        "#,
    )
    .bind(slot)
    .bind(interview_date)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Slot labels already reserved on a date, for the availability view.
pub async fn get_booked_slots(
    pool: &Pool<Postgres>,
    interview_date: NaiveDate,
) -> Result<Vec<String>> {
    let slots = sqlx::query_scalar::<_, String>(
        r#"
        SELECT slot
        FROM bookings
        WHERE interview_date = $1
        "#,
    )
    .bind(interview_date)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, name, email, phone, slot, interview_date, created_at
        FROM bookings
        ORDER BY interview_date ASC, slot ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Deletes a booking by id. Returns whether a row was actually removed, so
/// a cancellation that races another one reports not-found instead of
/// silently succeeding twice.
pub async fn delete_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting booking: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
