use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create bookings table. The UNIQUE (slot, interview_date) constraint is
    // the source of truth for the no-double-booking invariant; handler-level
    // conflict checks are early exits only.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NOT NULL,
            slot VARCHAR(5) NOT NULL,
            interview_date DATE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT uniq_slot_per_date UNIQUE (slot, interview_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create admin table. A single row, provisioned out-of-band by the
    // admin-setup binary; the service only reads it.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admin (
            username VARCHAR(255) PRIMARY KEY,
            password_hash VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create admin_sessions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admin_sessions (
            token UUID PRIMARY KEY,
            username VARCHAR(255) NOT NULL REFERENCES admin(username),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_interview_date ON bookings(interview_date);
        CREATE INDEX IF NOT EXISTS idx_admin_sessions_expires_at ON admin_sessions(expires_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
