use crate::models::DbAdminSession;
use chrono::{Duration, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Creates a session for an authenticated admin and returns it. The token
/// is the credential the browser carries; it is validated on every
/// protected request rather than held in ambient server state.
pub async fn create_session(
    pool: &Pool<Postgres>,
    username: &str,
    ttl_hours: i64,
) -> Result<DbAdminSession> {
    let token = Uuid::new_v4();
    let now = Utc::now();
    let expires_at = now + Duration::hours(ttl_hours);

    tracing::debug!("Creating admin session: token={}, expires_at={}", token, expires_at);

    let session = sqlx::query_as::<_, DbAdminSession>(
        r#"
        INSERT INTO admin_sessions (token, username, created_at, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING token, username, created_at, expires_at
        "#,
    )
    .bind(token)
    .bind(username)
    .bind(now)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

/// Looks up a session, returning `None` for unknown or expired tokens.
pub async fn get_valid_session(
    pool: &Pool<Postgres>,
    token: Uuid,
) -> Result<Option<DbAdminSession>> {
    let session = sqlx::query_as::<_, DbAdminSession>(
        r#"
        SELECT token, username, created_at, expires_at
        FROM admin_sessions
        WHERE token = $1 AND expires_at > NOW()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn delete_session(pool: &Pool<Postgres>, token: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM admin_sessions
        WHERE token = $1
        "#,
    )
    .bind(token)
    .execute(pool)
    .await?;

    Ok(())
}

/// Removes expired sessions. Run opportunistically at login time.
pub async fn purge_expired_sessions(pool: &Pool<Postgres>) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM admin_sessions
        WHERE expires_at <= NOW()
        "#,
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
