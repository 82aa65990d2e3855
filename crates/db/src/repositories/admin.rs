use crate::models::DbAdmin;
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};

/// The single admin account name. There are no other accounts.
pub const ADMIN_USERNAME: &str = "admin";

pub async fn get_admin(pool: &Pool<Postgres>) -> Result<Option<DbAdmin>> {
    let admin = sqlx::query_as::<_, DbAdmin>(
        r#"
        SELECT username, password_hash
        FROM admin
        WHERE username = $1
        "#,
    )
    .bind(ADMIN_USERNAME)
    .fetch_optional(pool)
    .await?;

    Ok(admin)
}

/// Verifies a login attempt against the stored hash.
///
/// A missing admin row verifies as false rather than erroring, so the
/// response never reveals whether the account has been provisioned.
pub async fn verify_password(pool: &Pool<Postgres>, password: &str) -> Result<bool> {
    let admin = match get_admin(pool).await? {
        Some(admin) => admin,
        None => return Ok(false),
    };

    let parsed_hash = argon2::PasswordHash::new(&admin.password_hash)
        .map_err(|e| eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid)
}

/// Hashes and stores the admin password, creating or replacing the single
/// admin row. Called only from the admin-setup binary.
pub async fn set_admin_password(pool: &Pool<Postgres>, password: &str) -> Result<()> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    sqlx::query(
        r#"
        INSERT INTO admin (username, password_hash)
        VALUES ($1, $2)
        ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash
        "#,
    )
    .bind(ADMIN_USERNAME)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}
