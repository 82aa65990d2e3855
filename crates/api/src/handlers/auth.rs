//! Admin login and logout.
//!
//! There is a single shared admin credential; a login attempt is verified
//! against its argon2 hash and, on success, exchanged for a persisted
//! session token carried in an HttpOnly cookie. The failure response is the
//! same whether the password was wrong or the credential has never been
//! provisioned.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use slotbook_core::{
    errors::BookingError,
    models::auth::{LoginRequest, StatusResponse},
};
use slotbook_db::repositories::{admin, session};
use uuid::Uuid;

use crate::{
    middleware::{auth::SESSION_COOKIE, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<StatusResponse>), AppError> {
    let is_valid = admin::verify_password(&state.db_pool, &payload.password)
        .await
        .map_err(BookingError::Database)?;

    if !is_valid {
        return Err(AppError(BookingError::Authentication(
            "Invalid password".to_string(),
        )));
    }

    // Opportunistic housekeeping; a failure here must not block the login
    if let Err(err) = session::purge_expired_sessions(&state.db_pool).await {
        tracing::warn!("Failed to purge expired sessions: {}", err);
    }

    let session = session::create_session(
        &state.db_pool,
        admin::ADMIN_USERNAME,
        state.session_ttl_hours,
    )
    .await
    .map_err(BookingError::Database)?;

    let cookie = Cookie::build((SESSION_COOKIE, session.token.to_string()))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json(StatusResponse::ok())))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<StatusResponse>), AppError> {
    if let Some(token) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    {
        session::delete_session(&state.db_pool, token)
            .await
            .map_err(BookingError::Database)?;
    }

    // The removal cookie must carry the same path the login cookie was set
    // with, or browsers keep the original
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((jar, Json(StatusResponse::ok())))
}
