//! # Session Authentication
//!
//! Admin authentication for the dashboard endpoints. A successful login
//! creates a persisted session row and hands the browser its token in an
//! HttpOnly cookie; every protected request re-validates that token against
//! the session store. Handlers receive an explicit [`AdminContext`] argument
//! instead of consulting any ambient logged-in flag.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use slotbook_core::errors::BookingError;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Name of the session cookie issued at login.
pub const SESSION_COOKIE: &str = "slotbook_session";

/// Proof of an authenticated admin request.
///
/// Constructed only by the extractor below, so a handler taking an
/// `AdminContext` parameter cannot run without a valid session.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub username: String,
    pub token: Uuid,
}

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for AdminContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        // Missing, non-UUID, unknown, and expired tokens all get the same
        // generic rejection.
        let token = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .ok_or_else(|| {
                AppError(BookingError::Authentication("Admin login required".to_string()))
            })?;

        let session = slotbook_db::repositories::session::get_valid_session(&state.db_pool, token)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                AppError(BookingError::Authentication("Admin login required".to_string()))
            })?;

        Ok(AdminContext {
            username: session.username,
            token: session.token,
        })
    }
}
