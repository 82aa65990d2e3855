use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        // Path kept from the original public interface
        .route(
            "/get_available_slots",
            get(handlers::availability::get_available_slots),
        )
        .route(
            "/api/booking_window",
            get(handlers::availability::booking_window),
        )
}
