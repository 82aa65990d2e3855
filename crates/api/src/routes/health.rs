use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

/// Liveness plus a database round trip. Every booking operation needs the
/// store, so an unreachable database is reported here as a degraded status
/// before a visitor runs into it.
async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(_) => "ok",
        Err(err) => {
            tracing::warn!("Health check could not reach the database: {}", err);
            "unreachable"
        }
    };

    let status = if database == "ok" { "ok" } else { "degraded" };

    Json(HealthResponse { status, database })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
