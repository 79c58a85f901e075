//! `GET /health`, mounted at the root next to `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be reached.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `database` or `static`. A static catalog keeps the power checker
    /// answering while the database is down.
    pub vehicle_source: &'static str,
    pub geolocation_enabled: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match tuneshop_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        vehicle_source: state.vehicles.name(),
        geolocation_enabled: state.config.geolocation_url.is_some(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
