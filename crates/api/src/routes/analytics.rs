use axum::routing::{get, post};
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Public routes mounted at `/analytics`.
pub fn router() -> Router<AppState> {
    Router::new().route("/events", post(analytics::record_event))
}

/// Admin routes mounted at `/admin/analytics`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/summary", get(analytics::summary))
}
