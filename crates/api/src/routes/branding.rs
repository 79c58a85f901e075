use axum::routing::get;
use axum::Router;

use crate::handlers::branding;
use crate::state::AppState;

/// Public routes mounted at `/branding`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(branding::get_branding))
}

/// Admin routes mounted at `/admin/branding`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(branding::admin_get_branding).put(branding::update_branding),
    )
}
