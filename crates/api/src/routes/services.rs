use axum::routing::{get, put};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Public routes mounted at `/services`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(services::list_services))
}

/// Admin routes mounted at `/admin/services`.
///
/// ```text
/// GET    /          -> admin_list_services
/// POST   /          -> create_service
/// PUT    /reorder   -> reorder_services
/// GET    /{id}      -> get_service
/// PUT    /{id}      -> update_service
/// DELETE /{id}      -> delete_service
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(services::admin_list_services).post(services::create_service),
        )
        .route("/reorder", put(services::reorder_services))
        .route(
            "/{id}",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
}
