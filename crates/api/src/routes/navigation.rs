use axum::routing::{get, put};
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Public routes mounted at `/navigation`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(navigation::list_navigation))
}

/// Admin routes mounted at `/admin/navigation`.
///
/// ```text
/// GET    /          -> admin_list_navigation
/// POST   /          -> create_navigation_item
/// PUT    /reorder   -> reorder_navigation
/// GET    /{id}      -> get_navigation_item
/// PUT    /{id}      -> update_navigation_item
/// DELETE /{id}      -> delete_navigation_item
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(navigation::admin_list_navigation).post(navigation::create_navigation_item),
        )
        .route("/reorder", put(navigation::reorder_navigation))
        .route(
            "/{id}",
            get(navigation::get_navigation_item)
                .put(navigation::update_navigation_item)
                .delete(navigation::delete_navigation_item),
        )
}
