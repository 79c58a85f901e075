use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Public routes mounted at `/content`.
///
/// ```text
/// GET /            -> list_content
/// GET /{section}   -> get_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list_content))
        .route("/{section}", get(content::get_section))
}

/// Admin routes mounted at `/admin/content`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(content::admin_list_content).post(content::create_content_record),
        )
        .route(
            "/{id}",
            get(content::get_content_record)
                .put(content::update_content_record)
                .delete(content::delete_content_record),
        )
}
