use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::translations;
use crate::state::AppState;

/// Public routes mounted at `/translations`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{lang}", get(translations::get_dictionary))
}

/// Admin routes mounted at `/admin/translations`.
///
/// ```text
/// GET    /        -> admin_list_translations
/// PUT    /        -> upsert_translation
/// DELETE /{id}    -> delete_translation
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(translations::admin_list_translations).put(translations::upsert_translation),
        )
        .route("/{id}", delete(translations::delete_translation))
}
