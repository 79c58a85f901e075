use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Public routes mounted at `/contact`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact::submit_contact))
}

/// Admin inbox routes mounted at `/admin/contact-requests`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list_contact_requests))
        .route(
            "/{id}",
            get(contact::get_contact_request)
                .put(contact::update_contact_request)
                .delete(contact::delete_contact_request),
        )
}
