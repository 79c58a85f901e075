//! Handlers for the public contact form and the admin inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tuneshop_core::contact::ContactForm;
use tuneshop_core::error::CoreError;
use tuneshop_core::types::DbId;
use tuneshop_db::models::contact_request::{
    ContactRequestFilter, CreateContactRequest, UpdateContactRequest,
};
use tuneshop_db::repositories::ContactRequestRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::context::Client;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Acknowledgement returned to the site.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub id: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactRequest",
        id,
    })
}

/// POST /api/v1/contact
///
/// Every failing field is reported at once with a 422.
pub async fn submit_contact(
    State(state): State<AppState>,
    Client(ctx): Client,
    Json(form): Json<ContactForm>,
) -> AppResult<impl IntoResponse> {
    form.check()?;
    let form = form.normalized();

    let request = ContactRequestRepo::create(
        &state.pool,
        &CreateContactRequest {
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
            vehicle: form.vehicle,
            language: ctx.language.as_str().to_string(),
        },
    )
    .await?;

    tracing::info!(
        request_id = request.id,
        language = %request.language,
        "Contact request received",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ContactReceipt { id: request.id },
        }),
    ))
}

/// GET /api/v1/admin/contact-requests
pub async fn list_contact_requests(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Query(filter): Query<ContactRequestFilter>,
) -> AppResult<impl IntoResponse> {
    let requests = ContactRequestRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/admin/contact-requests/{id}
pub async fn get_contact_request(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = ContactRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: request }))
}

/// PUT /api/v1/admin/contact-requests/{id}
pub async fn update_contact_request(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactRequest>,
) -> AppResult<impl IntoResponse> {
    let request = ContactRequestRepo::set_handled(&state.pool, id, input.is_handled)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        request_id = id,
        is_handled = input.is_handled,
        user_id = user.user_id,
        "Contact request updated",
    );

    Ok(Json(DataResponse { data: request }))
}

/// DELETE /api/v1/admin/contact-requests/{id}
pub async fn delete_contact_request(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ContactRequestRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(request_id = id, user_id = user.user_id, "Contact request deleted");
    Ok(StatusCode::NO_CONTENT)
}
