//! Handlers for service cards.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tuneshop_core::content::{resolve_localized, validate_translation_map, ServiceText};
use tuneshop_core::error::CoreError;
use tuneshop_core::language::Language;
use tuneshop_core::navigation::sort_for_display;
use tuneshop_core::types::DbId;
use tuneshop_db::models::navigation::ReorderRequest;
use tuneshop_db::models::service::{CreateService, Service, UpdateService};
use tuneshop_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::context::Client;
use crate::middleware::rbac::RequireEditor;
use crate::query::CategoryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A service card as shown on the site.
#[derive(Debug, Serialize)]
pub struct ServiceView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: Option<String>,
    pub features: Vec<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub sort_order: i32,
}

impl ServiceView {
    fn localized(service: Service, lang: Language) -> Self {
        let text = resolve_localized(&service.text(), &service.translations, lang);
        Self {
            id: service.id,
            title: text.title.unwrap_or(service.title),
            description: text.description.unwrap_or(service.description),
            price: text.price,
            features: text.features.unwrap_or(service.features),
            icon: service.icon,
            category: service.category,
            sort_order: service.sort_order,
        }
    }
}

fn check_text_translations(translations: Option<&Value>) -> Result<(), CoreError> {
    let Some(translations) = translations else {
        return Ok(());
    };
    validate_translation_map(translations, |value| {
        serde_json::from_value::<ServiceText>(value.clone())
            .map(|_| ())
            .map_err(|e| CoreError::Validation(format!("Invalid service translation: {e}")))
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Service",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/services
///
/// Active services in display order, optionally filtered by `?category=`.
pub async fn list_services(
    State(state): State<AppState>,
    Client(ctx): Client,
    Query(params): Query<CategoryParams>,
) -> AppResult<impl IntoResponse> {
    let category = params.category.as_deref().filter(|c| !c.trim().is_empty());
    let mut services = ServiceRepo::list_active(&state.pool, category).await?;
    sort_for_display(&mut services);

    let data: Vec<ServiceView> = services
        .into_iter()
        .map(|s| ServiceView::localized(s, ctx.language))
        .collect();

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/services
pub async fn admin_list_services(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// GET /api/v1/admin/services/{id}
pub async fn get_service(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/admin/services
pub async fn create_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    check_text_translations(input.translations.as_ref())?;

    let service = ServiceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        service_id = service.id,
        title = %service.title,
        user_id = user.user_id,
        "Service created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PUT /api/v1/admin/services/{id}
pub async fn update_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<impl IntoResponse> {
    if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    check_text_translations(input.translations.as_ref())?;

    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(service_id = id, user_id = user.user_id, "Service updated");

    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/v1/admin/services/{id}
pub async fn delete_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(service_id = id, user_id = user.user_id, "Service deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/services/reorder
pub async fn reorder_services(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let plan = ServiceRepo::reorder(&state.pool, &input.ids).await?;

    tracing::info!(count = plan.len(), user_id = user.user_id, "Services reordered");

    Ok(Json(DataResponse { data: plan }))
}
