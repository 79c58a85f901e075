//! Handlers for header navigation.
//!
//! The public list resolves each label for the visitor's language; the admin
//! endpoints work on raw rows, including the drag-and-drop reorder.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tuneshop_core::content::{resolve_localized, validate_translation_map, NavLabel};
use tuneshop_core::error::CoreError;
use tuneshop_core::language::Language;
use tuneshop_core::navigation::sort_for_display;
use tuneshop_core::types::DbId;
use tuneshop_db::models::navigation::{
    CreateNavigationItem, NavigationItem, ReorderRequest, UpdateNavigationItem,
};
use tuneshop_db::repositories::NavigationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::context::Client;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// A navigation item as shown on the site.
#[derive(Debug, Serialize)]
pub struct NavigationView {
    pub id: DbId,
    pub label: String,
    pub href: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

impl NavigationView {
    fn localized(item: NavigationItem, lang: Language) -> Self {
        let resolved = resolve_localized(&item.label_text(), &item.translations, lang);
        Self {
            id: item.id,
            label: resolved.label.unwrap_or(item.label),
            href: item.href,
            icon: item.icon,
            sort_order: item.sort_order,
        }
    }
}

fn check_label_translations(translations: Option<&Value>) -> Result<(), CoreError> {
    let Some(translations) = translations else {
        return Ok(());
    };
    validate_translation_map(translations, |value| {
        serde_json::from_value::<NavLabel>(value.clone())
            .map(|_| ())
            .map_err(|e| CoreError::Validation(format!("Invalid label translation: {e}")))
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "NavigationItem",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/navigation
pub async fn list_navigation(
    State(state): State<AppState>,
    Client(ctx): Client,
) -> AppResult<impl IntoResponse> {
    let mut items = NavigationRepo::list_active(&state.pool).await?;
    sort_for_display(&mut items);

    let data: Vec<NavigationView> = items
        .into_iter()
        .map(|item| NavigationView::localized(item, ctx.language))
        .collect();

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/navigation
pub async fn admin_list_navigation(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = NavigationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/admin/navigation/{id}
pub async fn get_navigation_item(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = NavigationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/admin/navigation
pub async fn create_navigation_item(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateNavigationItem>,
) -> AppResult<impl IntoResponse> {
    if input.label.trim().is_empty() || input.href.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "label and href must not be empty".into(),
        )));
    }
    check_label_translations(input.translations.as_ref())?;

    let item = NavigationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        item_id = item.id,
        label = %item.label,
        user_id = user.user_id,
        "Navigation item created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/admin/navigation/{id}
pub async fn update_navigation_item(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNavigationItem>,
) -> AppResult<impl IntoResponse> {
    if input.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "label must not be empty".into(),
        )));
    }
    check_label_translations(input.translations.as_ref())?;

    let item = NavigationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(item_id = id, user_id = user.user_id, "Navigation item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/admin/navigation/{id}
pub async fn delete_navigation_item(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !NavigationRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(item_id = id, user_id = user.user_id, "Navigation item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/navigation/reorder
///
/// Body is the full id list in the new order. Either every row gets its new
/// `sort_order` or none does.
pub async fn reorder_navigation(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let plan = NavigationRepo::reorder(&state.pool, &input.ids).await?;

    tracing::info!(
        count = plan.len(),
        user_id = user.user_id,
        "Navigation reordered",
    );

    Ok(Json(DataResponse { data: plan }))
}
