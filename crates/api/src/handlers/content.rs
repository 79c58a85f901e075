//! Handlers for editable page content.
//!
//! Public reads never fail because of stored content: a record whose JSON no
//! longer fits its slot shape is logged and replaced by the built-in default.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tuneshop_core::content::{resolve_section, validate_record, SlotContent};
use tuneshop_core::error::CoreError;
use tuneshop_core::language::Language;
use tuneshop_core::types::DbId;
use tuneshop_db::models::page_content::{CreatePageContent, PageContent, UpdatePageContent};
use tuneshop_db::repositories::PageContentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::context::Client;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Sections that always resolve, even with no record stored.
const BUILTIN_SECTIONS: [&str; 3] = ["hero", "zbox", "services"];

/// One resolved section.
#[derive(Debug, Serialize)]
pub struct SectionView {
    pub section: String,
    pub language: Language,
    pub content: SlotContent,
}

fn resolve_or_default(section: &str, record: Option<&PageContent>, lang: Language) -> SlotContent {
    match resolve_section(section, record.map(PageContent::raw), lang) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(section, error = %e, "Stored content does not fit its slot, using default");
            SlotContent::default_for(section)
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "PageContent",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/content
///
/// Every active section plus the built-in ones, keyed by section.
pub async fn list_content(
    State(state): State<AppState>,
    Client(ctx): Client,
) -> AppResult<impl IntoResponse> {
    let records = PageContentRepo::list_active(&state.pool).await?;
    let lang = ctx.language;

    let mut data: BTreeMap<String, SlotContent> = BUILTIN_SECTIONS
        .iter()
        .map(|s| (s.to_string(), SlotContent::default_for(s)))
        .collect();
    for record in &records {
        data.insert(
            record.section.clone(),
            resolve_or_default(&record.section, Some(record), lang),
        );
    }

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/content/{section}
///
/// A section with no active record resolves to its built-in default.
pub async fn get_section(
    State(state): State<AppState>,
    Client(ctx): Client,
    Path(section): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = PageContentRepo::find_active_by_section(&state.pool, &section).await?;
    let content = resolve_or_default(&section, record.as_ref(), ctx.language);

    Ok(Json(DataResponse {
        data: SectionView {
            section,
            language: ctx.language,
            content,
        },
    }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/content
pub async fn admin_list_content(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = PageContentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/admin/content/{id}
pub async fn get_content_record(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = PageContentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: record }))
}

/// POST /api/v1/admin/content
pub async fn create_content_record(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreatePageContent>,
) -> AppResult<impl IntoResponse> {
    validate_record(&input.section, &input.content, &input.translations)?;

    let record = PageContentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        record_id = record.id,
        section = %record.section,
        user_id = user.user_id,
        "Content record created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/admin/content/{id}
///
/// The result of the patch is validated against the record's slot shape
/// before anything is written.
pub async fn update_content_record(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePageContent>,
) -> AppResult<impl IntoResponse> {
    let existing = PageContentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    validate_record(
        &existing.section,
        input.content.as_ref().unwrap_or(&existing.content),
        input.translations.as_ref().unwrap_or(&existing.translations),
    )?;

    let record = PageContentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        record_id = id,
        section = %record.section,
        user_id = user.user_id,
        "Content record updated",
    );

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/admin/content/{id}
///
/// The section falls back to its built-in default afterwards.
pub async fn delete_content_record(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PageContentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(record_id = id, user_id = user.user_id, "Content record deleted");
    Ok(StatusCode::NO_CONTENT)
}
