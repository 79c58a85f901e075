//! Handlers for the UI string dictionary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tuneshop_core::error::CoreError;
use tuneshop_core::i18n::{merge_dictionary, validate_key, Dictionary};
use tuneshop_core::language::{Language, DEFAULT_LANGUAGE};
use tuneshop_core::types::DbId;
use tuneshop_db::models::ui_translation::UpsertUiTranslation;
use tuneshop_db::repositories::UiTranslationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::LanguageFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Full dictionary for one language.
#[derive(Debug, Serialize)]
pub struct DictionaryView {
    pub language: Language,
    pub entries: Dictionary,
}

/// GET /api/v1/translations/{lang}
///
/// Keys missing or blank in `lang` fall back to the default language. An
/// unsupported `lang` gets the default-language dictionary.
pub async fn get_dictionary(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language = Language::parse(&lang).unwrap_or_else(|| {
        tracing::debug!(%lang, "Unsupported dictionary language, serving default");
        DEFAULT_LANGUAGE
    });

    let fallback = UiTranslationRepo::dictionary(&state.pool, DEFAULT_LANGUAGE.as_str()).await?;
    let entries = if language == DEFAULT_LANGUAGE {
        fallback
    } else {
        let localized = UiTranslationRepo::dictionary(&state.pool, language.as_str()).await?;
        merge_dictionary(fallback, localized)
    };

    Ok(Json(DataResponse {
        data: DictionaryView { language, entries },
    }))
}

/// GET /api/v1/admin/translations
pub async fn admin_list_translations(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Query(params): Query<LanguageFilterParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(code) = params.language.as_deref() {
        Language::from_code(code)?;
    }
    let rows = UiTranslationRepo::list(&state.pool, params.language.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// PUT /api/v1/admin/translations
///
/// Insert or replace one key in one language.
pub async fn upsert_translation(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<UpsertUiTranslation>,
) -> AppResult<impl IntoResponse> {
    Language::from_code(&input.language)?;
    validate_key(&input.key)?;

    let row = UiTranslationRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        language = %row.language,
        key = %row.key,
        user_id = user.user_id,
        "UI translation saved",
    );

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/admin/translations/{id}
pub async fn delete_translation(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !UiTranslationRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "UiTranslation",
            id,
        }));
    }
    tracing::info!(translation_id = id, user_id = user.user_id, "UI translation deleted");
    Ok(StatusCode::NO_CONTENT)
}
