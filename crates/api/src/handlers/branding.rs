//! Handlers for site branding colors.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tuneshop_core::branding::{BrandColors, BRANDING_SETTING_KEY};
use tuneshop_db::repositories::SiteSettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Stored colors next to the colors the site actually uses.
#[derive(Debug, Serialize)]
pub struct BrandingView {
    pub stored: Option<BrandColors>,
    pub effective: BrandColors,
}

async fn load_stored(state: &AppState) -> AppResult<Option<BrandColors>> {
    let Some(setting) = SiteSettingRepo::get(&state.pool, BRANDING_SETTING_KEY).await? else {
        return Ok(None);
    };
    match serde_json::from_value::<BrandColors>(setting.value) {
        Ok(colors) => Ok(Some(colors)),
        Err(e) => {
            tracing::warn!(error = %e, "Stored branding is malformed, using built-in colors");
            Ok(None)
        }
    }
}

/// GET /api/v1/branding
pub async fn get_branding(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stored = load_stored(&state).await?;
    Ok(Json(DataResponse {
        data: BrandColors::with_defaults(stored.as_ref()),
    }))
}

/// GET /api/v1/admin/branding
pub async fn admin_get_branding(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stored = load_stored(&state).await?;
    let effective = BrandColors::with_defaults(stored.as_ref());
    Ok(Json(DataResponse {
        data: BrandingView { stored, effective },
    }))
}

/// PUT /api/v1/admin/branding
///
/// Replaces the stored colors. Omitted or blank colors use the built-in value.
pub async fn update_branding(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<BrandColors>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let value = serde_json::to_value(&input)
        .map_err(|e| AppError::InternalError(format!("Failed to encode branding: {e}")))?;
    SiteSettingRepo::upsert(&state.pool, BRANDING_SETTING_KEY, &value).await?;

    tracing::info!(user_id = admin.user_id, "Branding colors updated");

    let effective = BrandColors::with_defaults(Some(&input));
    Ok(Json(DataResponse {
        data: BrandingView {
            stored: Some(input),
            effective,
        },
    }))
}
