//! Role gates for admin handlers.
//!
//! [`RequireEditor`] guards content editing; [`RequireAdmin`] guards the
//! power-checker data, branding and analytics. Both answer 401 for a missing
//! or bad token and 403 for a role that lacks the permission.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tuneshop_core::error::CoreError;
use tuneshop_core::roles::AdminRole;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    permits: fn(AdminRole) -> bool,
    denied: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    match user.role {
        Some(role) if permits(role) => Ok(user),
        _ => Err(AppError::Core(CoreError::Forbidden(denied.into()))),
    }
}

pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, AdminRole::can_manage_site, "Admin role required")
            .await
            .map(RequireAdmin)
    }
}

pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(
            parts,
            state,
            AdminRole::can_edit_content,
            "Editor or admin role required",
        )
        .await
        .map(RequireEditor)
    }
}
