//! Bearer-token authentication for the admin API.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tuneshop_core::error::CoreError;
use tuneshop_core::roles::AdminRole;
use tuneshop_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The admin account behind a valid access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    /// `None` when the token names a role this server does not know.
    pub role: Option<AdminRole>,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

/// Token part of `Authorization: Bearer <token>`. The scheme is matched
/// case-insensitively.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let value = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>",
        )),
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let role = AdminRole::from_name(&claims.role);
        if role.is_none() {
            tracing::warn!(user_id = claims.sub, role = %claims.role, "Token carries unknown role");
        }

        Ok(AuthUser {
            user_id: claims.sub,
            role,
        })
    }
}
