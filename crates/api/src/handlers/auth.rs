//! Handlers for the `/auth` resource (admin login).

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tuneshop_core::error::CoreError;
use tuneshop_db::models::admin_user::AdminUserResponse;
use tuneshop_db::repositories::AdminUserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: AdminUserResponse,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and receive a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = AdminUserRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let mut failed_before = user.failed_login_count;
    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
        // The lock has run out; the next attempt starts a fresh count.
        AdminUserRepo::clear_expired_lock(&state.pool, user.id).await?;
        failed_before = 0;
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        AdminUserRepo::increment_failed_login(&state.pool, user.id).await?;

        let new_count = failed_before + 1;
        if new_count >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            AdminUserRepo::lock_account(&state.pool, user.id, lock_until).await?;
            tracing::warn!(user_id = user.id, "Admin account locked after failed logins");
        }

        return Err(invalid_credentials());
    }

    AdminUserRepo::record_successful_login(&state.pool, user.id).await?;

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "Admin logged in");

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: jwt.expires_in_secs(),
        user: AdminUserResponse::from(&user),
    }))
}

/// GET /api/v1/auth/me
///
/// The account behind the presented token.
pub async fn me(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<AdminUserResponse>>> {
    let row = AdminUserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdminUser",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: AdminUserResponse::from(&row),
    }))
}
