//! HTTP-level tests for admin login and role enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, editor_token, get, get_auth, get_with_headers,
    idle_pool, post_json, post_json_auth, token_for,
};
use sqlx::PgPool;
use tuneshop_api::auth::password::hash_password;
use tuneshop_api::bootstrap::{ensure_admin, BootstrapAdmin};
use tuneshop_core::roles::{ROLE_ADMIN, ROLE_EDITOR};
use tuneshop_db::models::admin_user::{AdminUser, CreateAdminUser};
use tuneshop_db::repositories::AdminUserRepo;

const PASSWORD: &str = "correct-horse-battery";

async fn create_user(pool: &PgPool, username: &str, role: &str) -> AdminUser {
    let input = CreateAdminUser {
        username: username.to_string(),
        password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
    };
    AdminUserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

fn credentials(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_user(&pool, "anna", ROLE_EDITOR).await;
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/auth/login", credentials("anna", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 30 * 60);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["role"], "editor");
    assert!(json["user"].get("password_hash").is_none());

    let token = json["access_token"].as_str().unwrap();
    let me = body_json(get_auth(app, "/api/v1/auth/me", token).await).await;
    assert_eq!(me["data"]["username"], "anna");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_user(&pool, "anna", ROLE_ADMIN).await;
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/login", credentials("anna", "nope")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user_looks_like_wrong_password(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/login", credentials("ghost", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_locks_after_repeated_failures(pool: PgPool) {
    create_user(&pool, "anna", ROLE_ADMIN).await;
    let app = build_test_app(pool);

    for _ in 0..5 {
        let response =
            post_json(app.clone(), "/api/v1/auth/login", credentials("anna", "wrong")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is refused while locked.
    let response = post_json(app, "/api/v1/auth/login", credentials("anna", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_expired_lock_starts_a_fresh_failure_count(pool: PgPool) {
    let user = create_user(&pool, "anna", ROLE_ADMIN).await;
    sqlx::query(
        "UPDATE admin_users SET failed_login_count = 5, \
             locked_until = NOW() - INTERVAL '1 minute' WHERE id = $1",
    )
    .bind(user.id)
    .execute(&pool)
    .await
    .unwrap();
    let app = build_test_app(pool.clone());

    let response = post_json(app.clone(), "/api/v1/auth/login", credentials("anna", "wrong")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let row = AdminUserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(row.failed_login_count, 1);
    assert!(row.locked_until.is_none());

    let response = post_json(app, "/api/v1/auth/login", credentials("anna", PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bootstrap_admin_runs_once(pool: PgPool) {
    let admin = BootstrapAdmin {
        username: "owner".into(),
        password: "a-long-enough-password".into(),
    };

    assert!(ensure_admin(&pool, &admin).await.unwrap());
    assert!(!ensure_admin(&pool, &admin).await.unwrap());
    assert_eq!(AdminUserRepo::count(&pool).await.unwrap(), 1);

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        credentials("owner", "a-long-enough-password"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Token and role checks (rejected before any query runs)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_routes_reject_missing_token() {
    let app = build_test_app(idle_pool());

    for uri in [
        "/api/v1/admin/navigation",
        "/api/v1/admin/content",
        "/api/v1/admin/translations",
        "/api/v1/admin/contact-requests",
        "/api/v1/admin/branding",
        "/api/v1/auth/me",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn malformed_or_forged_tokens_are_rejected() {
    let app = build_test_app(idle_pool());

    let response = get_with_headers(
        app.clone(),
        "/api/v1/admin/navigation",
        &[("authorization", "Token abc")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let forged = format!("{}x", admin_token());
    let response = get_auth(app, "/api/v1/admin/navigation", &forged).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn editors_cannot_reach_admin_only_routes() {
    let app = build_test_app(idle_pool());
    let token = editor_token();

    for uri in [
        "/api/v1/admin/vehicles",
        "/api/v1/admin/branding",
        "/api/v1/admin/analytics/summary",
    ] {
        let response = get_auth(app.clone(), uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    let response = post_json_auth(
        app,
        "/api/v1/admin/vehicles",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_roles_cannot_edit_content() {
    let app = build_test_app(idle_pool());
    let token = token_for(9, "viewer");

    let response = get_auth(app, "/api/v1/admin/navigation", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
