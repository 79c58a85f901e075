//! HTTP-level tests for the power-checker cascade.
//!
//! The static catalog source answers without touching the database, so
//! these run against an idle pool. Database-backed parity is covered by the
//! `sqlx::test` cases at the bottom.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, build_test_app_with, get, idle_pool,
    post_json_auth, put_json_auth, static_catalog,
};
use sqlx::PgPool;

fn app() -> axum::Router {
    build_test_app_with(idle_pool(), static_catalog())
}

// ---------------------------------------------------------------------------
// Static catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn brands_are_sorted_per_type() {
    let response = get(app(), "/api/v1/vehicles/car/brands").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!(["Audi", "BMW"]));

    let json = body_json(get(app(), "/api/v1/vehicles/truck/brands").await).await;
    assert_eq!(json["data"], serde_json::json!(["Volvo"]));
}

#[tokio::test]
async fn unknown_type_gives_empty_list() {
    let response = get(app(), "/api/v1/vehicles/boat/brands").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn cascade_narrows_each_level() {
    let json = body_json(get(app(), "/api/v1/vehicles/car/BMW/models").await).await;
    assert_eq!(json["data"], serde_json::json!(["320d"]));

    let json = body_json(get(app(), "/api/v1/vehicles/car/BMW/320d/generations").await).await;
    assert_eq!(json["data"], serde_json::json!(["F30", "G20"]));

    let json = body_json(get(app(), "/api/v1/vehicles/car/BMW/320d/F30/engines").await).await;
    assert_eq!(json["data"], serde_json::json!(["2.0d"]));

    let json = body_json(get(app(), "/api/v1/vehicles/car/Lada/models").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn power_includes_stage_gains() {
    let response = get(app(), "/api/v1/vehicles/car/Audi/A4/B9/2.0%20TDI/power").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["original_power"], 150);
    assert_eq!(json["data"]["stage1_power"], 190);
    assert_eq!(json["data"]["stage2_torque"], 440);
    assert_eq!(json["data"]["stage1_gain"]["power"], 40);
    assert_eq!(json["data"]["stage2_gain"]["torque"], 120);
}

#[tokio::test]
async fn missing_power_entry_is_null_data() {
    let response = get(app(), "/api/v1/vehicles/car/BMW/320d/F30/3.0d/power").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_null());

    let json = body_json(get(app(), "/api/v1/vehicles/boat/BMW/320d/F30/2.0d/power").await).await;
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn lookup_without_selection_offers_vehicle_types() {
    let json = body_json(get(app(), "/api/v1/vehicles/lookup").await).await;

    assert_eq!(json["data"]["next_level"], "vehicle_type");
    assert_eq!(json["data"]["options"], serde_json::json!(["car", "truck", "tractor"]));
    assert!(json["data"]["result"].is_null());
}

#[tokio::test]
async fn lookup_ignores_levels_after_a_gap() {
    let json = body_json(
        get(
            app(),
            "/api/v1/vehicles/lookup?vehicle_type=car&brand=BMW&generation=F30",
        )
        .await,
    )
    .await;

    assert_eq!(json["data"]["next_level"], "model");
    assert_eq!(json["data"]["options"], serde_json::json!(["320d"]));
    assert!(json["data"]["selection"]["generation"].is_null());
}

#[tokio::test]
async fn lookup_complete_path_returns_figures() {
    let json = body_json(
        get(
            app(),
            "/api/v1/vehicles/lookup?vehicle_type=car&brand=BMW&model=320d&generation=F30&engine=2.0d",
        )
        .await,
    )
    .await;

    assert!(json["data"]["next_level"].is_null());
    assert_eq!(json["data"]["options"], serde_json::json!([]));
    assert_eq!(json["data"]["result"]["stage1_power"], 230);
    assert_eq!(json["data"]["result"]["fuel_type"], "diesel");
}

#[tokio::test]
async fn admin_vehicle_routes_require_a_token() {
    let response = get(app(), "/api/v1/admin/vehicles").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Database source
// ---------------------------------------------------------------------------

async fn create_vehicle(app: axum::Router, body: serde_json::Value) -> StatusCode {
    post_json_auth(app, "/api/v1/admin/vehicles", &admin_token(), body)
        .await
        .status()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn database_source_matches_static_behaviour(pool: PgPool) {
    let app = build_test_app(pool);

    for (brand, model, generation, engine, hp) in [
        ("BMW", "320d", "G20", "2.0d", 190),
        ("BMW", "320d", "F30", "2.0d", 184),
        ("Audi", "A4", "B9", "2.0 TDI", 150),
    ] {
        let status = create_vehicle(
            app.clone(),
            serde_json::json!({
                "vehicle_type": "car",
                "brand": brand,
                "model": model,
                "generation": generation,
                "engine": engine,
                "original_power": hp,
                "original_torque": 400,
                "stage1_power": hp + 40,
                "stage1_torque": 450
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let json = body_json(get(app.clone(), "/api/v1/vehicles/car/brands").await).await;
    assert_eq!(json["data"], serde_json::json!(["Audi", "BMW"]));

    let json = body_json(get(app.clone(), "/api/v1/vehicles/car/BMW/320d/generations").await).await;
    assert_eq!(json["data"], serde_json::json!(["F30", "G20"]));

    let json = body_json(get(app.clone(), "/api/v1/vehicles/CAR/BMW/320d/F30/2.0d/power").await).await;
    assert_eq!(json["data"]["original_power"], 184);
    assert_eq!(json["data"]["stage1_gain"]["power"], 40);

    let json = body_json(get(app, "/api/v1/vehicles/tractor/brands").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_vehicle_key_is_a_conflict(pool: PgPool) {
    let app = build_test_app(pool);
    let body = serde_json::json!({
        "vehicle_type": "truck",
        "brand": "Volvo",
        "model": "FH",
        "generation": "FH4",
        "engine": "D13K 460",
        "original_power": 460,
        "original_torque": 2300
    });

    assert_eq!(create_vehicle(app.clone(), body.clone()).await, StatusCode::CREATED);
    assert_eq!(create_vehicle(app, body).await, StatusCode::CONFLICT);
}

#[tokio::test]
async fn non_positive_tuned_figures_are_rejected_before_saving() {
    let app = build_test_app(idle_pool());
    let token = admin_token();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/vehicles",
        &token,
        serde_json::json!({
            "vehicle_type": "car",
            "brand": "BMW",
            "model": "320d",
            "generation": "F30",
            "engine": "2.0d",
            "original_power": 1,
            "original_torque": 400,
            "stage1_power": i32::MIN,
            "stage1_torque": 450
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        "/api/v1/admin/vehicles/1",
        &token,
        serde_json::json!({ "stage2_torque": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn schema_rejects_negative_tuned_figures(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO vehicles (vehicle_type, brand, model, generation, engine, \
             original_power, original_torque, stage1_power) \
         VALUES ('car', 'BMW', '320d', 'F30', '2.0d', 190, 400, -1)",
    )
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let constraint = err
        .as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string);
    assert_eq!(constraint.as_deref(), Some("ck_vehicles_tuned_figures"));
}
