//! HTTP-level tests for header navigation: localized listing and reorder.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, editor_token, get, get_auth, get_with_headers, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

async fn create_item(app: axum::Router, body: serde_json::Value) -> i64 {
    let response = post_json_auth(app, "/api/v1/admin/navigation", &editor_token(), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Creates Home, Services, Contact (in that order) and returns their ids.
async fn seed(app: &axum::Router) -> [i64; 3] {
    let home = create_item(
        app.clone(),
        serde_json::json!({
            "label": "Home",
            "href": "/",
            "translations": { "ru": { "label": "Главная" }, "lv": { "label": "Sākums" } }
        }),
    )
    .await;
    let services = create_item(
        app.clone(),
        serde_json::json!({
            "label": "Services",
            "href": "/services",
            "translations": { "ru": { "label": "  " } }
        }),
    )
    .await;
    let contact = create_item(
        app.clone(),
        serde_json::json!({ "label": "Contact", "href": "/contact" }),
    )
    .await;
    [home, services, contact]
}

fn labels(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn new_items_append_to_the_end(pool: PgPool) {
    let app = build_test_app(pool);
    seed(&app).await;

    let json = body_json(get(app, "/api/v1/navigation").await).await;
    assert_eq!(labels(&json), vec!["Home", "Services", "Contact"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn labels_follow_the_visitor_language(pool: PgPool) {
    let app = build_test_app(pool);
    seed(&app).await;

    let json = body_json(get(app.clone(), "/api/v1/navigation?lang=ru").await).await;
    // Blank translations fall back to the base label.
    assert_eq!(labels(&json), vec!["Главная", "Services", "Contact"]);

    let json = body_json(
        get_with_headers(
            app.clone(),
            "/api/v1/navigation",
            &[("accept-language", "lv-LV,lv;q=0.9,en;q=0.5")],
        )
        .await,
    )
    .await;
    assert_eq!(labels(&json)[0], "Sākums");

    // The query parameter wins over cookie and header.
    let json = body_json(
        get_with_headers(
            app,
            "/api/v1/navigation?lang=en",
            &[
                ("cookie", "preferred-language=ru"),
                ("accept-language", "lv"),
            ],
        )
        .await,
    )
    .await;
    assert_eq!(labels(&json)[0], "Home");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_assigns_positions_in_list_order(pool: PgPool) {
    let app = build_test_app(pool);
    let [home, services, contact] = seed(&app).await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/admin/navigation/reorder",
        &editor_token(),
        serde_json::json!({ "ids": [contact, home, services] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let plan = body_json(response).await;
    assert_eq!(plan["data"][0]["id"], contact);
    assert_eq!(plan["data"][0]["sort_order"], 1);

    let json = body_json(get(app.clone(), "/api/v1/navigation").await).await;
    assert_eq!(labels(&json), vec!["Contact", "Home", "Services"]);

    let admin = body_json(get_auth(app, "/api/v1/admin/navigation", &editor_token()).await).await;
    let orders: Vec<i64> = admin["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["sort_order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_or_duplicate_reorder_changes_nothing(pool: PgPool) {
    let app = build_test_app(pool);
    let [home, services, contact] = seed(&app).await;

    for ids in [
        serde_json::json!([contact, home]),
        serde_json::json!([contact, contact, home]),
        serde_json::json!([contact, home, services, 99_999]),
    ] {
        let response = put_json_auth(
            app.clone(),
            "/api/v1/admin/navigation/reorder",
            &editor_token(),
            serde_json::json!({ "ids": ids }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let json = body_json(get(app, "/api/v1/navigation").await).await;
    assert_eq!(labels(&json), vec!["Home", "Services", "Contact"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn inactive_items_are_hidden_from_the_site(pool: PgPool) {
    let app = build_test_app(pool);
    let [_, services, _] = seed(&app).await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/navigation/{services}"),
        &editor_token(),
        serde_json::json!({ "is_active": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/navigation").await).await;
    assert_eq!(labels(&json), vec!["Home", "Contact"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_label_translation_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/admin/navigation",
        &editor_token(),
        serde_json::json!({
            "label": "Blog",
            "href": "/blog",
            "translations": { "ru": "Блог" }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
