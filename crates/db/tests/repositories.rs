use assert_matches::assert_matches;
use sqlx::PgPool;
use tuneshop_core::error::CoreError;
use tuneshop_core::vehicle::VehicleType;
use tuneshop_db::models::navigation::CreateNavigationItem;
use tuneshop_db::models::ui_translation::UpsertUiTranslation;
use tuneshop_db::models::vehicle::CreateVehicle;
use tuneshop_db::repositories::{NavigationRepo, ReorderError, UiTranslationRepo, VehicleRepo};

fn nav(label: &str) -> CreateNavigationItem {
    CreateNavigationItem {
        label: label.to_string(),
        href: format!("/{}", label.to_lowercase()),
        icon: None,
        sort_order: None,
        is_active: None,
        translations: None,
    }
}

fn vehicle(brand: &str, model: &str, generation: &str, engine: &str) -> CreateVehicle {
    CreateVehicle {
        vehicle_type: VehicleType::Car,
        brand: brand.to_string(),
        model: model.to_string(),
        generation: generation.to_string(),
        engine: engine.to_string(),
        fuel_type: None,
        original_power: 150,
        original_torque: 320,
        stage1_power: Some(190),
        stage1_torque: Some(400),
        stage2_power: None,
        stage2_torque: None,
    }
}

/// New items without an explicit position go to the end.
#[sqlx::test(migrations = "./migrations")]
async fn test_navigation_create_appends(pool: PgPool) {
    let a = NavigationRepo::create(&pool, &nav("Home")).await.unwrap();
    let b = NavigationRepo::create(&pool, &nav("Services")).await.unwrap();

    assert_eq!(a.sort_order, 1);
    assert_eq!(b.sort_order, 2);
    assert_eq!(b.translations, serde_json::json!({}));
    assert!(b.is_active);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_navigation_reorder_is_all_or_nothing(pool: PgPool) {
    let a = NavigationRepo::create(&pool, &nav("Home")).await.unwrap();
    let b = NavigationRepo::create(&pool, &nav("Services")).await.unwrap();
    let c = NavigationRepo::create(&pool, &nav("Contact")).await.unwrap();

    let plan = NavigationRepo::reorder(&pool, &[c.id, a.id, b.id]).await.unwrap();
    assert_eq!(plan.len(), 3);

    let ids: Vec<i64> = NavigationRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec![c.id, a.id, b.id]);

    let result = NavigationRepo::reorder(&pool, &[a.id, b.id]).await;
    assert_matches!(result, Err(ReorderError::Invalid(CoreError::Validation(_))));

    let ids: Vec<i64> = NavigationRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec![c.id, a.id, b.id]);
}

/// A write failing after earlier rows were updated rolls the whole order back.
#[sqlx::test(migrations = "./migrations")]
async fn test_navigation_reorder_rolls_back_on_write_failure(pool: PgPool) {
    let a = NavigationRepo::create(&pool, &nav("Home")).await.unwrap();
    let b = NavigationRepo::create(&pool, &nav("Services")).await.unwrap();
    let c = NavigationRepo::create(&pool, &nav("Contact")).await.unwrap();

    sqlx::raw_sql(&format!(
        "CREATE FUNCTION fail_nav_update() RETURNS trigger AS $$ \
         BEGIN \
             IF NEW.id = {} THEN RAISE EXCEPTION 'sort_order write refused'; END IF; \
             RETURN NEW; \
         END; $$ LANGUAGE plpgsql; \
         CREATE TRIGGER trg_fail_nav_update BEFORE UPDATE ON navigation_items \
             FOR EACH ROW EXECUTE FUNCTION fail_nav_update();",
        b.id
    ))
    .execute(&pool)
    .await
    .unwrap();

    // b is written last, after c and a have already been updated.
    let result = NavigationRepo::reorder(&pool, &[c.id, a.id, b.id]).await;
    assert_matches!(result, Err(ReorderError::Database(_)));

    let orders: Vec<(i64, i32)> = NavigationRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|item| (item.id, item.sort_order))
        .collect();
    assert_eq!(orders, vec![(a.id, 1), (b.id, 2), (c.id, 3)]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_vehicle_cascade_is_distinct_and_bytewise_sorted(pool: PgPool) {
    for v in [
        vehicle("BMW", "320d", "G20", "2.0d"),
        vehicle("BMW", "320d", "F30", "2.0d"),
        vehicle("BMW", "320d", "F30", "2.0d 163"),
        vehicle("Audi", "A4", "B9", "2.0 TDI"),
        vehicle("audi", "a4", "B8", "2.0 TDI"),
    ] {
        VehicleRepo::create(&pool, &v).await.unwrap();
    }

    let brands = VehicleRepo::list_brands(&pool, "car").await.unwrap();
    assert_eq!(brands, vec!["Audi", "BMW", "audi"]);

    let generations = VehicleRepo::list_generations(&pool, "car", "BMW", "320d").await.unwrap();
    assert_eq!(generations, vec!["F30", "G20"]);

    let engines = VehicleRepo::list_engines(&pool, "car", "BMW", "320d", "F30").await.unwrap();
    assert_eq!(engines, vec!["2.0d", "2.0d 163"]);

    assert!(VehicleRepo::list_brands(&pool, "truck").await.unwrap().is_empty());

    let found = VehicleRepo::find_by_key(&pool, "car", "BMW", "320d", "F30", "2.0d 163")
        .await
        .unwrap();
    assert!(found.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ui_translation_upsert_replaces(pool: PgPool) {
    let entry = |value: &str| UpsertUiTranslation {
        language: "ru".to_string(),
        key: "nav.home".to_string(),
        value: value.to_string(),
    };

    let first = UiTranslationRepo::upsert(&pool, &entry("Домой")).await.unwrap();
    let second = UiTranslationRepo::upsert(&pool, &entry("Главная")).await.unwrap();
    assert_eq!(first.id, second.id);

    let dictionary = UiTranslationRepo::dictionary(&pool, "ru").await.unwrap();
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary["nav.home"], "Главная");
}
