use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every table with an `updated_at` column keeps it current via trigger.
#[sqlx::test(migrations = "./migrations")]
async fn test_updated_at_triggers_exist(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND column_name = 'updated_at'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        let trigger: Option<(String,)> = sqlx::query_as(
            "SELECT trigger_name
             FROM information_schema.triggers
             WHERE event_object_table = $1
               AND trigger_name = $2",
        )
        .bind(table)
        .bind(format!("trg_{table}_updated_at"))
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert!(trigger.is_some(), "Table {table} is missing its updated_at trigger");
    }
}

/// Unique and check constraints follow the `uq_` / `ck_` prefixes the API
/// error mapping relies on.
#[sqlx::test(migrations = "./migrations")]
async fn test_constraint_names_are_prefixed(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT constraint_name, constraint_type
         FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND constraint_type IN ('UNIQUE', 'CHECK')
           AND constraint_name NOT LIKE '%_not_null'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (name, kind) in &rows {
        let prefix = if kind == "UNIQUE" { "uq_" } else { "ck_" };
        assert!(name.starts_with(prefix), "{kind} constraint {name} should start with {prefix}");
    }
}
