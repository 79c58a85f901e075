//! Repository for the `ui_translations` table.

use sqlx::PgPool;
use tuneshop_core::i18n::Dictionary;
use tuneshop_core::types::DbId;

use crate::models::ui_translation::{UiTranslation, UpsertUiTranslation};

/// Column list for `ui_translations` queries.
const COLUMNS: &str = "id, language, key, value, created_at, updated_at";

/// Provides data access for the interface string dictionary.
pub struct UiTranslationRepo;

impl UiTranslationRepo {
    /// All keys stored for one language as a key -> value map.
    pub async fn dictionary(pool: &PgPool, language: &str) -> Result<Dictionary, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT key, value FROM ui_translations WHERE language = $1",
        )
        .bind(language)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    pub async fn list(
        pool: &PgPool,
        language: Option<&str>,
    ) -> Result<Vec<UiTranslation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ui_translations \
             WHERE ($1::TEXT IS NULL OR language = $1) \
             ORDER BY key, language"
        );
        sqlx::query_as::<_, UiTranslation>(&query)
            .bind(language)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace the value of one key in one language.
    pub async fn upsert(
        pool: &PgPool,
        dto: &UpsertUiTranslation,
    ) -> Result<UiTranslation, sqlx::Error> {
        let query = format!(
            "INSERT INTO ui_translations (language, key, value) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (language, key) DO UPDATE SET value = EXCLUDED.value \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UiTranslation>(&query)
            .bind(&dto.language)
            .bind(&dto.key)
            .bind(&dto.value)
            .fetch_one(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ui_translations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
