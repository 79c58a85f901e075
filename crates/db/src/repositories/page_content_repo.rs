//! Repository for the `page_content` table.

use sqlx::PgPool;
use tuneshop_core::types::DbId;

use crate::models::page_content::{CreatePageContent, PageContent, UpdatePageContent};

/// Column list for `page_content` queries.
const COLUMNS: &str = "id, section, content, translations, is_active, created_at, updated_at";

/// Provides data access for per-section site content.
pub struct PageContentRepo;

impl PageContentRepo {
    /// Active record for a section, if one exists.
    pub async fn find_active_by_section(
        pool: &PgPool,
        section: &str,
    ) -> Result<Option<PageContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content WHERE section = $1 AND is_active = TRUE"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(section)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<PageContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content WHERE is_active = TRUE ORDER BY section"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PageContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_content ORDER BY section");
        sqlx::query_as::<_, PageContent>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PageContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_content WHERE id = $1");
        sqlx::query_as::<_, PageContent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, dto: &CreatePageContent) -> Result<PageContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_content (section, content, translations, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(dto.section.trim())
            .bind(&dto.content)
            .bind(&dto.translations)
            .bind(dto.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a content record.
    ///
    /// Uses `COALESCE` so only provided fields are changed. A provided
    /// `translations` object replaces the stored map as a whole.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePageContent,
    ) -> Result<Option<PageContent>, sqlx::Error> {
        let query = format!(
            "UPDATE page_content SET \
                 content = COALESCE($2, content), \
                 translations = COALESCE($3, translations), \
                 is_active = COALESCE($4, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(id)
            .bind(&dto.content)
            .bind(&dto.translations)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM page_content WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
