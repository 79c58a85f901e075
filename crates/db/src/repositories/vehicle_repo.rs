//! Repository for the `vehicles` table.
//!
//! The cascading list queries return distinct values sorted with the `C`
//! collation so the order matches the in-memory catalog byte for byte.

use sqlx::PgPool;
use tuneshop_core::types::DbId;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleFilter};

/// Column list for `vehicles` queries.
const COLUMNS: &str = "\
    id, vehicle_type, brand, model, generation, engine, fuel_type, \
    original_power, original_torque, stage1_power, stage1_torque, \
    stage2_power, stage2_torque, created_at, updated_at";

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

/// Provides data access for power-checker vehicle entries.
pub struct VehicleRepo;

impl VehicleRepo {
    // -----------------------------------------------------------------------
    // Cascading lookup
    // -----------------------------------------------------------------------

    pub async fn list_brands(pool: &PgPool, vehicle_type: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT brand FROM vehicles \
             WHERE vehicle_type = $1 \
             GROUP BY brand \
             ORDER BY brand COLLATE \"C\"",
        )
        .bind(vehicle_type)
        .fetch_all(pool)
        .await
    }

    pub async fn list_models(
        pool: &PgPool,
        vehicle_type: &str,
        brand: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT model FROM vehicles \
             WHERE vehicle_type = $1 AND brand = $2 \
             GROUP BY model \
             ORDER BY model COLLATE \"C\"",
        )
        .bind(vehicle_type)
        .bind(brand)
        .fetch_all(pool)
        .await
    }

    pub async fn list_generations(
        pool: &PgPool,
        vehicle_type: &str,
        brand: &str,
        model: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT generation FROM vehicles \
             WHERE vehicle_type = $1 AND brand = $2 AND model = $3 \
             GROUP BY generation \
             ORDER BY generation COLLATE \"C\"",
        )
        .bind(vehicle_type)
        .bind(brand)
        .bind(model)
        .fetch_all(pool)
        .await
    }

    pub async fn list_engines(
        pool: &PgPool,
        vehicle_type: &str,
        brand: &str,
        model: &str,
        generation: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT engine FROM vehicles \
             WHERE vehicle_type = $1 AND brand = $2 AND model = $3 AND generation = $4 \
             GROUP BY engine \
             ORDER BY engine COLLATE \"C\"",
        )
        .bind(vehicle_type)
        .bind(brand)
        .bind(model)
        .bind(generation)
        .fetch_all(pool)
        .await
    }

    /// Exact match on the five-part key.
    pub async fn find_by_key(
        pool: &PgPool,
        vehicle_type: &str,
        brand: &str,
        model: &str,
        generation: &str,
        engine: &str,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles \
             WHERE vehicle_type = $1 AND brand = $2 AND model = $3 \
               AND generation = $4 AND engine = $5"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(vehicle_type)
            .bind(brand)
            .bind(model)
            .bind(generation)
            .bind(engine)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Admin CRUD
    // -----------------------------------------------------------------------

    pub async fn list(pool: &PgPool, filter: &VehicleFilter) -> Result<Vec<Vehicle>, sqlx::Error> {
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = filter.offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles \
             WHERE ($1::TEXT IS NULL OR vehicle_type = $1) \
               AND ($2::TEXT IS NULL OR brand = $2) \
             ORDER BY vehicle_type, brand, model, generation, engine \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&filter.vehicle_type)
            .bind(&filter.brand)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, dto: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles \
                 (vehicle_type, brand, model, generation, engine, fuel_type, \
                  original_power, original_torque, stage1_power, stage1_torque, \
                  stage2_power, stage2_torque) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(dto.vehicle_type.as_str())
            .bind(dto.brand.trim())
            .bind(dto.model.trim())
            .bind(dto.generation.trim())
            .bind(dto.engine.trim())
            .bind(&dto.fuel_type)
            .bind(dto.original_power)
            .bind(dto.original_torque)
            .bind(dto.stage1_power)
            .bind(dto.stage1_torque)
            .bind(dto.stage2_power)
            .bind(dto.stage2_torque)
            .fetch_one(pool)
            .await
    }

    /// Partially update a vehicle entry.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET \
                 vehicle_type = COALESCE($2, vehicle_type), \
                 brand = COALESCE($3, brand), \
                 model = COALESCE($4, model), \
                 generation = COALESCE($5, generation), \
                 engine = COALESCE($6, engine), \
                 fuel_type = COALESCE($7, fuel_type), \
                 original_power = COALESCE($8, original_power), \
                 original_torque = COALESCE($9, original_torque), \
                 stage1_power = COALESCE($10, stage1_power), \
                 stage1_torque = COALESCE($11, stage1_torque), \
                 stage2_power = COALESCE($12, stage2_power), \
                 stage2_torque = COALESCE($13, stage2_torque) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(dto.vehicle_type.map(|t| t.as_str()))
            .bind(dto.brand.as_deref().map(str::trim))
            .bind(dto.model.as_deref().map(str::trim))
            .bind(dto.generation.as_deref().map(str::trim))
            .bind(dto.engine.as_deref().map(str::trim))
            .bind(&dto.fuel_type)
            .bind(dto.original_power)
            .bind(dto.original_torque)
            .bind(dto.stage1_power)
            .bind(dto.stage1_torque)
            .bind(dto.stage2_power)
            .bind(dto.stage2_torque)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
