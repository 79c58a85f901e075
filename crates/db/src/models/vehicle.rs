//! Vehicle power-checker entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::error::CoreError;
use tuneshop_core::types::{DbId, Timestamp};
use tuneshop_core::vehicle::{check_figures, check_key_parts, VehicleEntry, VehicleType};

/// A row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub generation: String,
    pub engine: String,
    pub fuel_type: Option<String>,
    pub original_power: i32,
    pub original_torque: i32,
    pub stage1_power: Option<i32>,
    pub stage1_torque: Option<i32>,
    pub stage2_power: Option<i32>,
    pub stage2_torque: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<Vehicle> for VehicleEntry {
    type Error = CoreError;

    fn try_from(row: Vehicle) -> Result<Self, Self::Error> {
        let vehicle_type = VehicleType::parse(&row.vehicle_type).ok_or_else(|| {
            CoreError::Internal(format!(
                "vehicles row {} has unknown vehicle_type '{}'",
                row.id, row.vehicle_type
            ))
        })?;
        Ok(VehicleEntry {
            vehicle_type,
            brand: row.brand,
            model: row.model,
            generation: row.generation,
            engine: row.engine,
            fuel_type: row.fuel_type,
            original_power: row.original_power,
            original_torque: row.original_torque,
            stage1_power: row.stage1_power,
            stage1_torque: row.stage1_torque,
            stage2_power: row.stage2_power,
            stage2_torque: row.stage2_torque,
        })
    }
}

/// DTO for creating a vehicle entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicle {
    pub vehicle_type: VehicleType,
    pub brand: String,
    pub model: String,
    pub generation: String,
    pub engine: String,
    pub fuel_type: Option<String>,
    pub original_power: i32,
    pub original_torque: i32,
    pub stage1_power: Option<i32>,
    pub stage1_torque: Option<i32>,
    pub stage2_power: Option<i32>,
    pub stage2_torque: Option<i32>,
}

impl From<&VehicleEntry> for CreateVehicle {
    fn from(entry: &VehicleEntry) -> Self {
        Self {
            vehicle_type: entry.vehicle_type,
            brand: entry.brand.clone(),
            model: entry.model.clone(),
            generation: entry.generation.clone(),
            engine: entry.engine.clone(),
            fuel_type: entry.fuel_type.clone(),
            original_power: entry.original_power,
            original_torque: entry.original_torque,
            stage1_power: entry.stage1_power,
            stage1_torque: entry.stage1_torque,
            stage2_power: entry.stage2_power,
            stage2_torque: entry.stage2_torque,
        }
    }
}

impl CreateVehicle {
    /// Key parts must be non-blank and every given figure positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_key_parts([
            ("brand", self.brand.as_str()),
            ("model", self.model.as_str()),
            ("generation", self.generation.as_str()),
            ("engine", self.engine.as_str()),
        ])?;
        check_figures([
            ("original_power", Some(self.original_power)),
            ("original_torque", Some(self.original_torque)),
            ("stage1_power", self.stage1_power),
            ("stage1_torque", self.stage1_torque),
            ("stage2_power", self.stage2_power),
            ("stage2_torque", self.stage2_torque),
        ])
    }
}

/// DTO for partially updating a vehicle entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVehicle {
    pub vehicle_type: Option<VehicleType>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub generation: Option<String>,
    pub engine: Option<String>,
    pub fuel_type: Option<String>,
    pub original_power: Option<i32>,
    pub original_torque: Option<i32>,
    pub stage1_power: Option<i32>,
    pub stage1_torque: Option<i32>,
    pub stage2_power: Option<i32>,
    pub stage2_torque: Option<i32>,
}

impl UpdateVehicle {
    /// Same rules as [`CreateVehicle::validate`], applied to the fields present.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_key_parts(
            [
                ("brand", &self.brand),
                ("model", &self.model),
                ("generation", &self.generation),
                ("engine", &self.engine),
            ]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v))),
        )?;
        check_figures([
            ("original_power", self.original_power),
            ("original_torque", self.original_torque),
            ("stage1_power", self.stage1_power),
            ("stage1_torque", self.stage1_torque),
            ("stage2_power", self.stage2_power),
            ("stage2_torque", self.stage2_torque),
        ])
    }
}

/// Query parameters for the admin vehicle list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleFilter {
    pub vehicle_type: Option<String>,
    pub brand: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
