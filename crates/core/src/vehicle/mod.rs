//! Vehicle power-checker domain.
//!
//! - [`catalog`] -- in-memory cascading lookup over a fixed set of entries.
//! - [`selection`] -- the caller's cascading selection state.

pub mod catalog;
pub mod selection;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use catalog::VehicleCatalog;
pub use selection::{LookupLevel, VehicleSelection};

// ---------------------------------------------------------------------------
// VehicleType
// ---------------------------------------------------------------------------

/// The kind of vehicle a tuning entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Truck,
    Tractor,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [Self::Car, Self::Truck, Self::Tractor];

    /// Return the wire-format string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
            Self::Tractor => "tractor",
        }
    }

    /// Parse a wire-format string. Unknown values yield `None`, which lookups
    /// treat as "matches nothing".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Some(Self::Car),
            "truck" => Some(Self::Truck),
            "tractor" => Some(Self::Tractor),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// The five-part key that identifies one engine variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleKey {
    pub vehicle_type: VehicleType,
    pub brand: String,
    pub model: String,
    pub generation: String,
    pub engine: String,
}

/// One fully specified engine variant with its stock and tuned figures.
///
/// Power is in hp, torque in Nm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleEntry {
    pub vehicle_type: VehicleType,
    pub brand: String,
    pub model: String,
    pub generation: String,
    pub engine: String,
    #[serde(default)]
    pub fuel_type: Option<String>,
    pub original_power: i32,
    pub original_torque: i32,
    #[serde(default)]
    pub stage1_power: Option<i32>,
    #[serde(default)]
    pub stage1_torque: Option<i32>,
    #[serde(default)]
    pub stage2_power: Option<i32>,
    #[serde(default)]
    pub stage2_torque: Option<i32>,
}

/// Gain of a tuning stage over stock figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerGain {
    pub power: i32,
    pub torque: i32,
}

impl VehicleEntry {
    pub fn key(&self) -> VehicleKey {
        VehicleKey {
            vehicle_type: self.vehicle_type,
            brand: self.brand.clone(),
            model: self.model.clone(),
            generation: self.generation.clone(),
            engine: self.engine.clone(),
        }
    }

    /// Key parts, trimmed. Stored and looked-up keys are always trimmed.
    pub fn normalized(self) -> Self {
        Self {
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            generation: self.generation.trim().to_string(),
            engine: self.engine.trim().to_string(),
            ..self
        }
    }

    /// Key parts must be non-blank and every known figure positive.
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

    fn gain(&self, power: Option<i32>, torque: Option<i32>) -> Option<PowerGain> {
        Some(PowerGain {
            power: power?.checked_sub(self.original_power)?,
            torque: torque?.checked_sub(self.original_torque)?,
        })
    }

    /// Stage 1 gain, if stage 1 power and torque are both known.
    pub fn stage1_gain(&self) -> Option<PowerGain> {
        self.gain(self.stage1_power, self.stage1_torque)
    }

    /// Stage 2 gain, if stage 2 power and torque are both known.
    pub fn stage2_gain(&self) -> Option<PowerGain> {
        self.gain(self.stage2_power, self.stage2_torque)
    }
}

/// Rejects the first blank key part.
pub fn check_key_parts<'a>(
    parts: impl IntoIterator<Item = (&'static str, &'a str)>,
) -> Result<(), CoreError> {
    for (name, value) in parts {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{name} must not be empty")));
        }
    }
    Ok(())
}

/// Rejects the first figure that is present but not positive.
pub fn check_figures(
    figures: impl IntoIterator<Item = (&'static str, Option<i32>)>,
) -> Result<(), CoreError> {
    for (name, value) in figures {
        if value.is_some_and(|v| v <= 0) {
            return Err(CoreError::Validation(format!("{name} must be positive")));
        }
    }
    Ok(())
}

/// A power lookup result as served to the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerReport {
    #[serde(flatten)]
    pub entry: VehicleEntry,
    pub stage1_gain: Option<PowerGain>,
    pub stage2_gain: Option<PowerGain>,
}

impl From<VehicleEntry> for PowerReport {
    fn from(entry: VehicleEntry) -> Self {
        Self {
            stage1_gain: entry.stage1_gain(),
            stage2_gain: entry.stage2_gain(),
            entry,
        }
    }
}
