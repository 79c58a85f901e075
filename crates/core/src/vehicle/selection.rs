//! Cascading selection state for the power checker.
//!
//! Levels are ordered type > brand > model > generation > engine. Changing
//! a level clears every level below it along with the lookup result, so the
//! options shown for a level always derive from the current selection only.

use serde::Serialize;

use super::{VehicleEntry, VehicleType};

/// One step of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupLevel {
    VehicleType,
    Brand,
    Model,
    Generation,
    Engine,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleSelection {
    vehicle_type: Option<VehicleType>,
    brand: Option<String>,
    model: Option<String>,
    generation: Option<String>,
    engine: Option<String>,
    #[serde(skip)]
    result: Option<VehicleEntry>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl VehicleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from a possibly partial path.
    ///
    /// The path is cut at the first missing (or, for the type, unknown) level;
    /// anything given below the gap is ignored.
    pub fn from_partial(
        vehicle_type: Option<&str>,
        brand: Option<&str>,
        model: Option<&str>,
        generation: Option<&str>,
        engine: Option<&str>,
    ) -> Self {
        let mut selection = Self::new();
        let Some(t) = vehicle_type.and_then(VehicleType::parse) else {
            return selection;
        };
        selection.select_vehicle_type(t);
        for (level, value) in [
            (LookupLevel::Brand, brand),
            (LookupLevel::Model, model),
            (LookupLevel::Generation, generation),
            (LookupLevel::Engine, engine),
        ] {
            match non_blank(value) {
                Some(v) => {
                    selection.select(level, v);
                }
                None => break,
            }
        }
        selection
    }

    pub fn vehicle_type(&self) -> Option<VehicleType> {
        self.vehicle_type
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn generation(&self) -> Option<&str> {
        self.generation.as_deref()
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn result(&self) -> Option<&VehicleEntry> {
        self.result.as_ref()
    }

    /// Clear every level strictly below `level`, plus the result.
    fn clear_below(&mut self, level: LookupLevel) {
        if level < LookupLevel::Brand {
            self.brand = None;
        }
        if level < LookupLevel::Model {
            self.model = None;
        }
        if level < LookupLevel::Generation {
            self.generation = None;
        }
        if level < LookupLevel::Engine {
            self.engine = None;
        }
        self.result = None;
    }

    pub fn select_vehicle_type(&mut self, vehicle_type: VehicleType) {
        if self.vehicle_type != Some(vehicle_type) {
            self.vehicle_type = Some(vehicle_type);
            self.clear_below(LookupLevel::VehicleType);
        }
    }

    /// Set a string level. Returns `false` (and changes nothing) when the
    /// level above it has not been chosen yet.
    pub fn select(&mut self, level: LookupLevel, value: impl Into<String>) -> bool {
        if matches!(self.next_level(), Some(next) if next < level) {
            return false;
        }
        let value = Some(value.into());
        let slot = match level {
            LookupLevel::VehicleType => return false,
            LookupLevel::Brand => &mut self.brand,
            LookupLevel::Model => &mut self.model,
            LookupLevel::Generation => &mut self.generation,
            LookupLevel::Engine => &mut self.engine,
        };
        if *slot != value {
            *slot = value;
            self.clear_below(level);
        }
        true
    }

    pub fn select_brand(&mut self, brand: impl Into<String>) -> bool {
        self.select(LookupLevel::Brand, brand)
    }

    pub fn select_model(&mut self, model: impl Into<String>) -> bool {
        self.select(LookupLevel::Model, model)
    }

    pub fn select_generation(&mut self, generation: impl Into<String>) -> bool {
        self.select(LookupLevel::Generation, generation)
    }

    pub fn select_engine(&mut self, engine: impl Into<String>) -> bool {
        self.select(LookupLevel::Engine, engine)
    }

    /// Store the lookup result. Ignored unless all five levels are chosen.
    pub fn set_result(&mut self, result: Option<VehicleEntry>) {
        if self.is_complete() {
            self.result = result;
        }
    }

    /// The first level still unchosen, or `None` when the path is complete.
    pub fn next_level(&self) -> Option<LookupLevel> {
        if self.vehicle_type.is_none() {
            Some(LookupLevel::VehicleType)
        } else if self.brand.is_none() {
            Some(LookupLevel::Brand)
        } else if self.model.is_none() {
            Some(LookupLevel::Model)
        } else if self.generation.is_none() {
            Some(LookupLevel::Generation)
        } else if self.engine.is_none() {
            Some(LookupLevel::Engine)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.next_level().is_none()
    }
}
