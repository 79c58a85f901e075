//! In-memory cascading vehicle lookup.
//!
//! Every list query returns the distinct values of the next level among the
//! entries matching all given keys, sorted ascending. Keys that match nothing
//! (including an unknown vehicle type) give an empty list, never an error.

use std::collections::{BTreeSet, HashSet};

use crate::error::CoreError;

use super::{VehicleEntry, VehicleKey, VehicleType};

#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    entries: Vec<VehicleEntry>,
}

impl VehicleCatalog {
    /// Build a catalog from entries with trimmed key parts, rejecting
    /// invalid figures, blank key parts and duplicate five-part keys.
    pub fn new(entries: Vec<VehicleEntry>) -> Result<Self, CoreError> {
        let entries: Vec<VehicleEntry> =
            entries.into_iter().map(VehicleEntry::normalized).collect();
        let mut keys: HashSet<VehicleKey> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate()?;
            let key = entry.key();
            if !keys.insert(key) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate vehicle entry: {} {} {} {} {}",
                    entry.vehicle_type, entry.brand, entry.model, entry.generation, entry.engine
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let entries: Vec<VehicleEntry> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid vehicle catalog JSON: {e}")))?;
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VehicleEntry] {
        &self.entries
    }

    fn of_type(&self, vehicle_type: &str) -> impl Iterator<Item = &VehicleEntry> {
        let wanted = VehicleType::parse(vehicle_type);
        self.entries
            .iter()
            .filter(move |e| Some(e.vehicle_type) == wanted)
    }

    fn distinct<'a, I, F>(iter: I, field: F) -> Vec<String>
    where
        I: Iterator<Item = &'a VehicleEntry>,
        F: Fn(&'a VehicleEntry) -> &'a str,
    {
        iter.map(field)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn list_brands(&self, vehicle_type: &str) -> Vec<String> {
        Self::distinct(self.of_type(vehicle_type), |e| e.brand.as_str())
    }

    pub fn list_models(&self, vehicle_type: &str, brand: &str) -> Vec<String> {
        Self::distinct(
            self.of_type(vehicle_type).filter(|e| e.brand == brand),
            |e| e.model.as_str(),
        )
    }

    pub fn list_generations(&self, vehicle_type: &str, brand: &str, model: &str) -> Vec<String> {
        Self::distinct(
            self.of_type(vehicle_type)
                .filter(|e| e.brand == brand && e.model == model),
            |e| e.generation.as_str(),
        )
    }

    pub fn list_engines(
        &self,
        vehicle_type: &str,
        brand: &str,
        model: &str,
        generation: &str,
    ) -> Vec<String> {
        Self::distinct(
            self.of_type(vehicle_type).filter(|e| {
                e.brand == brand && e.model == model && e.generation == generation
            }),
            |e| e.engine.as_str(),
        )
    }

    /// Exact match on all five keys. `None` means no data for this vehicle.
    pub fn get_power(
        &self,
        vehicle_type: &str,
        brand: &str,
        model: &str,
        generation: &str,
        engine: &str,
    ) -> Option<&VehicleEntry> {
        self.of_type(vehicle_type).find(|e| {
            e.brand == brand && e.model == model && e.generation == generation && e.engine == engine
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::vehicle::VehicleSelection;

    fn entry(t: VehicleType, brand: &str, model: &str, generation: &str, engine: &str, hp: i32) -> VehicleEntry {
        VehicleEntry {
            vehicle_type: t,
            brand: brand.into(),
            model: model.into(),
            generation: generation.into(),
            engine: engine.into(),
            fuel_type: None,
            original_power: hp,
            original_torque: hp * 2,
            stage1_power: Some(hp + 40),
            stage1_torque: Some(hp * 2 + 50),
            stage2_power: None,
            stage2_torque: None,
        }
    }

    fn catalog() -> VehicleCatalog {
        use VehicleType::*;
        VehicleCatalog::new(vec![
            VehicleEntry {
                original_torque: 400,
                stage1_power: Some(230),
                stage1_torque: Some(450),
                ..entry(Car, "BMW", "320d", "F30", "2.0d", 190)
            },
            entry(Car, "BMW", "320d", "F30", "2.0d 163", 163),
            entry(Car, "BMW", "320d", "G20", "2.0d", 190),
            entry(Car, "BMW", "X5", "G05", "3.0d", 265),
            entry(Car, "Audi", "A4", "B9", "2.0 TDI", 150),
            entry(Truck, "Volvo", "FH", "FH4", "D13K", 460),
            entry(Tractor, "John Deere", "6R", "6R 150", "6.8L", 150),
        ])
        .unwrap()
    }

    #[test]
    fn brands_are_distinct_and_sorted() {
        assert_eq!(catalog().list_brands("car"), vec!["Audi", "BMW"]);
        assert_eq!(catalog().list_brands("truck"), vec!["Volvo"]);
    }

    #[test]
    fn unknown_keys_give_empty_lists() {
        let c = catalog();
        assert!(c.list_brands("boat").is_empty());
        assert!(c.list_brands("").is_empty());
        assert!(c.list_models("car", "Lada").is_empty());
        assert!(c.list_models("truck", "BMW").is_empty());
        assert!(c.list_generations("car", "BMW", "M3").is_empty());
        assert!(c.list_engines("car", "BMW", "320d", "E90").is_empty());
        assert!(c.get_power("car", "BMW", "320d", "F30", "9.9").is_none());
    }

    #[test]
    fn cascade_narrows_each_level() {
        let c = catalog();
        assert_eq!(c.list_models("car", "BMW"), vec!["320d", "X5"]);
        assert_eq!(c.list_generations("car", "BMW", "320d"), vec!["F30", "G20"]);
        assert_eq!(c.list_engines("car", "BMW", "320d", "F30"), vec!["2.0d", "2.0d 163"]);
    }

    #[test]
    fn get_power_exact_figures() {
        let c = catalog();
        let e = c.get_power("car", "BMW", "320d", "F30", "2.0d").unwrap();
        assert_eq!(e.original_power, 190);
        assert_eq!(e.original_torque, 400);
        assert_eq!(e.stage1_power, Some(230));
        assert_eq!(e.stage1_torque, Some(450));
        assert_eq!(e.stage2_power, None);
    }

    #[test]
    fn every_reachable_path_resolves() {
        let c = catalog();
        for t in VehicleType::ALL {
            for brand in c.list_brands(t.as_str()) {
                for model in c.list_models(t.as_str(), &brand) {
                    for generation in c.list_generations(t.as_str(), &brand, &model) {
                        for engine in c.list_engines(t.as_str(), &brand, &model, &generation) {
                            assert!(
                                c.get_power(t.as_str(), &brand, &model, &generation, &engine).is_some(),
                                "{t} {brand} {model} {generation} {engine} should resolve"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_calls_are_stable() {
        let c = catalog();
        assert_eq!(c.list_models("car", "BMW"), c.list_models("car", "BMW"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let e = entry(VehicleType::Car, "BMW", "320d", "F30", "2.0d", 190);
        assert_matches!(
            VehicleCatalog::new(vec![e.clone(), e]),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn padded_keys_are_trimmed_and_reachable_through_a_selection() {
        let c = VehicleCatalog::new(vec![entry(VehicleType::Car, "BMW ", " 320d", "F30", "2.0d ", 190)])
            .unwrap();
        assert_eq!(c.list_brands("car"), vec!["BMW"]);

        let selection = VehicleSelection::from_partial(
            Some("car"),
            Some(" BMW "),
            Some("320d"),
            Some("F30"),
            Some("2.0d"),
        );
        let brand = selection.brand().unwrap();
        assert_eq!(c.list_models("car", brand), vec!["320d"]);
        assert!(c.get_power("car", "BMW", "320d", "F30", "2.0d").is_some());
    }

    #[test]
    fn trimmed_keys_collide_as_duplicates() {
        let a = entry(VehicleType::Car, "BMW", "320d", "F30", "2.0d", 190);
        let b = entry(VehicleType::Car, "BMW ", "320d", "F30", "2.0d", 190);
        assert_matches!(VehicleCatalog::new(vec![a, b]), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn blank_key_parts_are_rejected() {
        let e = entry(VehicleType::Car, "BMW", "   ", "F30", "2.0d", 190);
        assert_matches!(VehicleCatalog::new(vec![e]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_tuned_figures_are_rejected() {
        let e = VehicleEntry {
            stage1_power: Some(i32::MIN),
            ..entry(VehicleType::Car, "BMW", "320d", "F30", "2.0d", 1)
        };
        assert_matches!(VehicleCatalog::new(vec![e]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn from_json_parses_entries() {
        let json = r#"[{
            "vehicle_type": "tractor",
            "brand": "Fendt",
            "model": "700 Vario",
            "generation": "S4",
            "engine": "724",
            "original_power": 246,
            "original_torque": 1016,
            "stage1_power": 280,
            "stage1_torque": 1150
        }]"#;
        let c = VehicleCatalog::from_json(json).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.list_brands("tractor"), vec!["Fendt"]);
    }

    #[test]
    fn from_json_rejects_unknown_vehicle_type() {
        let json = r#"[{"vehicle_type": "boat", "brand": "x", "model": "x",
            "generation": "x", "engine": "x", "original_power": 1, "original_torque": 1}]"#;
        assert_matches!(VehicleCatalog::from_json(json), Err(CoreError::Validation(_)));
    }
}
