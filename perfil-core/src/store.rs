//! Application state for one well under edit.
//!
//! `WellStore` is an explicit object constructed from a template and passed
//! down; there is no lazily-initialized global. It owns id assignment and
//! every mutation, so the renderer only ever sees read-only snapshots.

use uuid::Uuid;

use crate::error::CoreError;
use crate::templates::WellTemplate;
use crate::types::{
    ConstructiveElement, Depth, ElementKind, LithologicLayer, ProjectInfo, VocReading, Well,
    WellInfo,
};

#[derive(Debug)]
pub struct WellStore {
    well: Well,
    selected_layer: Option<Uuid>,
    selected_element: Option<Uuid>,
    dirty: bool,
}

impl WellStore {
    pub fn new(template: &WellTemplate) -> Self {
        Self {
            well: template.build(),
            selected_layer: None,
            selected_element: None,
            dirty: false,
        }
    }

    /// Read-only snapshot for rendering and validation.
    pub fn well(&self) -> &Well {
        &self.well
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Discard the current well and start over from a template.
    pub fn reset(&mut self, template: &WellTemplate) {
        self.well = template.build();
        self.selected_layer = None;
        self.selected_element = None;
        self.dirty = false;
        log::info!("store reset from template '{}'", template.name);
    }

    // ---- project / well info ----

    pub fn update_project_info<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut ProjectInfo),
    {
        apply(&mut self.well.project_info);
        self.dirty = true;
    }

    pub fn update_well_info<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut WellInfo),
    {
        apply(&mut self.well.well_info);
        self.dirty = true;
    }

    /// The one mutator for the water level. `well_info.water_level` and
    /// `water_level.depth` are a synchronized pair; call sites must never
    /// write either field directly.
    pub fn set_water_level(&mut self, depth: Depth, date: &str) {
        self.well.water_level.depth = depth;
        self.well.water_level.measurement_date = date.to_string();
        self.well.well_info.water_level = depth;
        self.well.well_info.water_level_date = date.to_string();
        self.dirty = true;
    }

    // ---- lithology ----

    pub fn add_layer(&mut self, mut layer: LithologicLayer) -> Uuid {
        layer.id = Uuid::new_v4();
        let id = layer.id;
        self.well.lithologic_profile.push(layer);
        self.dirty = true;
        id
    }

    pub fn update_layer<F>(&mut self, id: Uuid, apply: F) -> bool
    where
        F: FnOnce(&mut LithologicLayer),
    {
        match self.well.lithologic_profile.iter_mut().find(|l| l.id == id) {
            Some(layer) => {
                apply(layer);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn delete_layer(&mut self, id: Uuid) -> bool {
        let before = self.well.lithologic_profile.len();
        self.well.lithologic_profile.retain(|l| l.id != id);
        let removed = self.well.lithologic_profile.len() != before;
        if removed {
            self.dirty = true;
            if self.selected_layer == Some(id) {
                self.selected_layer = None;
            }
        }
        removed
    }

    /// Sort stored layers by top depth. Rendering sorts on its own; this
    /// only tidies the stored order for editors.
    pub fn reorder_layers(&mut self) {
        self.well
            .lithologic_profile
            .sort_by(|a, b| a.top_depth.total_cmp(&b.top_depth));
        self.dirty = true;
    }

    // ---- constructive profile ----

    pub fn add_element(&mut self, kind: ElementKind, top_depth: Depth, bottom_depth: Depth) -> Uuid {
        let element = ConstructiveElement {
            id: Uuid::new_v4(),
            kind,
            top_depth,
            bottom_depth,
        };
        let id = element.id;
        self.well.constructive_profile.elements.push(element);
        self.dirty = true;
        id
    }

    pub fn update_element<F>(&mut self, id: Uuid, apply: F) -> bool
    where
        F: FnOnce(&mut ConstructiveElement),
    {
        match self
            .well
            .constructive_profile
            .elements
            .iter_mut()
            .find(|e| e.id == id)
        {
            Some(element) => {
                apply(element);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn delete_element(&mut self, id: Uuid) -> bool {
        let elements = &mut self.well.constructive_profile.elements;
        let before = elements.len();
        elements.retain(|e| e.id != id);
        let removed = elements.len() != before;
        if removed {
            self.dirty = true;
            if self.selected_element == Some(id) {
                self.selected_element = None;
            }
        }
        removed
    }

    // ---- VOC readings ----

    /// Readings stay sorted by depth on insert, so the trend path never has
    /// to re-sort a store-owned collection.
    pub fn add_voc_reading(&mut self, reading: VocReading) {
        self.well.voc_readings.push(reading);
        self.well
            .voc_readings
            .sort_by(|a, b| a.depth.total_cmp(&b.depth));
        self.dirty = true;
    }

    pub fn update_voc_reading(&mut self, index: usize, reading: VocReading) -> bool {
        if index >= self.well.voc_readings.len() {
            return false;
        }
        self.well.voc_readings[index] = reading;
        self.well
            .voc_readings
            .sort_by(|a, b| a.depth.total_cmp(&b.depth));
        self.dirty = true;
        true
    }

    pub fn delete_voc_reading(&mut self, index: usize) -> bool {
        if index >= self.well.voc_readings.len() {
            return false;
        }
        self.well.voc_readings.remove(index);
        self.dirty = true;
        true
    }

    // ---- selection ----

    pub fn select_layer(&mut self, id: Option<Uuid>) {
        self.selected_layer = id;
    }

    pub fn select_element(&mut self, id: Option<Uuid>) {
        self.selected_element = id;
    }

    pub fn selected_layer(&self) -> Option<Uuid> {
        self.selected_layer
    }

    pub fn selected_element(&self) -> Option<Uuid> {
        self.selected_element
    }

    // ---- interchange ----

    /// Full snapshot as pretty-printed JSON, the sole interchange format.
    pub fn export_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.well).map_err(CoreError::from)
    }

    /// Replace the well wholesale from a JSON snapshot. A parse failure
    /// leaves the current well untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), CoreError> {
        let well: Well = serde_json::from_str(json)?;
        self.well = well;
        self.selected_layer = None;
        self.selected_element = None;
        self.dirty = false;
        log::info!("imported well '{}'", self.well.project_info.well_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{empty_well, standard_monitoring_well};
    use crate::types::{LithologicDescription, SoilType};

    fn layer(top: f64, bottom: f64, soil: SoilType) -> LithologicLayer {
        LithologicLayer {
            id: Uuid::nil(),
            top_depth: top,
            bottom_depth: bottom,
            primary_soil_type: soil,
            secondary_soil_type: None,
            description: LithologicDescription {
                color: "bruno".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn water_level_mutator_keeps_both_fields_in_sync() {
        let mut store = WellStore::new(&empty_well());
        store.set_water_level(7.25, "2024-03-01");
        let well = store.well();
        assert_eq!(well.water_level.depth, 7.25);
        assert_eq!(well.well_info.water_level, 7.25);
        assert_eq!(well.well_info.water_level_date, "2024-03-01");
        assert_eq!(well.water_level_depth(), 7.25);
    }

    #[test]
    fn voc_readings_stay_sorted_on_insert() {
        let mut store = WellStore::new(&empty_well());
        for depth in [8.0, 2.0, 5.0] {
            store.add_voc_reading(VocReading {
                depth,
                value: depth * 10.0,
                timestamp: None,
            });
        }
        let depths: Vec<f64> = store.well().voc_readings.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![2.0, 5.0, 8.0]);
    }

    #[test]
    fn deleting_selected_layer_clears_selection() {
        let mut store = WellStore::new(&empty_well());
        let id = store.add_layer(layer(0.0, 3.0, SoilType::Sand));
        store.select_layer(Some(id));
        assert!(store.delete_layer(id));
        assert_eq!(store.selected_layer(), None);
    }

    #[test]
    fn import_failure_leaves_snapshot_untouched() {
        let mut store = WellStore::new(&standard_monitoring_well());
        let before = store.well().clone();
        assert!(store.import_json("{ not json").is_err());
        assert_eq!(store.well(), &before);
    }

    #[test]
    fn export_import_round_trips_the_snapshot() {
        let mut store = WellStore::new(&standard_monitoring_well());
        store.add_layer(layer(0.0, 50.0, SoilType::Sand));
        store.add_voc_reading(VocReading {
            depth: 2.0,
            value: 30.0,
            timestamp: None,
        });
        let json = store.export_json().unwrap();

        let mut other = WellStore::new(&empty_well());
        other.import_json(&json).unwrap();
        assert_eq!(other.well(), store.well());
        assert!(!other.is_dirty());
    }
}
