//! Built-in well templates used to seed a new store.

use uuid::Uuid;

use crate::types::{
    CasingMaterial, ConstructiveElement, ConstructiveProfile, DateTimeRange, Depth, DrillingMethod,
    ElementKind, ProjectInfo, WaterLevel, Well, WellInfo,
};

/// A named starting point for a new well. `build` assigns fresh ids, so two
/// wells built from the same template never collide.
#[derive(Debug, Clone)]
pub struct WellTemplate {
    /// Short identifier used on the command line.
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    well_info: WellInfo,
    elements: Vec<(ElementKind, Depth, Depth)>,
}

impl WellTemplate {
    pub fn build(&self) -> Well {
        self.build_with_well_id("PM-01")
    }

    pub fn build_with_well_id(&self, well_id: &str) -> Well {
        let water = self.well_info.water_level;
        Well {
            id: Uuid::new_v4(),
            project_info: ProjectInfo {
                title: "Perfil Litológico e Construtivo do Poço".to_string(),
                well_id: well_id.to_string(),
                client: String::new(),
                project_name: String::new(),
                location: String::new(),
                figure: String::new(),
                date: String::new(),
                responsible: String::new(),
                crea: String::new(),
            },
            well_info: self.well_info.clone(),
            constructive_profile: ConstructiveProfile {
                elements: self
                    .elements
                    .iter()
                    .map(|(kind, top, bottom)| ConstructiveElement {
                        id: Uuid::new_v4(),
                        kind: kind.clone(),
                        top_depth: *top,
                        bottom_depth: *bottom,
                    })
                    .collect(),
            },
            lithologic_profile: Vec::new(),
            voc_readings: Vec::new(),
            water_level: WaterLevel {
                depth: water,
                measurement_date: String::new(),
                measurement_time: None,
                is_artesian: None,
            },
        }
    }
}

fn blank_info(
    drilling_depth: Depth,
    well_depth: Depth,
    borehole_diameter: f64,
    casing_diameter: f64,
    method: DrillingMethod,
    water_level: Depth,
) -> WellInfo {
    WellInfo {
        drilling: DateTimeRange::default(),
        well_construction: DateTimeRange::default(),
        drilling_depth,
        well_depth,
        borehole_diameter,
        casing_diameter,
        drilling_method: method,
        water_level,
        water_level_date: String::new(),
    }
}

/// Typical 45-50 m monitoring well.
pub fn standard_monitoring_well() -> WellTemplate {
    WellTemplate {
        slug: "standard",
        name: "Poço de Monitoramento Padrão",
        description: "Template para poço de monitoramento típico (45-50m)",
        well_info: blank_info(50.0, 50.0, 10.0, 4.0, DrillingMethod::HollowStemAuger, 5.0),
        elements: vec![
            (ElementKind::SurfaceCompletion { notes: None }, 0.0, 0.5),
            (
                ElementKind::BentoniteSeal { thickness: None, notes: None },
                0.5,
                3.0,
            ),
            (
                ElementKind::GeomechanicalCasing {
                    material: Some(CasingMaterial::Pvc),
                    diameter: Some(4.0),
                    notes: None,
                },
                0.0,
                45.0,
            ),
            (
                ElementKind::Prefilter {
                    grain_size: Some("1,0 - 2,0 mm".to_string()),
                    notes: None,
                },
                43.0,
                50.0,
            ),
            (
                ElementKind::SlottedCasing {
                    material: Some(CasingMaterial::Pvc),
                    diameter: Some(4.0),
                    slot_size: Some(0.5),
                    notes: None,
                },
                45.0,
                50.0,
            ),
        ],
    }
}

/// Shallow well, under 15 m.
pub fn shallow_well() -> WellTemplate {
    WellTemplate {
        slug: "shallow",
        name: "Poço Raso",
        description: "Template para poço raso (< 15m)",
        well_info: blank_info(15.0, 15.0, 8.0, 2.0, DrillingMethod::ManualAuger, 3.0),
        elements: vec![
            (ElementKind::SurfaceCompletion { notes: None }, 0.0, 0.3),
            (
                ElementKind::BentoniteSeal { thickness: None, notes: None },
                0.3,
                1.5,
            ),
            (
                ElementKind::GeomechanicalCasing {
                    material: Some(CasingMaterial::Pvc),
                    diameter: Some(2.0),
                    notes: None,
                },
                0.0,
                12.0,
            ),
            (
                ElementKind::Prefilter {
                    grain_size: Some("1,0 - 2,0 mm".to_string()),
                    notes: None,
                },
                10.0,
                15.0,
            ),
            (
                ElementKind::SlottedCasing {
                    material: Some(CasingMaterial::Pvc),
                    diameter: Some(2.0),
                    slot_size: Some(0.5),
                    notes: None,
                },
                12.0,
                15.0,
            ),
        ],
    }
}

/// Blank slate.
pub fn empty_well() -> WellTemplate {
    WellTemplate {
        slug: "empty",
        name: "Poço Vazio",
        description: "Começar do zero",
        well_info: blank_info(0.0, 0.0, 10.0, 4.0, DrillingMethod::HollowStemAuger, 0.0),
        elements: Vec::new(),
    }
}

/// All built-in templates, display order.
pub fn builtin_templates() -> Vec<WellTemplate> {
    vec![standard_monitoring_well(), shallow_well(), empty_well()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_template_builds_complete_well() {
        let well = standard_monitoring_well().build();
        assert_eq!(well.well_info.well_depth, 50.0);
        assert_eq!(well.constructive_profile.elements.len(), 5);
        assert!(well.constructive_profile.screen().is_some());
        assert!(well.constructive_profile.prefilter().is_some());
        assert_eq!(well.water_level_depth(), 5.0);
        assert_eq!(well.water_level.depth, 5.0);
    }

    #[test]
    fn built_wells_get_distinct_ids() {
        let a = empty_well().build();
        let b = empty_well().build();
        assert_ne!(a.id, b.id);
    }
}
