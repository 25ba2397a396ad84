//! Profile consistency checks.
//!
//! Layout renders whatever it is given; gaps, overlaps and out-of-range
//! elements are reported here instead, so the caller can warn the
//! technician without blocking the drawing.

use serde::Serialize;

use crate::types::Well;

/// Tolerance for layer contiguity, in meters.
const GAP_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate(well: &Well) -> ValidationReport {
    let mut report = ValidationReport::default();
    let info = &well.well_info;

    // Well cannot be deeper than the borehole.
    if info.well_depth > info.drilling_depth {
        report.errors.push(ValidationIssue {
            field: "wellDepth",
            message: "Profundidade do poço não pode ser maior que a profundidade da sondagem"
                .to_string(),
        });
    }

    // Water level below the finished well bottom is suspicious.
    if well.water_level.depth > info.well_depth {
        report.warnings.push(ValidationIssue {
            field: "waterLevel",
            message: "Nível d'água está abaixo da profundidade do poço".to_string(),
        });
    }

    // Lithologic coverage: contiguity and total depth.
    let mut layers = well.lithologic_profile.clone();
    layers.sort_by(|a, b| a.top_depth.total_cmp(&b.top_depth));
    if !layers.is_empty() {
        for pair in layers.windows(2) {
            let prev_bottom = pair[0].bottom_depth;
            let curr_top = pair[1].top_depth;
            if (curr_top - prev_bottom).abs() > GAP_TOLERANCE {
                report.warnings.push(ValidationIssue {
                    field: "lithologicProfile",
                    message: format!(
                        "Gap entre camadas: {:.2}m - {:.2}m",
                        prev_bottom, curr_top
                    ),
                });
            }
        }
        let last = &layers[layers.len() - 1];
        if last.bottom_depth < info.drilling_depth {
            report.warnings.push(ValidationIssue {
                field: "lithologicProfile",
                message: format!(
                    "Descrição litológica incompleta. Termina em {}m, sondagem até {}m",
                    last.bottom_depth, info.drilling_depth
                ),
            });
        }
    }

    // Screen must stay inside the finished well.
    let screen = well.constructive_profile.screen();
    if let Some(screen) = screen {
        if screen.bottom_depth > info.well_depth {
            report.errors.push(ValidationIssue {
                field: "constructiveProfile",
                message: "Seção filtrante excede profundidade do poço".to_string(),
            });
        }
    }

    // Prefilter should envelop the whole screen.
    if let (Some(screen), Some(prefilter)) = (screen, well.constructive_profile.prefilter()) {
        if prefilter.top_depth > screen.top_depth || prefilter.bottom_depth < screen.bottom_depth {
            report.warnings.push(ValidationIssue {
                field: "constructiveProfile",
                message: "Pré-filtro deveria envolver toda a seção filtrante".to_string(),
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{empty_well, standard_monitoring_well};
    use crate::types::{LithologicDescription, LithologicLayer, SoilType};
    use uuid::Uuid;

    fn layer(top: f64, bottom: f64) -> LithologicLayer {
        LithologicLayer {
            id: Uuid::new_v4(),
            top_depth: top,
            bottom_depth: bottom,
            primary_soil_type: SoilType::Sand,
            secondary_soil_type: None,
            description: LithologicDescription {
                color: "cinza".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn standard_template_is_valid() {
        let mut well = standard_monitoring_well().build();
        well.lithologic_profile.push(layer(0.0, 50.0));
        let report = validate(&well);
        assert!(report.is_valid(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn well_deeper_than_borehole_is_an_error() {
        let mut well = empty_well().build();
        well.well_info.drilling_depth = 10.0;
        well.well_info.well_depth = 12.0;
        let report = validate(&well);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].field, "wellDepth");
    }

    #[test]
    fn layer_gap_produces_warning() {
        let mut well = standard_monitoring_well().build();
        well.lithologic_profile.push(layer(0.0, 10.0));
        well.lithologic_profile.push(layer(12.0, 50.0));
        let report = validate(&well);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("Gap entre camadas")));
    }

    #[test]
    fn incomplete_coverage_produces_warning() {
        let mut well = standard_monitoring_well().build();
        well.lithologic_profile.push(layer(0.0, 30.0));
        let report = validate(&well);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("incompleta")));
    }

    #[test]
    fn screen_below_well_depth_is_an_error() {
        let mut well = standard_monitoring_well().build();
        well.well_info.well_depth = 48.0;
        well.well_info.drilling_depth = 48.0;
        let report = validate(&well);
        assert!(report
            .errors
            .iter()
            .any(|e| e.message.contains("Seção filtrante")));
    }

    #[test]
    fn prefilter_not_enveloping_screen_is_a_warning() {
        let mut well = standard_monitoring_well().build();
        for element in &mut well.constructive_profile.elements {
            if element.kind.grain_size().is_some() {
                element.top_depth = 46.0; // screen starts at 45.0
            }
        }
        let report = validate(&well);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("Pré-filtro")));
    }
}
