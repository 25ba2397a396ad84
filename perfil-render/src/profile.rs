//! Composite profile drawing: patterns, title band and the four columns
//! laid out left to right on a shared depth scale.

use perfil_core::Well;

use crate::constructive::constructive_column;
use crate::lithology::lithology_column;
use crate::patterns::defs;
use crate::scale::depth_axis;
use crate::svg::{escape_xml, num, SvgDocument, SvgFragment};
use crate::voc::{voc_column, DEFAULT_MAX_VOC};

/// Column widths and margins in pixels. The scale is fixed at 10 px per
/// meter so a 50 m well always produces the same canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLayout {
    pub scale: f64,
    /// Horizontal full-scale VOC value in PPM.
    pub max_voc: f64,
    pub voc_width: f64,
    pub depth_scale_width: f64,
    pub lithology_width: f64,
    pub constructive_width: f64,
    pub left_margin: f64,
    pub top_band: f64,
}

impl Default for ProfileLayout {
    fn default() -> Self {
        Self {
            scale: 10.0,
            max_voc: DEFAULT_MAX_VOC,
            voc_width: 80.0,
            depth_scale_width: 40.0,
            lithology_width: 120.0,
            constructive_width: 200.0,
            left_margin: 20.0,
            top_band: 40.0,
        }
    }
}

/// A rendered profile with its canvas size, ready to serialize or to hand
/// to the print assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDrawing {
    pub width: f64,
    pub height: f64,
    pub fragment: SvgFragment,
}

impl ProfileDrawing {
    pub fn to_svg(&self) -> String {
        SvgDocument {
            width: self.width,
            height: self.height,
            content: self.fragment.clone(),
        }
        .serialize()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileRenderer {
    pub layout: ProfileLayout,
}

impl ProfileRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the complete profile. When the well has no VOC readings the
    /// VOC column is dropped and the canvas narrows by its full width.
    pub fn render(&self, well: &Well) -> ProfileDrawing {
        let layout = &self.layout;
        let max_depth = well.max_depth();
        let height = max_depth * layout.scale;
        let has_voc = !well.voc_readings.is_empty();

        let voc_width = if has_voc { layout.voc_width } else { 0.0 };
        let total_width =
            voc_width + layout.depth_scale_width + layout.lithology_width + layout.constructive_width;

        let mut current_x = layout.left_margin;
        let voc_x = current_x;
        current_x += voc_width;
        let depth_scale_x = current_x + 20.0;
        current_x += layout.depth_scale_width;
        let lithology_x = current_x;
        current_x += layout.lithology_width;
        let constructive_x = current_x;

        let mut content = SvgFragment::new();
        content.append(defs());

        let mut main = SvgFragment::new();
        if has_voc {
            main.push_group(
                &format!("transform=\"translate({}, 0)\"", num(voc_x)),
                voc_column(
                    &well.voc_readings,
                    max_depth,
                    layout.scale,
                    layout.voc_width,
                    layout.max_voc,
                ),
            );
        }
        main.append(depth_axis(max_depth, layout.scale, depth_scale_x, height));
        main.push_group(
            &format!("transform=\"translate({}, 0)\"", num(lithology_x)),
            lithology_column(
                &well.lithologic_profile,
                max_depth,
                layout.lithology_width,
                layout.scale,
            ),
        );
        main.push_group(
            &format!("transform=\"translate({}, 0)\"", num(constructive_x)),
            constructive_column(
                &well.constructive_profile,
                well.well_info.well_depth,
                well.water_level_depth(),
                layout.scale,
                layout.constructive_width / 2.0,
            ),
        );
        content.push_group(
            &format!("transform=\"translate(0, {})\"", num(layout.top_band)),
            main,
        );

        // Title band above the columns.
        let canvas_width = total_width + 40.0;
        content.push(format!(
            "<text x=\"{x}\" y=\"20\" font-size=\"14\" font-weight=\"bold\" text-anchor=\"middle\">{title}</text>",
            x = num(canvas_width / 2.0),
            title = escape_xml(&well.project_info.title)
        ));
        content.push(format!(
            "<text x=\"{x}\" y=\"35\" font-size=\"10\" text-anchor=\"middle\">{id}</text>",
            x = num(canvas_width / 2.0),
            id = escape_xml(&well.project_info.well_id)
        ));

        log::debug!(
            "profile {}: {}x{} px, {} layers, voc column {}",
            well.project_info.well_id,
            canvas_width,
            height + 60.0,
            well.lithologic_profile.len(),
            if has_voc { "shown" } else { "omitted" }
        );

        ProfileDrawing {
            width: canvas_width,
            height: height + 60.0,
            fragment: content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfil_core::templates::standard_monitoring_well;
    use perfil_core::VocReading;

    #[test]
    fn canvas_size_follows_depth_and_columns() {
        let well = standard_monitoring_well().build();
        let drawing = ProfileRenderer::new().render(&well);
        // No VOC readings in the template: 40 + 120 + 200 + margins.
        assert_eq!(drawing.width, 400.0);
        assert_eq!(drawing.height, 560.0);
    }

    #[test]
    fn voc_column_widens_canvas_by_its_width() {
        let mut well = standard_monitoring_well().build();
        let without = ProfileRenderer::new().render(&well);
        well.voc_readings.push(VocReading {
            depth: 2.0,
            value: 12.5,
            timestamp: None,
        });
        let with = ProfileRenderer::new().render(&well);
        assert_eq!(with.width - without.width, 80.0);
        assert!(with.to_svg().contains("voc-column"));
        assert!(!without.to_svg().contains("voc-column"));
    }

    #[test]
    fn max_voc_rescales_the_trend_column() {
        let mut well = standard_monitoring_well().build();
        well.voc_readings.push(VocReading {
            depth: 2.0,
            value: 50.0,
            timestamp: None,
        });
        let renderer = ProfileRenderer {
            layout: ProfileLayout {
                max_voc: 50.0,
                ..Default::default()
            },
        };
        let svg = renderer.render(&well).to_svg();
        // 50 ppm at full scale 50 lands at the column's right edge (80 px);
        // under the 100 ppm default it would sit at mid-column (40 px).
        assert!(svg.contains("<circle cx=\"80\" cy=\"20\""));
        let default_svg = ProfileRenderer::new().render(&well).to_svg();
        assert!(default_svg.contains("<circle cx=\"40\" cy=\"20\""));
    }

    #[test]
    fn title_and_well_id_are_escaped() {
        let mut well = standard_monitoring_well().build();
        well.project_info.title = "Perfil <A & B>".to_string();
        let svg = ProfileRenderer::new().render(&well).to_svg();
        assert!(svg.contains("Perfil &lt;A &amp; B&gt;"));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let well = standard_monitoring_well().build();
        let a = ProfileRenderer::new().render(&well).to_svg();
        let b = ProfileRenderer::new().render(&well).to_svg();
        assert_eq!(a, b);
    }

    #[test]
    fn defs_precede_the_column_groups() {
        let well = standard_monitoring_well().build();
        let svg = ProfileRenderer::new().render(&well).to_svg();
        let defs_pos = svg.find("<defs>").unwrap();
        let litho_pos = svg.find("lithology-column").unwrap();
        assert!(defs_pos < litho_pos);
    }
}
