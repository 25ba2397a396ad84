//! Print-document assembler: stacks the side panels next to the composite
//! drawing and fits the result onto a physical page.
//!
//! Everything is composed at the fragment level from the same layout
//! functions the interactive renderer uses; the document serializes once
//! at the end.

use chrono::{DateTime, Utc};
use perfil_core::Well;

use crate::panels::{
    legend_panel, soil_description_panel, used_soil_types, well_info_panel, Panel, PANEL_WIDTH,
};
use crate::profile::ProfileDrawing;
use crate::svg::{num, SvgDocument, SvgFragment};

/// CSS reference pixel density.
const PX_PER_INCH: f64 = 96.0;
const MM_PER_INCH: f64 = 25.4;

/// Vertical gap between stacked panels and horizontal gap before them.
const PANEL_GAP: f64 = 20.0;

pub fn mm_to_px(mm: f64) -> f64 {
    mm * PX_PER_INCH / MM_PER_INCH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    A4,
    A3,
}

impl PageFormat {
    /// Portrait dimensions in millimeters.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::A3 => (297.0, 420.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Page margins in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            bottom: 15.0,
            left: 10.0,
            right: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub format: PageFormat,
    /// Caller hint only. The assembler picks orientation from the content
    /// aspect ratio and this hint breaks the square tie.
    pub orientation: Option<Orientation>,
    pub margins: Margins,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            orientation: None,
            margins: Margins::default(),
        }
    }
}

/// A finished print document plus the fit metrics, kept for logging and
/// for asserting the layout in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub document: SvgDocument,
    pub orientation: Orientation,
    pub fit_scale: f64,
}

impl PrintDocument {
    pub fn to_svg(&self) -> String {
        self.document.serialize()
    }
}

/// Stack the three panels beside the drawing and fit the whole content
/// onto the requested page. The fit scale never exceeds 1.0, so small
/// content centers on the page instead of upscaling.
pub fn assemble(drawing: &ProfileDrawing, well: &Well, options: &PageOptions) -> PrintDocument {
    let panels = [
        legend_panel(&used_soil_types(&well.lithologic_profile)),
        well_info_panel(&well.well_info, &well.constructive_profile),
        soil_description_panel(&well.lithologic_profile),
    ];

    let panels_height = stacked_height(&panels);
    let content_width = drawing.width + PANEL_GAP + PANEL_WIDTH;
    let content_height = drawing.height.max(panels_height);

    let orientation = pick_orientation(content_width, content_height, options.orientation);
    let (page_w_mm, page_h_mm) = oriented(options.format, orientation);
    let page_width = mm_to_px(page_w_mm);
    let page_height = mm_to_px(page_h_mm);

    let avail_width = page_width - mm_to_px(options.margins.left + options.margins.right);
    let avail_height = page_height - mm_to_px(options.margins.top + options.margins.bottom);

    let fit_scale = (avail_width / content_width)
        .min(avail_height / content_height)
        .min(1.0);

    let offset_x = mm_to_px(options.margins.left) + (avail_width - content_width * fit_scale) / 2.0;
    let offset_y = mm_to_px(options.margins.top) + (avail_height - content_height * fit_scale) / 2.0;

    let mut content = SvgFragment::new();
    content.append(drawing.fragment.clone());

    let mut panel_column = SvgFragment::new();
    let mut panel_y = 0.0;
    for panel in &panels {
        let mut placed = SvgFragment::new();
        placed.append(panel.fragment.clone());
        panel_column.push_group(
            &format!("transform=\"translate(0, {})\"", num(panel_y)),
            placed,
        );
        panel_y += panel.height + PANEL_GAP;
    }
    content.push_group(
        &format!(
            "transform=\"translate({}, 0)\"",
            num(drawing.width + PANEL_GAP)
        ),
        panel_column,
    );

    let mut page = SvgFragment::new();
    page.push(format!(
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"#fff\"/>",
        w = num(page_width),
        h = num(page_height)
    ));
    page.push_group(
        &format!(
            "transform=\"translate({x}, {y}) scale({s})\"",
            x = num(offset_x),
            y = num(offset_y),
            s = num(fit_scale)
        ),
        content,
    );

    log::debug!(
        "print page {:?} {:?}: content {}x{} px, fit scale {:.3}",
        options.format,
        orientation,
        content_width,
        content_height,
        fit_scale
    );

    PrintDocument {
        document: SvgDocument {
            width: page_width,
            height: page_height,
            content: page,
        },
        orientation,
        fit_scale,
    }
}

/// Output filename for a print export.
pub fn print_filename(well_id: &str, now: DateTime<Utc>) -> String {
    format!("{}_perfil_litologico_{}.svg", well_id, now.timestamp_millis())
}

fn stacked_height(panels: &[Panel]) -> f64 {
    let heights: f64 = panels.iter().map(|p| p.height).sum();
    heights + PANEL_GAP * (panels.len().saturating_sub(1)) as f64
}

fn pick_orientation(width: f64, height: f64, hint: Option<Orientation>) -> Orientation {
    if width > height {
        Orientation::Landscape
    } else if height > width {
        Orientation::Portrait
    } else {
        hint.unwrap_or(Orientation::Portrait)
    }
}

fn oriented(format: PageFormat, orientation: Orientation) -> (f64, f64) {
    let (w, h) = format.dimensions_mm();
    match orientation {
        Orientation::Portrait => (w, h),
        Orientation::Landscape => (h, w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileRenderer;
    use chrono::TimeZone;
    use perfil_core::templates::{shallow_well, standard_monitoring_well};

    fn print_standard() -> PrintDocument {
        let well = standard_monitoring_well().build();
        let drawing = ProfileRenderer::new().render(&well);
        assemble(&drawing, &well, &PageOptions::default())
    }

    #[test]
    fn fit_scale_never_exceeds_one() {
        let well = shallow_well().build();
        let drawing = ProfileRenderer::new().render(&well);
        let doc = assemble(&drawing, &well, &PageOptions::default());
        assert!(doc.fit_scale <= 1.0);

        let big = print_standard();
        assert!(big.fit_scale <= 1.0);
        assert!(big.fit_scale > 0.0);
    }

    #[test]
    fn orientation_follows_content_aspect() {
        // 400 px drawing + 20 gap + 280 panel = 700 wide; panels stack
        // taller than the 560 px drawing, so the content is portrait-ish
        // or landscape depending on panel heights. Assert consistency
        // with the computed content box instead of a hardcoded answer.
        let doc = print_standard();
        let (w, h) = (doc.document.width, doc.document.height);
        match doc.orientation {
            Orientation::Landscape => assert!(w > h),
            Orientation::Portrait => assert!(h >= w),
        }
    }

    #[test]
    fn page_canvas_matches_a4_at_96dpi() {
        let doc = print_standard();
        let (short, long) = (mm_to_px(210.0), mm_to_px(297.0));
        let dims = (doc.document.width, doc.document.height);
        assert!(dims == (short, long) || dims == (long, short));
    }

    #[test]
    fn a3_page_is_larger_than_a4() {
        let well = standard_monitoring_well().build();
        let drawing = ProfileRenderer::new().render(&well);
        let a4 = assemble(&drawing, &well, &PageOptions::default());
        let a3 = assemble(
            &drawing,
            &well,
            &PageOptions {
                format: PageFormat::A3,
                ..Default::default()
            },
        );
        assert!(a3.fit_scale >= a4.fit_scale);
        assert!(a3.document.width * a3.document.height > a4.document.width * a4.document.height);
    }

    #[test]
    fn document_contains_all_three_panels_and_the_drawing() {
        let svg = print_standard().to_svg();
        assert!(svg.contains("LEGENDA"));
        assert!(svg.contains("INFORMAÇÕES DO POÇO"));
        assert!(svg.contains("DESCRIÇÃO DO SOLO"));
        assert!(svg.contains("constructive-column"));
        assert!(svg.contains("lithology-column"));
    }

    #[test]
    fn filename_embeds_well_id_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            print_filename("PM-01", at),
            format!("PM-01_perfil_litologico_{}.svg", at.timestamp_millis())
        );
    }
}
