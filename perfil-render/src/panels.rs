//! Print-document side panels: legend, well information table and the
//! per-layer soil description text.
//!
//! Panels are fixed-width fragments with a computed height, so the print
//! assembler can stack them without re-measuring markup.

use perfil_core::types::{ElementType, Odor, SoilType};
use perfil_core::{ConstructiveElement, ConstructiveProfile, LithologicLayer, WellInfo};

use crate::svg::{escape_xml, num, SvgFragment};

pub const PANEL_WIDTH: f64 = 280.0;

const HEADER_HEIGHT: f64 = 25.0;

/// A sized fragment; `height` is the full outline height.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub width: f64,
    pub height: f64,
    pub fragment: SvgFragment,
}

/// Distinct primary soil types in first-appearance order, top down.
pub fn used_soil_types(layers: &[LithologicLayer]) -> Vec<SoilType> {
    let mut sorted: Vec<&LithologicLayer> = layers.iter().collect();
    sorted.sort_by(|a, b| a.top_depth.total_cmp(&b.top_depth));
    let mut seen = Vec::new();
    for layer in sorted {
        if !seen.contains(&layer.primary_soil_type) {
            seen.push(layer.primary_soil_type);
        }
    }
    seen
}

fn panel_header(g: &mut SvgFragment, title: &str) {
    g.push(format!(
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"#e5e7eb\" stroke=\"#000\" stroke-width=\"1\"/>",
        w = num(PANEL_WIDTH),
        h = num(HEADER_HEIGHT)
    ));
    g.push(format!(
        "<text x=\"{x}\" y=\"16\" font-size=\"12\" font-weight=\"bold\" text-anchor=\"middle\">{title}</text>",
        x = num(PANEL_WIDTH / 2.0)
    ));
}

fn panel_border(g: &mut SvgFragment, height: f64) {
    g.push(format!(
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"#000\" stroke-width=\"1\"/>",
        w = num(PANEL_WIDTH),
        h = num(height)
    ));
}

/// Legend: water-level symbol, one swatch per used soil type, then the
/// four fixed constructive swatches.
pub fn legend_panel(used: &[SoilType]) -> Panel {
    let item_height = 20.0;
    let total_items = 1 + used.len() + 4;
    let height = HEADER_HEIGHT + total_items as f64 * item_height + 20.0;

    let mut g = SvgFragment::new();
    panel_header(&mut g, "LEGENDA");

    let mut y = HEADER_HEIGHT + 15.0;

    g.push(format!(
        "<line x1=\"10\" y1=\"{y}\" x2=\"40\" y2=\"{y}\" stroke=\"#0066cc\" stroke-width=\"2\"/>",
        y = num(y)
    ));
    g.push(format!(
        "<polygon points=\"40,{y} 35,{uy} 35,{ly}\" fill=\"#0066cc\"/>",
        y = num(y),
        uy = num(y - 3.0),
        ly = num(y + 3.0)
    ));
    g.push(format!(
        "<text x=\"50\" y=\"{ty}\" font-size=\"10\">Nível D&apos;água</text>",
        ty = num(y + 4.0)
    ));
    y += item_height;

    for soil in used {
        g.push(format!(
            "<rect x=\"10\" y=\"{ry}\" width=\"30\" height=\"15\" fill=\"{fill}\" stroke=\"#333\" stroke-width=\"1\"/>",
            ry = num(y - 10.0),
            fill = soil.base_color()
        ));
        g.push(format!(
            "<text x=\"50\" y=\"{ty}\" font-size=\"10\">{name}</text>",
            ty = num(y + 4.0),
            name = escape_xml(soil.display_name())
        ));
        y += item_height;
    }

    for (name, fill, slotted) in [
        ("Tubo Geomecânico", "#fff", false),
        ("Filtro Ranhurado", "#fff", true),
        ("Pré-filtro", "#DAA520", false),
        ("Bentonita", "#999", false),
    ] {
        g.push(format!(
            "<rect x=\"10\" y=\"{ry}\" width=\"30\" height=\"15\" fill=\"{fill}\" stroke=\"#000\" stroke-width=\"2\"/>",
            ry = num(y - 10.0)
        ));
        if slotted {
            for dy in [-5.0, 5.0] {
                g.push(format!(
                    "<line x1=\"12\" y1=\"{ly}\" x2=\"38\" y2=\"{ly}\" stroke=\"#000\"/>",
                    ly = num(y + dy)
                ));
            }
        }
        g.push(format!(
            "<text x=\"50\" y=\"{ty}\" font-size=\"10\">{name}</text>",
            ty = num(y + 4.0)
        ));
        y += item_height;
    }

    panel_border(&mut g, height);
    wrap_panel("legend-panel", height, g)
}

fn depth_range(element: Option<&ConstructiveElement>) -> String {
    match element {
        Some(e) => format!("{:.2} - {:.2}m", e.top_depth, e.bottom_depth),
        None => "-".to_string(),
    }
}

/// Well information table: drilling and construction dates, element depth
/// ranges and the numeric well parameters, one row each.
pub fn well_info_panel(info: &WellInfo, profile: &ConstructiveProfile) -> Panel {
    let row_height = 18.0;

    let completion = profile.surface_completion();
    let bentonite = profile.find_first(ElementType::BentoniteSeal);
    let pellet = profile.find_first(ElementType::BentonitePellet);
    let prefilter = profile.prefilter();
    let screen = profile.screen();

    let rows: Vec<(&str, String)> = vec![
        (
            "Data (Sondagem):",
            format!(
                "Início: {} Término: {}",
                info.drilling.start_date, info.drilling.end_date
            ),
        ),
        (
            "Hora (Sondagem):",
            format!(
                "Início: {} Término: {}",
                info.drilling.start_time, info.drilling.end_time
            ),
        ),
        (
            "Data (Poço):",
            format!(
                "Início: {} Término: {}",
                info.well_construction.start_date, info.well_construction.end_date
            ),
        ),
        (
            "Hora (Poço):",
            format!(
                "Início: {} Término: {}",
                info.well_construction.start_time, info.well_construction.end_time
            ),
        ),
        ("Acabamento:", depth_range(completion)),
        ("Bentonita:", depth_range(bentonite)),
        ("Pellet:", depth_range(pellet)),
        ("Pré-filtro:", depth_range(prefilter)),
        (
            "Granulometria:",
            prefilter
                .and_then(|e| e.kind.grain_size())
                .unwrap_or("-")
                .to_string(),
        ),
        ("Filtro:", depth_range(screen)),
        (
            "Ranhura Filtro:",
            screen
                .and_then(|e| e.kind.slot_size())
                .map_or_else(|| "-".to_string(), |s| format!("{}mm", num(s))),
        ),
        ("Nível D'água:", format!("{:.2}m", info.water_level)),
        ("Prof. Sondagem:", format!("{}m", num(info.drilling_depth))),
        ("Prof. Poço:", format!("{}m", num(info.well_depth))),
        (
            "Diâm. Sondagem:",
            format!("{}\"", num(info.borehole_diameter)),
        ),
        ("Diâm. Poço:", format!("{}\"", num(info.casing_diameter))),
        (
            "Método Perfuração:",
            info.drilling_method.display_name().to_string(),
        ),
    ];

    let height = HEADER_HEIGHT + rows.len() as f64 * row_height + 10.0;

    let mut g = SvgFragment::new();
    panel_header(&mut g, "INFORMAÇÕES DO POÇO");
    g.push(format!(
        "<rect x=\"0\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"#fff\" stroke=\"#000\" stroke-width=\"1\"/>",
        y = num(HEADER_HEIGHT),
        w = num(PANEL_WIDTH),
        h = num(height - HEADER_HEIGHT)
    ));

    for (index, (label, value)) in rows.iter().enumerate() {
        let y = HEADER_HEIGHT + (index as f64 + 1.0) * row_height;
        if index > 0 {
            g.push(format!(
                "<line x1=\"0\" y1=\"{dy}\" x2=\"{w}\" y2=\"{dy}\" stroke=\"#d1d5db\" stroke-width=\"0.5\"/>",
                dy = num(HEADER_HEIGHT + index as f64 * row_height),
                w = num(PANEL_WIDTH)
            ));
        }
        g.push(format!(
            "<text x=\"5\" y=\"{ty}\" font-size=\"9\" font-weight=\"600\">{label}</text>",
            ty = num(y - 4.0),
            label = escape_xml(label)
        ));
        for (line_index, line) in wrap_text(value, 35).iter().enumerate() {
            g.push(format!(
                "<text x=\"140\" y=\"{ty}\" font-size=\"9\">{line}</text>",
                ty = num(y - 4.0 + line_index as f64 * 10.0),
                line = escape_xml(line)
            ));
        }
    }

    panel_border(&mut g, height);
    wrap_panel("well-info-panel", height, g)
}

fn layer_sentence(layer: &LithologicLayer) -> String {
    let desc = &layer.description;
    let mut parts: Vec<String> = Vec::new();

    parts.push(layer.primary_soil_type.display_name().to_string());
    if let Some(grain) = desc.grain_size {
        parts.push(format!("grãos {}", grain.display_name()));
    }
    if let Some(consistency) = desc.consistency {
        parts.push(consistency.display_name().to_string());
    }
    parts.push(desc.color.clone());
    if !desc.inclusions.is_empty() {
        parts.push(format!("com presença de {}", desc.inclusions.join(", ")));
    }
    parts.push(desc.moisture.display_name().to_string());
    match desc.odor {
        Some(Odor::Slight) | Some(Odor::Strong) => {
            let odor = if desc.odor == Some(Odor::Slight) {
                "odor leve"
            } else {
                "odor forte"
            };
            match &desc.odor_description {
                Some(extra) => parts.push(format!("{} ({})", odor, extra)),
                None => parts.push(odor.to_string()),
            }
        }
        _ => {}
    }
    if let Some(obs) = &desc.observations {
        parts.push(obs.clone());
    }

    format!("{}.", parts.join(", "))
}

/// Soil description panel: one wrapped paragraph per layer, sorted by top
/// depth, with the depth range leading the first line.
pub fn soil_description_panel(layers: &[LithologicLayer]) -> Panel {
    let line_height = 12.0;
    let padding = 10.0;

    let mut sorted: Vec<&LithologicLayer> = layers.iter().collect();
    sorted.sort_by(|a, b| a.top_depth.total_cmp(&b.top_depth));

    let paragraphs: Vec<Vec<String>> = sorted
        .iter()
        .map(|layer| {
            let text = format!(
                "{:.2} - {:.2}m: {}",
                layer.top_depth,
                layer.bottom_depth,
                layer_sentence(layer)
            );
            wrap_text(&text, 50)
        })
        .collect();

    let total_lines: f64 = paragraphs.iter().map(|p| p.len() as f64 + 0.5).sum();
    let content_height = (total_lines * line_height + padding * 2.0).max(100.0);
    let height = HEADER_HEIGHT + content_height;

    let mut g = SvgFragment::new();
    panel_header(&mut g, "DESCRIÇÃO DO SOLO");
    g.push(format!(
        "<rect x=\"0\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"#fff\" stroke=\"#000\" stroke-width=\"1\"/>",
        y = num(HEADER_HEIGHT),
        w = num(PANEL_WIDTH),
        h = num(content_height)
    ));

    if paragraphs.is_empty() {
        g.push(format!(
            "<text x=\"{x}\" y=\"{y}\" font-size=\"10\" font-style=\"italic\" fill=\"#999\" text-anchor=\"middle\">Nenhuma camada adicionada</text>",
            x = num(PANEL_WIDTH / 2.0),
            y = num(HEADER_HEIGHT + 30.0)
        ));
    } else {
        let mut y = HEADER_HEIGHT + padding + line_height;
        for lines in &paragraphs {
            for (line_index, line) in lines.iter().enumerate() {
                let weight = if line_index == 0 {
                    " font-weight=\"600\""
                } else {
                    ""
                };
                g.push(format!(
                    "<text x=\"5\" y=\"{y}\" font-size=\"9\"{weight}>{line}</text>",
                    y = num(y),
                    line = escape_xml(line)
                ));
                y += line_height;
            }
            y += line_height * 0.5;
        }
    }

    panel_border(&mut g, height);
    wrap_panel("soil-description-panel", height, g)
}

fn wrap_panel(class: &str, height: f64, g: SvgFragment) -> Panel {
    let mut fragment = SvgFragment::new();
    fragment.push_group(&format!("class=\"{class}\""), g);
    Panel {
        width: PANEL_WIDTH,
        height,
        fragment,
    }
}

/// Greedy word wrap at `max_chars` characters per line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        if current.chars().count() + word.chars().count() > max_chars && !current.is_empty() {
            lines.push(current.trim_end().to_string());
            current.clear();
        }
        current.push_str(word);
        current.push(' ');
    }
    let trimmed = current.trim_end();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfil_core::templates::standard_monitoring_well;
    use perfil_core::types::{GrainSize, LithologicDescription, MoistureState};
    use uuid::Uuid;

    fn layer(top: f64, bottom: f64, soil: SoilType) -> LithologicLayer {
        LithologicLayer {
            id: Uuid::nil(),
            top_depth: top,
            bottom_depth: bottom,
            primary_soil_type: soil,
            secondary_soil_type: None,
            description: LithologicDescription {
                color: "marrom".to_string(),
                ..Default::default()
            },
        }
    }

    fn to_string(panel: &Panel) -> String {
        let mut out = String::new();
        panel.fragment.write_into(&mut out);
        out
    }

    #[test]
    fn legend_height_counts_water_soils_and_constructive_rows() {
        let panel = legend_panel(&[SoilType::Clay, SoilType::Sand]);
        // 25 header + (1 + 2 + 4) * 20 + 20 footer.
        assert_eq!(panel.height, 185.0);
        let out = to_string(&panel);
        assert!(out.contains("LEGENDA"));
        assert!(out.contains("Argila"));
        assert!(out.contains("Filtro Ranhurado"));
    }

    #[test]
    fn used_soil_types_dedupes_in_depth_order() {
        let layers = [
            layer(10.0, 20.0, SoilType::Sand),
            layer(0.0, 10.0, SoilType::Clay),
            layer(20.0, 30.0, SoilType::Clay),
        ];
        assert_eq!(
            used_soil_types(&layers),
            vec![SoilType::Clay, SoilType::Sand]
        );
    }

    #[test]
    fn well_info_lists_all_seventeen_rows() {
        let well = standard_monitoring_well().build();
        let panel = well_info_panel(&well.well_info, &well.constructive_profile);
        assert_eq!(panel.height, 25.0 + 17.0 * 18.0 + 10.0);
        let out = to_string(&panel);
        assert!(out.contains("INFORMAÇÕES DO POÇO"));
        assert!(out.contains("Granulometria:"));
        assert!(out.contains("1,0 - 2,0 mm"));
        assert!(out.contains("0.5mm"));
        assert!(out.contains("Trado Oco (Hollow Stem Auger)"));
    }

    #[test]
    fn missing_elements_show_a_dash() {
        let well = standard_monitoring_well().build();
        let empty = ConstructiveProfile::default();
        let out = to_string(&well_info_panel(&well.well_info, &empty));
        assert!(out.contains(">-</text>"));
    }

    #[test]
    fn soil_description_keeps_minimum_height_when_empty() {
        let panel = soil_description_panel(&[]);
        assert_eq!(panel.height, 125.0);
        assert!(to_string(&panel).contains("Nenhuma camada adicionada"));
    }

    #[test]
    fn soil_description_sentence_includes_optional_parts() {
        let mut l = layer(0.0, 2.5, SoilType::SiltyClay);
        l.description.grain_size = Some(GrainSize::Fine);
        l.description.moisture = MoistureState::Moist;
        l.description.inclusions = vec!["raízes".to_string()];
        let out = to_string(&soil_description_panel(&[l]));
        assert!(out.contains("0.00 - 2.50m:"));
        assert!(out.contains("grãos"));
        assert!(out.contains("com presença de raízes"));
    }

    #[test]
    fn wrap_respects_word_boundaries() {
        let lines = wrap_text("um dois tres quatro cinco", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 11));
        assert_eq!(lines.join(" "), "um dois tres quatro cinco");
    }
}
