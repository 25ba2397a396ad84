//! Lithology column: one pattern-filled band per soil layer.

use perfil_core::LithologicLayer;

use crate::patterns::pattern_id;
use crate::scale::to_y;
use crate::svg::{num, SvgFragment};

/// Stack the layers by depth. Input order does not matter: layers are
/// sorted by top depth before drawing. Gaps and overlaps render as-is;
/// the validator reports them separately.
pub fn lithology_column(
    layers: &[LithologicLayer],
    max_depth: f64,
    width: f64,
    scale: f64,
) -> SvgFragment {
    let column_height = to_y(max_depth, scale);
    let mut g = SvgFragment::new();

    // White background behind the patterns.
    g.push(format!(
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"#fff\" stroke=\"#000\" stroke-width=\"0.5\"/>",
        w = num(width),
        h = num(column_height)
    ));

    let mut sorted: Vec<&LithologicLayer> = layers.iter().collect();
    sorted.sort_by(|a, b| a.top_depth.total_cmp(&b.top_depth));

    for layer in &sorted {
        let y = to_y(layer.top_depth, scale);
        let band_height = layer.span() * scale;

        g.push(format!(
            "<rect x=\"0\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"url(#{pattern})\" stroke=\"none\"/>",
            y = num(y),
            w = num(width),
            h = num(band_height),
            pattern = pattern_id(layer.primary_soil_type)
        ));
        // Separator at the layer top.
        g.push(format!(
            "<line x1=\"0\" y1=\"{y}\" x2=\"{w}\" y2=\"{y}\" stroke=\"#000\" stroke-width=\"1\"/>",
            y = num(y),
            w = num(width)
        ));
    }

    // Closing separator at the deepest layer bottom.
    if let Some(bottom) = sorted
        .iter()
        .map(|l| l.bottom_depth)
        .fold(None::<f64>, |acc, b| Some(acc.map_or(b, |a| a.max(b))))
    {
        let y = to_y(bottom, scale);
        g.push(format!(
            "<line x1=\"0\" y1=\"{y}\" x2=\"{w}\" y2=\"{y}\" stroke=\"#000\" stroke-width=\"1\"/>",
            y = num(y),
            w = num(width)
        ));
    }

    // Outer border on top of everything.
    g.push(format!(
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"#000\" stroke-width=\"2\"/>",
        w = num(width),
        h = num(column_height)
    ));

    let mut out = SvgFragment::new();
    out.push_group("class=\"lithology-column\"", g);
    out
}
