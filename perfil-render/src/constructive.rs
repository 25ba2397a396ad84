//! Constructive column: borehole, seals, casing, screen, prefilter and
//! water-level marker as horizontally nested bands on one depth scale.
//!
//! Painter's order matters: the borehole background goes down first, then
//! surface completion, seals, prefilter, casing, screen, water marker and
//! finally the leader labels.

use perfil_core::{ConstructiveElement, ConstructiveProfile};

use crate::patterns::{BENTONITE_PATTERN, CASING_FILL, CEMENT_PATTERN, PREFILTER_PATTERN};
use crate::scale::to_y;
use crate::svg::{num, SvgFragment};

/// Fixed band widths in pixels.
pub const BOREHOLE_WIDTH: f64 = 60.0;
pub const CASING_WIDTH: f64 = 30.0;

/// Slot ticks per meter of screen.
const TICKS_PER_METER: f64 = 2.0;

pub fn constructive_column(
    profile: &ConstructiveProfile,
    well_depth: f64,
    water_level: f64,
    scale: f64,
    center_x: f64,
) -> SvgFragment {
    let borehole_x = center_x - BOREHOLE_WIDTH / 2.0;
    let casing_x = center_x - CASING_WIDTH / 2.0;
    let mut g = SvgFragment::new();

    // Borehole outline, full well depth, bottom layer.
    g.push(format!(
        "<rect x=\"{x}\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"#f5f5f5\" stroke=\"#333\" stroke-width=\"1\"/>",
        x = num(borehole_x),
        w = num(BOREHOLE_WIDTH),
        h = num(to_y(well_depth, scale))
    ));

    // Surface completion: wider than the borehole, with offset labels.
    if let Some(completion) = profile.surface_completion() {
        let mut sc = SvgFragment::new();
        let top = to_y(completion.top_depth, scale);
        sc.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"#666\" stroke=\"#333\" stroke-width=\"2\"/>",
            x = num(borehole_x - 10.0),
            y = num(top),
            w = num(BOREHOLE_WIDTH + 20.0),
            h = num(completion.span() * scale)
        ));
        sc.push(format!(
            "<text x=\"{x}\" y=\"{y}\" font-size=\"8\" text-anchor=\"end\">PB</text>",
            x = num(borehole_x - 15.0),
            y = num(top + 10.0)
        ));
        sc.push(format!(
            "<text x=\"{x}\" y=\"{y}\" font-size=\"8\">ST</text>",
            x = num(borehole_x + BOREHOLE_WIDTH + 15.0),
            y = num(top + 10.0)
        ));
        g.push_group("class=\"surface-completion\"", sc);
    }

    // Seal bands, one rect per record; cement first, then bentonite.
    for seal in profile.cement_seals() {
        g.push(seal_band(seal, casing_x, scale, CEMENT_PATTERN));
    }
    for seal in profile.bentonite_seals() {
        g.push(seal_band(seal, casing_x, scale, BENTONITE_PATTERN));
    }

    // Prefilter: two symmetric side bands flanking the casing, because the
    // sand physically surrounds the pipe.
    if let Some(prefilter) = profile.prefilter() {
        let mut pf = SvgFragment::new();
        let y = to_y(prefilter.top_depth, scale);
        let h = prefilter.span() * scale;
        let side_width = (BOREHOLE_WIDTH - CASING_WIDTH) / 2.0 - 2.0;
        pf.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"url(#{p})\"/>",
            x = num(borehole_x),
            y = num(y),
            w = num(side_width),
            h = num(h),
            p = PREFILTER_PATTERN
        ));
        pf.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"url(#{p})\"/>",
            x = num(casing_x + CASING_WIDTH + 2.0),
            y = num(y),
            w = num(side_width),
            h = num(h),
            p = PREFILTER_PATTERN
        ));
        g.push_group("class=\"prefilter\"", pf);
    }

    // Plain casing.
    if let Some(casing) = profile.casing() {
        g.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"{f}\" stroke=\"#000\" stroke-width=\"2\"/>",
            x = num(casing_x),
            y = num(to_y(casing.top_depth, scale)),
            w = num(CASING_WIDTH),
            h = num(casing.span() * scale),
            f = CASING_FILL
        ));
    }

    // Screen: casing-width band plus evenly spaced slot ticks.
    if let Some(screen) = profile.screen() {
        let mut sc = SvgFragment::new();
        let top = to_y(screen.top_depth, scale);
        sc.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"{f}\" stroke=\"#000\" stroke-width=\"2\"/>",
            x = num(casing_x),
            y = num(top),
            w = num(CASING_WIDTH),
            h = num(screen.span() * scale),
            f = CASING_FILL
        ));
        let tick_count = (screen.span() * TICKS_PER_METER).floor() as usize;
        for i in 0..tick_count {
            let y = top + i as f64 * (scale / TICKS_PER_METER) + 5.0;
            sc.push(format!(
                "<line x1=\"{x1}\" x2=\"{x2}\" y1=\"{y}\" y2=\"{y}\" stroke=\"#000\" stroke-width=\"1\"/>",
                x1 = num(casing_x + 3.0),
                x2 = num(casing_x + CASING_WIDTH - 3.0),
                y = num(y)
            ));
        }
        g.push_group("class=\"screen-section\"", sc);
    }

    // Water-level marker. Zero means "not measured yet", so nothing is
    // drawn at or above the surface.
    if water_level > 0.0 {
        let mut wl = SvgFragment::new();
        let y = to_y(water_level, scale);
        wl.push(format!(
            "<line x1=\"{x1}\" x2=\"{x2}\" y1=\"{y}\" y2=\"{y}\" stroke=\"#0066cc\" stroke-width=\"2\"/>",
            x1 = num(borehole_x - 30.0),
            x2 = num(borehole_x - 5.0),
            y = num(y)
        ));
        wl.push(format!(
            "<polygon points=\"{ax},{y} {bx},{uy} {bx},{ly}\" fill=\"#0066cc\"/>",
            ax = num(borehole_x - 5.0),
            bx = num(borehole_x - 15.0),
            y = num(y),
            uy = num(y - 5.0),
            ly = num(y + 5.0)
        ));
        wl.push(format!(
            "<text x=\"{x}\" y=\"{ty}\" font-size=\"9\" text-anchor=\"end\" fill=\"#0066cc\">N.A.</text>",
            x = num(borehole_x - 35.0),
            ty = num(y + 4.0)
        ));
        g.push_group("class=\"water-level\"", wl);
    }

    // Right-hand leader labels, anchored two meters below each element top.
    let mut labels = SvgFragment::new();
    let label_x = center_x + BOREHOLE_WIDTH / 2.0 + 5.0;
    for (element, text) in [
        (profile.casing(), "← TUBO GEOMECÂNICO"),
        (profile.screen(), "← FILTRO"),
        (profile.prefilter(), "← PRÉ-FILTRO"),
    ] {
        if let Some(element) = element {
            labels.push(format!(
                "<text x=\"{x}\" y=\"{y}\">{text}</text>",
                x = num(label_x),
                y = num(to_y(element.top_depth + 2.0, scale))
            ));
        }
    }
    if !labels.is_empty() {
        g.push_group(
            "class=\"element-labels\" font-size=\"7\" text-anchor=\"start\"",
            labels,
        );
    }

    let mut out = SvgFragment::new();
    out.push_group("class=\"constructive-column\"", g);
    out
}

fn seal_band(seal: &ConstructiveElement, casing_x: f64, scale: f64, pattern: &str) -> String {
    format!(
        "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"url(#{p})\" stroke=\"#333\" stroke-width=\"1\"/>",
        x = num(casing_x - 5.0),
        y = num(to_y(seal.top_depth, scale)),
        w = num(CASING_WIDTH + 10.0),
        h = num(seal.span() * scale),
        p = pattern
    )
}
