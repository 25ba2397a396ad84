//! VOC trend column: depth-vs-concentration curve with gridlines.

use perfil_core::VocReading;

use crate::scale::to_y;
use crate::svg::{num, SvgFragment};

/// Default horizontal full-scale value in PPM.
pub const DEFAULT_MAX_VOC: f64 = 100.0;

/// Draw the VOC column. Readings are sorted by depth before building the
/// connected path; the path is omitted entirely below two points. Values
/// above `max_voc` are not clamped and plot past the column edge, which
/// keeps overflow visible instead of silently clipped.
pub fn voc_column(
    readings: &[VocReading],
    max_depth: f64,
    scale: f64,
    width: f64,
    max_voc: f64,
) -> SvgFragment {
    let value_to_x = |value: f64| (value / max_voc) * width;
    let column_height = to_y(max_depth, scale);
    let mut g = SvgFragment::new();

    // Header
    g.push(format!(
        "<text x=\"{x}\" y=\"-15\" font-size=\"8\" text-anchor=\"middle\" font-weight=\"bold\">VOC</text>",
        x = num(width / 2.0)
    ));
    g.push(format!(
        "<text x=\"{x}\" y=\"-5\" font-size=\"7\" text-anchor=\"middle\">(PPM)</text>",
        x = num(width / 2.0)
    ));

    // Vertical baseline
    g.push(format!(
        "<line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{h}\" stroke=\"#ccc\" stroke-width=\"0.5\"/>",
        h = num(column_height)
    ));

    // Gridlines at quarters of full scale, labeled except zero.
    for quarter in 0..=4u32 {
        let value = max_voc * quarter as f64 / 4.0;
        let x = value_to_x(value);
        g.push(format!(
            "<line x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"{h}\" stroke=\"#eee\" stroke-width=\"0.5\" stroke-dasharray=\"2,2\"/>",
            x = num(x),
            h = num(column_height)
        ));
        if quarter > 0 {
            g.push(format!(
                "<text x=\"{x}\" y=\"-10\" font-size=\"6\" text-anchor=\"middle\" fill=\"#666\">{label}</text>",
                x = num(x),
                label = num(value)
            ));
        }
    }

    let mut sorted: Vec<&VocReading> = readings.iter().collect();
    sorted.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    // Connected trend path needs at least two points.
    if sorted.len() > 1 {
        let mut path = String::new();
        for (i, reading) in sorted.iter().enumerate() {
            let x = value_to_x(reading.value);
            let y = to_y(reading.depth, scale);
            let op = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                path.push(' ');
            }
            path.push_str(&format!("{} {} {}", op, num(x), num(y)));
        }
        g.push(format!(
            "<path d=\"{path}\" fill=\"none\" stroke=\"#e53935\" stroke-width=\"1.5\"/>"
        ));
    }

    // Marker and numeric label per reading.
    for reading in &sorted {
        let x = value_to_x(reading.value);
        let y = to_y(reading.depth, scale);
        g.push(format!(
            "<circle cx=\"{x}\" cy=\"{y}\" r=\"3\" fill=\"#e53935\"/>",
            x = num(x),
            y = num(y)
        ));
        g.push(format!(
            "<text x=\"{x}\" y=\"{y}\" font-size=\"6\" fill=\"#e53935\">{label}</text>",
            x = num(x + 8.0),
            y = num(y + 3.0),
            label = num(reading.value)
        ));
    }

    let mut out = SvgFragment::new();
    out.push_group("class=\"voc-column\"", g);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(depth: f64, value: f64) -> VocReading {
        VocReading {
            depth,
            value,
            timestamp: None,
        }
    }

    fn render(readings: &[VocReading]) -> String {
        let mut out = String::new();
        voc_column(readings, 50.0, 10.0, 80.0, DEFAULT_MAX_VOC).write_into(&mut out);
        out
    }

    #[test]
    fn single_reading_renders_marker_but_no_path() {
        let out = render(&[reading(2.0, 30.0)]);
        assert!(!out.contains("<path"));
        assert!(out.contains("<circle cx=\"24\" cy=\"20\""));
        assert!(out.contains(">30</text>"));
    }

    #[test]
    fn path_connects_readings_in_depth_order() {
        let out = render(&[reading(10.0, 50.0), reading(2.0, 25.0)]);
        assert!(out.contains("d=\"M 20 20 L 40 100\""));
    }

    #[test]
    fn over_max_values_are_not_clamped() {
        let out = render(&[reading(1.0, 150.0)]);
        // 150 ppm on an 80 px / 100 ppm scale lands at 120 px.
        assert!(out.contains("<circle cx=\"120\""));
    }

    #[test]
    fn gridlines_sit_at_quarters() {
        let out = render(&[]);
        for x in ["0", "20", "40", "60", "80"] {
            assert!(out.contains(&format!("<line x1=\"{x}\"")), "missing gridline at {x}");
        }
        assert!(out.contains(">25</text>"));
        assert!(out.contains(">100</text>"));
    }
}
