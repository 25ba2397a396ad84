//! Linear depth-to-pixel mapping and the depth axis column.

use crate::svg::{num, SvgFragment};

/// Vertical pixel offset for a depth, given pixels-per-meter.
#[inline]
pub fn to_y(depth: f64, scale: f64) -> f64 {
    depth * scale
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
}

/// Tick depths from 0 to `max_depth` inclusive, stepping by
/// `minor_interval`. A depth divisible by `major_interval` is always major,
/// never minor.
pub fn ticks(max_depth: f64, major_interval: f64, minor_interval: f64) -> Ticks {
    let mut major = Vec::new();
    let mut minor = Vec::new();
    let mut k = 0u32;
    loop {
        let depth = k as f64 * minor_interval;
        if depth > max_depth {
            break;
        }
        let ratio = depth / major_interval;
        if (ratio - ratio.round()).abs() < 1e-9 {
            major.push(depth);
        } else {
            minor.push(depth);
        }
        k += 1;
    }
    Ticks { major, minor }
}

/// The depth axis: main vertical line, labeled 8 px major ticks, 4 px minor
/// ticks, rotated axis caption.
pub fn depth_axis(max_depth: f64, scale: f64, x: f64, height: f64) -> SvgFragment {
    let ticks = ticks(max_depth, 10.0, 5.0);
    let mut g = SvgFragment::new();

    g.push(format!(
        "<line x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"{y2}\" stroke=\"#000\" stroke-width=\"1\"/>",
        x = num(x),
        y2 = num(to_y(max_depth, scale))
    ));

    for depth in &ticks.major {
        let y = to_y(*depth, scale);
        g.push(format!(
            "<line x1=\"{x1}\" y1=\"{y}\" x2=\"{x}\" y2=\"{y}\" stroke=\"#000\" stroke-width=\"1\"/>",
            x1 = num(x - 8.0),
            x = num(x),
            y = num(y)
        ));
        g.push(format!(
            "<text x=\"{tx}\" y=\"{ty}\" font-size=\"8\" text-anchor=\"end\">{label}</text>",
            tx = num(x - 10.0),
            ty = num(y + 3.0),
            label = num(depth.round())
        ));
    }

    for depth in &ticks.minor {
        let y = to_y(*depth, scale);
        g.push(format!(
            "<line x1=\"{x1}\" y1=\"{y}\" x2=\"{x}\" y2=\"{y}\" stroke=\"#000\" stroke-width=\"0.5\"/>",
            x1 = num(x - 4.0),
            x = num(x),
            y = num(y)
        ));
    }

    let cx = x - 25.0;
    let cy = height / 2.0;
    g.push(format!(
        "<text x=\"{cx}\" y=\"{cy}\" font-size=\"9\" text-anchor=\"middle\" transform=\"rotate(-90, {cx}, {cy})\">Profundidade (m)</text>",
        cx = num(cx),
        cy = num(cy)
    ));

    let mut out = SvgFragment::new();
    out.push_group("class=\"depth-scale\"", g);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_y_is_linear_and_monotonic() {
        assert_eq!(to_y(0.0, 10.0), 0.0);
        assert_eq!(to_y(50.0, 10.0), 500.0);
        assert_eq!(to_y(2.5, 10.0), 25.0);
        let mut last = f64::NEG_INFINITY;
        for d in 0..200 {
            let y = to_y(d as f64 * 0.25, 10.0);
            assert!(y >= last);
            last = y;
        }
    }

    #[test]
    fn multiples_of_major_interval_are_never_minor() {
        let t = ticks(50.0, 10.0, 5.0);
        assert_eq!(t.major, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(t.minor, vec![5.0, 15.0, 25.0, 35.0, 45.0]);
        for m in &t.major {
            assert!(!t.minor.contains(m));
        }
    }

    #[test]
    fn ticks_include_max_depth_when_on_grid() {
        let t = ticks(15.0, 10.0, 5.0);
        assert_eq!(t.minor, vec![5.0, 15.0]);
        assert_eq!(t.major, vec![0.0, 10.0]);
    }

    #[test]
    fn axis_labels_major_ticks_only() {
        let axis = depth_axis(20.0, 10.0, 40.0, 200.0);
        let mut out = String::new();
        axis.write_into(&mut out);
        assert!(out.contains(">10</text>"));
        assert!(out.contains(">20</text>"));
        assert!(!out.contains(">5</text>"));
        assert!(out.contains("Profundidade (m)"));
    }
}
