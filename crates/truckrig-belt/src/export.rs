//! # Belt Export
//!
//! SVG path data and documents for a belt path, and JSON serialization.
//!
//! Coordinates are written in the working plane's y-up convention; the SVG
//! document flips the y axis so the drawing reads the same way up.

use crate::circle::Circle;
use crate::path::{BeltPath, Primitive};
use serde::de::Error as _;
use std::f64::consts::PI;
use std::fmt::Write;

/// SVG document options
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub stroke_width: f64,
    /// Draw the pulley outlines under the belt
    pub draw_pulleys: bool,
    /// Space around the drawing, in drawing units
    pub margin: f64,
    pub belt_color: String,
    pub pulley_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            draw_pulleys: true,
            margin: 10.0,
            belt_color: "#1f6feb".to_string(),
            pulley_color: "#8b949e".to_string(),
        }
    }
}

/// SVG path data with exact arcs: `M`, then `A` per arc and `L` per tangent, then `Z`.
pub fn svg_path_data(path: &BeltPath) -> String {
    let Some(first) = path.parts().first() else {
        return String::new();
    };

    let mut d = String::new();
    let _ = write!(d, "M {:.4} {:.4} ", first.arc.start.x, first.arc.start.y);

    for primitive in path.primitives() {
        match primitive {
            Primitive::Arc(arc) => {
                // belt arcs turn clockwise: negative angle direction, sweep-flag 0
                let large_arc = u8::from(arc.sweep() > PI);
                let _ = write!(
                    d,
                    "A {:.4} {:.4} 0 {} 0 {:.4} {:.4} ",
                    arc.radius, arc.radius, large_arc, arc.end.x, arc.end.y
                );
            }
            Primitive::Segment(tangent) => {
                let _ = write!(d, "L {:.4} {:.4} ", tangent.end.x, tangent.end.y);
            }
        }
    }

    d.push('Z');
    d
}

/// Standalone SVG document showing the belt and, optionally, the pulleys.
pub fn svg_document(path: &BeltPath, circles: &[Circle], options: &SvgOptions) -> String {
    let (min_x, min_y, max_x, max_y) = circles.iter().map(Circle::bounds).fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |acc, b| (acc.0.min(b.0), acc.1.min(b.1), acc.2.max(b.2), acc.3.max(b.3)),
    );
    let (min_x, min_y, max_x, max_y) = if min_x.is_finite() {
        (min_x, min_y, max_x, max_y)
    } else {
        (0.0, 0.0, 0.0, 0.0)
    };

    let m = options.margin;
    let width = (max_x - min_x) + 2.0 * m;
    let height = (max_y - min_y) + 2.0 * m;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.4} {:.4} {:.4} {:.4}">"#,
        min_x - m,
        -(max_y + m),
        width,
        height
    );
    let _ = writeln!(svg, r#"  <g transform="scale(1,-1)" fill="none">"#);

    if options.draw_pulleys {
        for circle in circles {
            let _ = writeln!(
                svg,
                r#"    <circle cx="{:.4}" cy="{:.4}" r="{:.4}" stroke="{}" stroke-width="{}" />"#,
                circle.center.x,
                circle.center.y,
                circle.radius,
                options.pulley_color,
                options.stroke_width * 0.5
            );
        }
    }

    let _ = writeln!(
        svg,
        r#"    <path d="{}" stroke="{}" stroke-width="{}" />"#,
        svg_path_data(path),
        options.belt_color,
        options.stroke_width
    );
    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Pretty-printed JSON of the whole path.
pub fn to_json(path: &BeltPath) -> serde_json::Result<String> {
    serde_json::to_string_pretty(path)
}

/// Parse a path written by [`to_json`], rejecting parts that do not form a closed loop.
pub fn from_json(json: &str) -> serde_json::Result<BeltPath> {
    let path: BeltPath = serde_json::from_str(json)?;
    path.validate().map_err(serde_json::Error::custom)?;
    Ok(path)
}
