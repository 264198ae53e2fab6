//! # Belt Rendering
//!
//! Turns a belt path into drawable geometry: per-primitive polylines for a
//! scene builder, one closed polyline for the whole belt, and a lyon path.

use crate::path::{BeltPath, Primitive};
use glam::DVec2;
use lyon::math::point;
use lyon::path::Path;

/// Sampling resolution for drawable output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Segments per arc
    pub arc_segments: usize,
    /// Points per tangent, end points included
    pub tangent_points: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            arc_segments: 16,
            tangent_points: 5,
        }
    }
}

impl Primitive {
    pub fn points(&self, resolution: Resolution) -> Vec<DVec2> {
        match self {
            Primitive::Arc(arc) => arc.sample_points(resolution.arc_segments),
            Primitive::Segment(tangent) => tangent.sample_points(resolution.tangent_points.max(2)),
        }
    }
}

/// One polyline per drawable primitive, in path order.
pub fn primitive_polylines(path: &BeltPath, resolution: Resolution) -> Vec<Vec<DVec2>> {
    path.primitives()
        .iter()
        .map(|primitive| primitive.points(resolution))
        .collect()
}

/// The whole belt as a single closed ring of points (first point not repeated).
pub fn belt_polyline(path: &BeltPath, resolution: Resolution) -> Vec<DVec2> {
    let mut ring: Vec<DVec2> = Vec::new();
    for primitive in path.primitives() {
        for p in primitive.points(resolution) {
            if ring.last().is_none_or(|last| last.distance(p) > 1e-9) {
                ring.push(p);
            }
        }
    }
    if ring.len() > 1 && ring[0].distance(ring[ring.len() - 1]) <= 1e-9 {
        ring.pop();
    }
    ring
}

/// Closed lyon path following the belt polyline.
pub fn to_lyon_path(path: &BeltPath, resolution: Resolution) -> Path {
    let ring = belt_polyline(path, resolution);
    let mut builder = Path::builder();

    if let Some((first, rest)) = ring.split_first() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in rest {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(true);
    }

    builder.build()
}
