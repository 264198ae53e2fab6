//! # Belt Arcs
//!
//! The stretch of belt lying on a pulley, between the contact point of the
//! incoming tangent and the contact point of the outgoing tangent. The belt
//! wraps pulleys clockwise, so arcs run in the negative angular direction.

use crate::circle::Circle;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use truckrig_core::constants::{DEGENERATE_ARC_DISTANCE, SLICER_EXTRAPOLATION};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeltArc {
    /// Index of the circle the arc lies on
    pub circle: usize,
    pub center: DVec2,
    pub radius: f64,
    /// Entry contact point
    pub start: DVec2,
    /// Exit contact point
    pub end: DVec2,
}

impl BeltArc {
    pub fn new(circle_index: usize, circle: &Circle, start: DVec2, end: DVec2) -> Self {
        Self {
            circle: circle_index,
            center: circle.center,
            radius: circle.radius,
            start,
            end,
        }
    }

    pub fn start_angle(&self) -> f64 {
        let v = self.start - self.center;
        v.y.atan2(v.x)
    }

    pub fn end_angle(&self) -> f64 {
        let v = self.end - self.center;
        v.y.atan2(v.x)
    }

    /// Clockwise angle from start to end, in `[0, 2π)`.
    pub fn sweep(&self) -> f64 {
        (self.start_angle() - self.end_angle()).rem_euclid(TAU)
    }

    /// Arcs whose end points (nearly) coincide are not drawn.
    pub fn is_degenerate(&self) -> bool {
        self.start.distance(self.end) < DEGENERATE_ARC_DISTANCE
    }

    /// Arc length; zero for degenerate arcs.
    pub fn length(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            self.radius * self.sweep()
        }
    }

    /// Points along the arc from start to end, `segments + 1` in total.
    pub fn sample_points(&self, segments: usize) -> Vec<DVec2> {
        let segments = segments.max(1);
        let start_angle = self.start_angle();
        let sweep = self.sweep();

        (0..=segments)
            .map(|i| {
                let angle = start_angle - sweep * (i as f64 / segments as f64);
                self.center + DVec2::new(angle.cos(), angle.sin()) * self.radius
            })
            .collect()
    }

    /// Wedge polyline through the center used to trim the pulley outline.
    ///
    /// Contact points are pushed slightly outside the circle so the cut
    /// fully crosses the outline.
    pub fn slicer_points(&self) -> [DVec2; 5] {
        let start = self.center + (self.start - self.center) * SLICER_EXTRAPOLATION;
        let end = self.center + (self.end - self.center) * SLICER_EXTRAPOLATION;
        [
            start,
            (self.center + start) * 0.5,
            self.center,
            (self.center + end) * 0.5,
            end,
        ]
    }
}
