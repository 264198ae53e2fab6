//! # External Tangent Solver
//!
//! Finds the outer tangent between two pulleys using the bisector circle /
//! difference circle construction: the tangent normal on the larger circle
//! points from its center to one of the two points where both construction
//! circles meet.

use crate::circle::Circle;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use truckrig_core::constants::{COINCIDENT_EPSILON, MIN_TANGENT_LENGTH};
use truckrig_core::{GeometryError, GeometryResult};

/// Which intersection of the construction circles was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TangentOrientation {
    /// The first circle is strictly larger: `pos` solution from its center
    Forward,
    /// The second circle is the larger (or equal) one: `neg` solution from its center
    Reversed,
}

/// Intermediate values of the tangent construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentConstruction {
    pub orientation: TangentOrientation,
    /// Center of the larger circle (`main`)
    pub main_center: DVec2,
    pub bisector: Circle,
    pub difference: Circle,
    pub pos: DVec2,
    pub neg: DVec2,
}

impl TangentConstruction {
    /// Run the construction for the ordered pair `(a, b)`.
    pub fn solve(a: &Circle, b: &Circle) -> GeometryResult<Self> {
        if a.center.distance(b.center) < COINCIDENT_EPSILON {
            return Err(GeometryError::degenerate(format!(
                "circles share the center {:?}",
                a.center
            )));
        }

        let orientation = if a.radius > b.radius {
            TangentOrientation::Forward
        } else {
            TangentOrientation::Reversed
        };
        let (main, target) = match orientation {
            TangentOrientation::Forward => (a, b),
            TangentOrientation::Reversed => (b, a),
        };

        let bisector = main.bisector_circle(target);
        let difference = main.difference_circle(target);
        let (pos, neg) = bisector.intersect(&difference)?;

        Ok(Self {
            orientation,
            main_center: main.center,
            bisector,
            difference,
            pos,
            neg,
        })
    }

    /// Unit normal of the external tangent.
    pub fn direction(&self) -> GeometryResult<DVec2> {
        let point = match self.orientation {
            TangentOrientation::Forward => self.pos,
            TangentOrientation::Reversed => self.neg,
        };
        (point - self.main_center)
            .try_normalize()
            .ok_or_else(|| GeometryError::degenerate("tangent construction collapsed to a point"))
    }
}

/// Unit normal of the external tangent from `a` to `b`.
///
/// Contact points are `normal * radius + center` on each circle.
pub fn external_tangent_direction(a: &Circle, b: &Circle) -> GeometryResult<DVec2> {
    TangentConstruction::solve(a, b)?.direction()
}

/// A tangent segment running from circle `a` to circle `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentLine {
    /// Index of the circle the tangent leaves
    pub from: usize,
    /// Index of the circle the tangent arrives at
    pub to: usize,
    /// Unit normal shared by both contact points
    pub normal: DVec2,
    /// Unit direction of travel from `start` to `end`
    pub direction: DVec2,
    pub start: DVec2,
    pub end: DVec2,
    pub length: f64,
}

impl TangentLine {
    /// Build the external tangent between two circles.
    pub fn between(a: &Circle, b: &Circle) -> GeometryResult<Self> {
        Self::between_indexed(a, b, 0, 1)
    }

    /// Build the external tangent, tagging it with the circles' input indices.
    pub fn between_indexed(a: &Circle, b: &Circle, from: usize, to: usize) -> GeometryResult<Self> {
        let normal = external_tangent_direction(a, b)?;
        let start = a.point_at(normal);
        let end = b.point_at(normal);

        let base = end - start;
        let length = base.length();
        if !length.is_finite() || length < MIN_TANGENT_LENGTH {
            return Err(GeometryError::degenerate(format!(
                "tangent between circles {} and {} has zero length",
                from, to
            )));
        }

        Ok(Self {
            from,
            to,
            normal,
            direction: base / length,
            start,
            end,
            length,
        })
    }

    /// Angle in `[0, π]` between the line direction and a guide direction.
    pub fn angle_to(&self, guide: DVec2) -> f64 {
        let guide = guide.normalize_or_zero();
        self.direction.dot(guide).clamp(-1.0, 1.0).acos()
    }

    /// Evenly spaced points from `start` to `end`, both included.
    pub fn sample_points(&self, count: usize) -> Vec<DVec2> {
        match count {
            0 => Vec::new(),
            1 => vec![self.start],
            _ => (0..count)
                .map(|i| self.start + self.direction * (self.length * i as f64 / (count - 1) as f64))
                .collect(),
        }
    }

    /// True when both segments cross at a point interior to each.
    pub fn crosses(&self, other: &TangentLine) -> bool {
        fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
            (b - a).perp_dot(c - a)
        }

        let d1 = orient(self.start, self.end, other.start);
        let d2 = orient(self.start, self.end, other.end);
        let d3 = orient(other.start, other.end, self.start);
        let d4 = orient(other.start, other.end, self.end);

        d1 * d2 < 0.0 && d3 * d4 < 0.0
    }
}
