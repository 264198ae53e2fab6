//! # Circle Primitives
//!
//! Pulley circles and the two derived circles used by the tangent solver.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use truckrig_core::constants::{COINCIDENT_EPSILON, DIFFERENCE_RADIUS_EPSILON};
use truckrig_core::{GeometryError, GeometryResult};

/// A live position + scale source a circle can be sampled from.
///
/// The working plane is XY; the z component of the translation is ignored and
/// the radius is taken from the absolute X scale.
pub trait TransformSource {
    fn translate(&self) -> DVec3;
    fn scale_x(&self) -> f64;
}

/// Snapshot of a handle transform taken at invocation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSnapshot {
    /// Name of the handle the snapshot was taken from
    #[serde(default)]
    pub name: String,
    pub translate: [f64; 3],
    pub scale: [f64; 3],
}

impl TransformSnapshot {
    pub fn new(name: impl Into<String>, translate: [f64; 3], scale: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            translate,
            scale,
        }
    }
}

impl TransformSource for TransformSnapshot {
    fn translate(&self) -> DVec3 {
        DVec3::from_array(self.translate)
    }

    fn scale_x(&self) -> f64 {
        self.scale[0]
    }
}

/// A circle in the working plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    /// Create a circle, rejecting non-finite centers and radii that are not > 0.
    pub fn new(center: DVec2, radius: f64) -> GeometryResult<Self> {
        let circle = Self { center, radius };
        circle.validate(0)?;
        Ok(circle)
    }

    /// Sample a circle from a transform source.
    pub fn from_transform<T: TransformSource + ?Sized>(source: &T) -> GeometryResult<Self> {
        Self::from_transform_at(source, 0)
    }

    /// Sample a circle from the `index`-th of several transform sources.
    pub fn from_transform_at<T: TransformSource + ?Sized>(
        source: &T,
        index: usize,
    ) -> GeometryResult<Self> {
        let circle = Self {
            center: source.translate().truncate(),
            radius: source.scale_x().abs(),
        };
        circle.validate(index)?;
        Ok(circle)
    }

    /// Check the circle invariant, reporting `index` as its input position.
    pub fn validate(&self, index: usize) -> GeometryResult<()> {
        if !self.center.is_finite() {
            return Err(GeometryError::InvalidCircle {
                index,
                reason: format!("center {:?} is not finite", self.center),
            });
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::InvalidCircle {
                index,
                reason: format!("radius {} must be a finite value > 0", self.radius),
            });
        }
        Ok(())
    }

    /// Circle centered halfway between both centers, passing through both.
    pub fn bisector_circle(&self, other: &Circle) -> Circle {
        let half = (other.center - self.center) * 0.5;
        Circle {
            center: self.center + half,
            radius: half.length(),
        }
    }

    /// Circle at this center with the radius difference of both circles.
    ///
    /// The radius is floored to `DIFFERENCE_RADIUS_EPSILON` so equal circles
    /// still produce a solvable construction.
    pub fn difference_circle(&self, other: &Circle) -> Circle {
        Circle {
            center: self.center,
            radius: (self.radius - other.radius)
                .abs()
                .max(DIFFERENCE_RADIUS_EPSILON),
        }
    }

    /// Intersect two circles, returning `(pos, neg)`.
    ///
    /// With `(dx, dy) = other.center - self.center`, `pos` lies on the
    /// `(dy, -dx)` side of the line of centers and `neg` on the opposite side.
    pub fn intersect(&self, other: &Circle) -> GeometryResult<(DVec2, DVec2)> {
        let delta = other.center - self.center;
        let d = delta.length();
        if d < COINCIDENT_EPSILON {
            return Err(GeometryError::degenerate(format!(
                "circles at {:?} and {:?} are concentric",
                self.center, other.center
            )));
        }

        let (r0, r1) = (self.radius, other.radius);
        let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
        // r0^2 - a^2 factored so the near-tangent case keeps its precision
        let h_sq = (r0 + a) * (r1 * r1 - (d - r0) * (d - r0)) / (2.0 * d);

        let scale = r0.max(r1).max(d);
        if h_sq < -1e-9 * scale * scale || !h_sq.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "circles at {:?} (r={}) and {:?} (r={}) do not intersect",
                self.center, r0, other.center, r1
            )));
        }
        let h = h_sq.max(0.0).sqrt();

        let mid = self.center + delta * (a / d);
        let offset = DVec2::new(delta.y, -delta.x) * (h / d);
        Ok((mid + offset, mid - offset))
    }

    /// Point on the perimeter along a unit direction.
    pub fn point_at(&self, direction: DVec2) -> DVec2 {
        self.center + direction * self.radius
    }

    pub fn contains_point(&self, point: DVec2, tolerance: f64) -> bool {
        self.center.distance(point) <= self.radius + tolerance
    }

    /// True when the discs share any area (including containment).
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}
