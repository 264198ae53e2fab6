//! # Belt Path Traversal
//!
//! Wraps a belt around a set of pulleys. Starting from the leftmost circle,
//! each step takes the external tangent whose direction continues the
//! previous one with the smallest turn. The heuristic is greedy: it keeps a
//! consistent turning sense for convex chains of pulleys but is not
//! guaranteed to avoid crossings for arbitrary layouts. Crossings are
//! reported, not corrected.

use crate::arc::BeltArc;
use crate::circle::Circle;
use crate::tangent::TangentLine;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::{debug, info, warn};
use truckrig_core::{GeometryError, GeometryResult};

/// One circle's share of the belt: the arc on it and the tangent leaving it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPart {
    pub circle: usize,
    pub arc: BeltArc,
    pub tangent: TangentLine,
}

/// Something a scene builder or renderer can draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Arc(BeltArc),
    Segment(TangentLine),
}

/// Closed belt path; the last part's tangent leads back to the first part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltPath {
    parts: Vec<PathPart>,
}

impl BeltPath {
    pub fn parts(&self) -> &[PathPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Circle indices in visiting order.
    pub fn order(&self) -> Vec<usize> {
        self.parts.iter().map(|p| p.circle).collect()
    }

    pub fn tangents(&self) -> impl Iterator<Item = &TangentLine> {
        self.parts.iter().map(|p| &p.tangent)
    }

    pub fn arcs(&self) -> impl Iterator<Item = &BeltArc> {
        self.parts.iter().map(|p| &p.arc)
    }

    /// Find the part whose arc lies on the given circle.
    pub fn part_for_circle(&self, circle: usize) -> Option<&PathPart> {
        self.parts.iter().find(|p| p.circle == circle)
    }

    /// Drawable primitives in path order: each arc (unless degenerate)
    /// followed by its outgoing tangent.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut primitives = Vec::with_capacity(self.parts.len() * 2);
        for part in &self.parts {
            if !part.arc.is_degenerate() {
                primitives.push(Primitive::Arc(part.arc));
            }
            primitives.push(Primitive::Segment(part.tangent));
        }
        primitives
    }

    /// Total belt length: tangents plus the arcs wrapped on the pulleys.
    pub fn total_length(&self) -> f64 {
        self.parts
            .iter()
            .map(|p| p.tangent.length + p.arc.length())
            .sum()
    }

    /// Pairs of part positions whose tangents cross each other.
    pub fn crossing_tangents(&self) -> Vec<(usize, usize)> {
        let n = self.parts.len();
        let mut crossings = Vec::new();
        for i in 0..n {
            for j in (i + 2)..n {
                // first and last tangents meet on the starting circle
                if i == 0 && j == n - 1 {
                    continue;
                }
                if self.parts[i].tangent.crosses(&self.parts[j].tangent) {
                    crossings.push((i, j));
                }
            }
        }
        crossings
    }

    /// Number of full clockwise turns the belt makes around the pulleys.
    ///
    /// A simple loop turns exactly once. Greedy orders that double back to
    /// an inner pulley wrap it from the outside and turn more than once.
    pub fn winding(&self) -> u32 {
        let sweep: f64 = self
            .arcs()
            .filter(|arc| !arc.is_degenerate())
            .map(|arc| arc.sweep())
            .sum();
        (sweep / TAU).round() as u32
    }

    /// Check that the parts form one closed loop over distinct circles.
    pub fn validate(&self) -> GeometryResult<()> {
        let n = self.parts.len();
        if n < 2 {
            return Err(GeometryError::InsufficientCircles { count: n });
        }

        for (k, part) in self.parts.iter().enumerate() {
            let next = &self.parts[(k + 1) % n];
            if part.tangent.from != part.circle || part.tangent.to != next.circle {
                return Err(GeometryError::degenerate(format!(
                    "part {} tangent runs {} -> {}, expected {} -> {}",
                    k, part.tangent.from, part.tangent.to, part.circle, next.circle
                )));
            }
            if part.arc.circle != part.circle {
                return Err(GeometryError::degenerate(format!(
                    "part {} arc lies on circle {}, expected {}",
                    k, part.arc.circle, part.circle
                )));
            }
            if self.parts[..k].iter().any(|p| p.circle == part.circle) {
                return Err(GeometryError::degenerate(format!(
                    "circle {} is visited twice",
                    part.circle
                )));
            }
        }
        Ok(())
    }
}

/// Builds belt paths from circle sets
#[derive(Debug, Clone, Copy)]
pub struct BeltPathBuilder {
    /// Initial guide direction for the first tangent
    pub guide: DVec2,
}

impl Default for BeltPathBuilder {
    fn default() -> Self {
        Self { guide: DVec2::Y }
    }
}

impl BeltPathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guide(guide: DVec2) -> Self {
        Self { guide }
    }

    /// Wrap the circles, visiting each exactly once.
    pub fn build(&self, circles: &[Circle]) -> GeometryResult<BeltPath> {
        if circles.len() < 2 {
            return Err(GeometryError::InsufficientCircles {
                count: circles.len(),
            });
        }
        for (index, circle) in circles.iter().enumerate() {
            circle.validate(index)?;
        }

        warn_on_overlaps(circles);

        let guide = self
            .guide
            .try_normalize()
            .ok_or_else(|| GeometryError::degenerate("guide direction has zero length"))?;

        let start = leftmost(circles);
        let n = circles.len();
        debug!("Wrapping {} circles starting at circle {}", n, start);

        let mut visited = vec![false; n];
        visited[start] = true;
        let mut order = vec![start];
        let mut tangents: Vec<TangentLine> = Vec::with_capacity(n);
        let mut current = start;
        let mut guide = guide;

        loop {
            let closing = order.len() == n;
            let mut best: Option<(f64, TangentLine)> = None;

            for (index, candidate) in circles.iter().enumerate() {
                let eligible = if closing {
                    index == start
                } else {
                    !visited[index]
                };
                if !eligible {
                    continue;
                }

                let tangent =
                    TangentLine::between_indexed(&circles[current], candidate, current, index)?;
                let angle = tangent.angle_to(guide);
                if best.as_ref().is_none_or(|(best_angle, _)| angle < *best_angle) {
                    best = Some((angle, tangent));
                }
            }

            let (angle, tangent) = best.ok_or(GeometryError::NoTangentFound { from: current })?;
            debug!(
                "Tangent {} -> {} (turn {:.2} deg, length {:.3})",
                tangent.from,
                tangent.to,
                angle.to_degrees(),
                tangent.length
            );

            guide = tangent.direction;
            let next = tangent.to;
            tangents.push(tangent);

            if next == start {
                break;
            }
            visited[next] = true;
            order.push(next);
            current = next;
        }

        let parts: Vec<PathPart> = order
            .iter()
            .enumerate()
            .map(|(k, &circle)| {
                let incoming = &tangents[(k + n - 1) % n];
                let outgoing = tangents[k];
                PathPart {
                    circle,
                    arc: BeltArc::new(circle, &circles[circle], incoming.end, outgoing.start),
                    tangent: outgoing,
                }
            })
            .collect();

        let path = BeltPath { parts };
        for (i, j) in path.crossing_tangents() {
            warn!(
                "Belt tangents {} -> {} and {} -> {} cross; reposition the pulleys",
                path.parts[i].tangent.from,
                path.parts[i].tangent.to,
                path.parts[j].tangent.from,
                path.parts[j].tangent.to
            );
        }
        let winding = path.winding();
        if winding > 1 {
            warn!(
                "Belt winds {} times around the pulleys in order {:?}; an inner pulley is wrapped from outside",
                winding,
                path.order()
            );
        }
        info!(
            "Built belt path over {} circles, length {:.3}",
            path.len(),
            path.total_length()
        );

        Ok(path)
    }
}

/// Build a belt path with the default upward guide direction.
pub fn build_belt_path(circles: &[Circle]) -> GeometryResult<BeltPath> {
    BeltPathBuilder::default().build(circles)
}

/// Overlapping pulleys still get a path, but rarely the one intended.
fn warn_on_overlaps(circles: &[Circle]) {
    for (i, a) in circles.iter().enumerate() {
        for (j, b) in circles.iter().enumerate().skip(i + 1) {
            if a.contains_point(b.center, 0.0) || b.contains_point(a.center, 0.0) {
                warn!("Circles {} and {} sit over each other's center", i, j);
            } else if a.overlaps(b) {
                warn!("Circles {} and {} overlap", i, j);
            }
        }
    }
}

/// Index of the circle with the smallest center x; first one wins ties.
fn leftmost(circles: &[Circle]) -> usize {
    let mut best = 0;
    for (index, circle) in circles.iter().enumerate().skip(1) {
        if circle.center.x < circles[best].center.x {
            best = index;
        }
    }
    best
}
