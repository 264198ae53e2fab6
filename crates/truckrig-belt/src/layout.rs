//! # Handle Layout
//!
//! Initial placement of pulley handles before the user arranges them, and
//! conversion of sampled handle transforms into circles.

use crate::circle::{Circle, TransformSnapshot, TransformSource};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;
use truckrig_core::constants::{DEFAULT_HANDLE_COUNT, DEFAULT_HANDLE_SIZE, DEFAULT_HANDLE_SPACING};
use truckrig_core::GeometryResult;

/// Handles laid out in a row along +X
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub count: u32,
    pub spacing: f64,
    /// Radius of every handle
    pub size: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            count: DEFAULT_HANDLE_COUNT,
            spacing: DEFAULT_HANDLE_SPACING,
            size: DEFAULT_HANDLE_SIZE,
        }
    }
}

impl RowLayout {
    pub fn new(count: u32, spacing: f64, size: f64) -> Self {
        Self {
            count,
            spacing,
            size,
        }
    }

    pub fn circles(&self) -> GeometryResult<Vec<Circle>> {
        (0..self.count)
            .map(|i| {
                let circle = Circle {
                    center: DVec2::new(i as f64 * self.spacing, 0.0),
                    radius: self.size,
                };
                circle.validate(i as usize)?;
                Ok(circle)
            })
            .collect()
    }

    /// Transform snapshots named `{prefix}_{n}`, numbered from 1.
    pub fn snapshots(&self, prefix: &str) -> Vec<TransformSnapshot> {
        (0..self.count)
            .map(|i| {
                TransformSnapshot::new(
                    format!("{}_{}", prefix, i + 1),
                    [i as f64 * self.spacing, 0.0, 0.0],
                    [self.size, self.size, 0.0],
                )
            })
            .collect()
    }
}

/// Sample every source into a circle, keeping input order.
pub fn circles_from_transforms<T: TransformSource>(sources: &[T]) -> GeometryResult<Vec<Circle>> {
    debug!("Sampling {} handle transforms", sources.len());
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| Circle::from_transform_at(source, index))
        .collect()
}
