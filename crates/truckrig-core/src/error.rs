//! Error handling for truckrig
//!
//! Provides error types for the layers of the rig builder:
//! - Geometry errors (circle validation, tangent construction, path traversal)
//! - Rig errors (workflow state machine violations)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by the belt path construction. Every variant is fatal to the
/// computation that produced it: geometry is pure and deterministic, so the
/// caller has to change the input (move or resize a pulley) before retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Fewer than two circles were supplied
    #[error("At least 2 circles are required to build a belt path, got {count}")]
    InsufficientCircles {
        /// The number of circles supplied.
        count: usize,
    },

    /// A circle has a non-finite center or a radius that is not > 0
    #[error("Invalid circle at index {index}: {reason}")]
    InvalidCircle {
        /// Position of the circle in the input.
        index: usize,
        /// Why the circle was rejected.
        reason: String,
    },

    /// Coincident centers, non-intersecting construction circles or zero-length tangents
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// A description of the degenerate configuration.
        reason: String,
    },

    /// The traversal could not find a tangent leaving a circle
    #[error("No tangent found leaving circle {from}")]
    NoTangentFound {
        /// Index of the circle the traversal was standing on.
        from: usize,
    },
}

impl GeometryError {
    /// Create a degenerate geometry error from a message
    pub fn degenerate(reason: impl Into<String>) -> Self {
        GeometryError::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

/// Rig workflow error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    /// Invalid state transition
    #[error("Invalid state transition from {current} on {requested}")]
    InvalidStateTransition {
        /// The current stage name.
        current: String,
        /// The requested action name.
        requested: String,
    },

    /// The rig has no handles to build a curve from
    #[error("No handles available, generate or load handles first")]
    MissingHandles,
}

/// Main error type for truckrig
///
/// A unified error type that can represent any error from the library crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Rig workflow error
    #[error(transparent)]
    Rig(#[from] RigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a rig workflow error
    pub fn is_rig_error(&self) -> bool {
        matches!(self, Error::Rig(_))
    }

    /// Check if the input geometry was degenerate
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Error::Geometry(GeometryError::DegenerateGeometry { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for pure geometry operations
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
