//! Shared numeric constants

/// Minimum radius of a difference circle. Keeps equal-size pulleys solvable:
/// the epsilon circle still meets the bisector circle at the parallel tangent.
///
/// The floor is absolute, so it sets a scale limit. Equal pulleys tilt their
/// tangent by about `1e-4 / distance` radians, and pulleys whose centers are
/// closer than `1e-4` cannot be solved because the bisector circle no longer
/// reaches the floored difference circle. Model in units where pulleys are
/// well above that size.
pub const DIFFERENCE_RADIUS_EPSILON: f64 = 1e-4;

/// Center distances below this are treated as coincident.
pub const COINCIDENT_EPSILON: f64 = 1e-9;

/// Arcs whose end points are closer than this are skipped when drawing.
pub const DEGENERATE_ARC_DISTANCE: f64 = 1e-6;

/// Tangents shorter than this are rejected.
pub const MIN_TANGENT_LENGTH: f64 = 1e-9;

/// Slicer polylines push contact points slightly outside the pulley.
pub const SLICER_EXTRAPOLATION: f64 = 1.001;

/// Default distance between generated handles.
pub const DEFAULT_HANDLE_SPACING: f64 = 50.0;

/// Default radius of generated handles.
pub const DEFAULT_HANDLE_SIZE: f64 = 15.0;

/// Default number of generated handles.
pub const DEFAULT_HANDLE_COUNT: u32 = 5;

/// Default name of the group holding generated handles.
pub const DEFAULT_HANDLE_GROUP: &str = "belt_handles_group";
