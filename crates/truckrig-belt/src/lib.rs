//! # truckrig Belt
//!
//! Builds the closed curve of a belt or tread wrapped around a set of
//! pulleys: circular arcs on each pulley joined by external tangent lines.
//!
//! ## Layers
//!
//! ```text
//! Circle (center + radius, sampled from handle transforms)
//!   └── Tangent solver (bisector circle ∩ difference circle)
//!         └── Path builder (nearest-angle traversal, arcs between tangents)
//!               ├── Render (primitives, polylines, lyon path)
//!               └── Export (SVG, JSON)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use truckrig_belt::{build_belt_path, RowLayout};
//!
//! let circles = RowLayout::default().circles()?;
//! let path = build_belt_path(&circles)?;
//! println!("belt length: {:.2}", path.total_length());
//! ```
//!
//! All computations are pure and synchronous; callers take a consistent
//! snapshot of the pulley positions before building.

pub mod arc;
pub mod circle;
pub mod export;
pub mod layout;
pub mod path;
pub mod render;
pub mod tangent;

pub use arc::BeltArc;
pub use circle::{Circle, TransformSnapshot, TransformSource};
pub use export::{svg_document, svg_path_data, to_json, SvgOptions};
pub use layout::{circles_from_transforms, RowLayout};
pub use path::{build_belt_path, BeltPath, BeltPathBuilder, PathPart, Primitive};
pub use render::{belt_polyline, primitive_polylines, to_lyon_path, Resolution};
pub use tangent::{external_tangent_direction, TangentConstruction, TangentLine, TangentOrientation};
