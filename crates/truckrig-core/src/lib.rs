//! # truckrig Core
//!
//! Core error types and shared constants for truckrig.
//! Every other crate in the workspace reports failures through the types
//! defined here.

pub mod constants;
pub mod error;

pub use error::{Error, GeometryError, GeometryResult, Result, RigError};
