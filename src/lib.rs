//! # truckrig
//!
//! Builds the closed path of a belt or tank tread wrapped around a set of
//! pulleys, and drives the rigging workflow around it.
//!
//! ## Architecture
//!
//! truckrig is organized as a workspace with multiple crates:
//!
//! 1. **truckrig-core** - Error types and shared constants
//! 2. **truckrig-belt** - Circle model, tangent solver, path builder, rendering and export
//! 3. **truckrig-settings** - Configuration files and the tuning panel schema
//! 4. **truckrig** - Rig workflow state machine and the command line tool

pub mod cli;
pub mod rig;

pub use truckrig_belt::{
    build_belt_path, BeltArc, BeltPath, BeltPathBuilder, Circle, PathPart, Primitive, RowLayout,
    TangentLine, TransformSnapshot,
};
pub use truckrig_core::{Error, GeometryError, Result, RigError};
pub use truckrig_settings::{Config, Panel, Tunable};

pub use cli::{Cli, Commands};
pub use rig::{BeltRig, RigAction, RigStage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version string with build date, for `--version`
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so built files can be piped from stdout
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
