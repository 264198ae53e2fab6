//! truckrig Settings Crate
//!
//! Handles rig configuration, config file persistence and the declarative
//! tuning panel schema.

pub mod config;
pub mod error;
pub mod panel;

pub use config::{BeltRigSettings, Config, ExportFormat, RenderSettings, CONFIG_FIELDS};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use panel::{FieldDescriptor, FieldSpec, FieldValue, Panel, PanelGroup, Tunable, Widget};
