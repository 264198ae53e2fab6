//! Configuration and settings management for truckrig
//!
//! Provides configuration file handling, validation and the tuning panel
//! schema for the rig settings. Supports JSON and TOML file formats stored
//! in the platform config directory.
//!
//! Configuration is organized into two sections:
//! - Belt rig settings (handle row defaults, handle group name)
//! - Render settings (sampling resolution, drawing and export options)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::panel::{FieldSpec, FieldValue, Tunable, Widget};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};
use truckrig_core::constants::{
    DEFAULT_HANDLE_COUNT, DEFAULT_HANDLE_GROUP, DEFAULT_HANDLE_SIZE, DEFAULT_HANDLE_SPACING,
};

/// Output format for built belts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Standalone SVG drawing
    #[default]
    Svg,
    /// Serialized belt path
    Json,
}

impl ExportFormat {
    pub const CHOICES: &'static [&'static str] = &["svg", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Belt rig settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeltRigSettings {
    /// Number of handles generated in the initial row
    pub handle_count: u32,
    /// Distance between generated handles
    pub handle_spacing: f64,
    /// Radius of generated handles
    pub handle_size: f64,
    /// Name of the group holding the handles
    pub handle_group_name: String,
}

impl Default for BeltRigSettings {
    fn default() -> Self {
        Self {
            handle_count: DEFAULT_HANDLE_COUNT,
            handle_spacing: DEFAULT_HANDLE_SPACING,
            handle_size: DEFAULT_HANDLE_SIZE,
            handle_group_name: DEFAULT_HANDLE_GROUP.to_string(),
        }
    }
}

/// Render and export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Segments per sampled arc
    pub arc_segments: u32,
    /// Points per sampled tangent, end points included
    pub tangent_points: u32,
    /// Draw pulley outlines in SVG output
    pub draw_pulleys: bool,
    pub stroke_width: f64,
    pub export_format: ExportFormat,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            arc_segments: 16,
            tangent_points: 5,
            draw_pulleys: true,
            stroke_width: 1.0,
            export_format: ExportFormat::Svg,
        }
    }
}

/// Panel schema for [`Config`], in display order
pub const CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "belt.handle_count",
        "Handles",
        Widget::IntSlider { min: 2, max: 64 },
    )
    .in_group("Handles"),
    FieldSpec::new(
        "belt.handle_spacing",
        "Spacing",
        Widget::FloatSlider {
            min: 0.01,
            max: 10_000.0,
        },
    )
    .in_group("Handles"),
    FieldSpec::new(
        "belt.handle_size",
        "Handle size",
        Widget::FloatSlider {
            min: 0.01,
            max: 1_000.0,
        },
    )
    .in_group("Handles"),
    FieldSpec::new(
        "render.arc_segments",
        "Arc segments",
        Widget::IntSlider { min: 1, max: 256 },
    )
    .in_group("Output"),
    FieldSpec::new(
        "render.tangent_points",
        "Tangent points",
        Widget::IntSlider { min: 2, max: 64 },
    )
    .in_group("Output"),
    FieldSpec::new("render.draw_pulleys", "Draw pulleys", Widget::Toggle).in_group("Output"),
    FieldSpec::new(
        "render.stroke_width",
        "Stroke width",
        Widget::FloatSlider {
            min: 0.01,
            max: 100.0,
        },
    )
    .in_group("Output"),
    FieldSpec::new(
        "render.export_format",
        "Format",
        Widget::Dropdown {
            choices: ExportFormat::CHOICES,
        },
    )
    .in_group("Output"),
    FieldSpec::new("belt.handle_group_name", "Group name", Widget::TextField),
];

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub belt: BeltRigSettings,
    pub render: RenderSettings,
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> SettingsResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("toml") => Ok(FileFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into()),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/truckrig/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("truckrig").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::SaveError(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate every panel field plus the constraints the widgets cannot express.
    pub fn validate(&self) -> SettingsResult<()> {
        for spec in CONFIG_FIELDS {
            let value = self
                .field(spec.key)
                .ok_or_else(|| ConfigError::UnknownKey(spec.key.to_string()))?;
            spec.check(&value)?;
        }

        if self.belt.handle_group_name.trim().is_empty() {
            return Err(SettingsError::invalid(
                "belt.handle_group_name",
                "must not be empty",
            ));
        }

        Ok(())
    }
}

impl Tunable for Config {
    fn schema() -> &'static [FieldSpec] {
        CONFIG_FIELDS
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "belt.handle_count" => FieldValue::Int(i64::from(self.belt.handle_count)),
            "belt.handle_spacing" => FieldValue::Float(self.belt.handle_spacing),
            "belt.handle_size" => FieldValue::Float(self.belt.handle_size),
            "belt.handle_group_name" => FieldValue::Text(self.belt.handle_group_name.clone()),
            "render.arc_segments" => FieldValue::Int(i64::from(self.render.arc_segments)),
            "render.tangent_points" => FieldValue::Int(i64::from(self.render.tangent_points)),
            "render.draw_pulleys" => FieldValue::Bool(self.render.draw_pulleys),
            "render.stroke_width" => FieldValue::Float(self.render.stroke_width),
            "render.export_format" => {
                FieldValue::Text(self.render.export_format.as_str().to_string())
            }
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, key: &str, value: FieldValue) -> SettingsResult<()> {
        let spec = Self::spec(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        spec.check(&value)?;

        let to_u32 = |v: i64| {
            u32::try_from(v).map_err(|_| ConfigError::ValueOutOfRange {
                key: key.to_string(),
                value: v.to_string(),
            })
        };

        match (key, value) {
            ("belt.handle_count", FieldValue::Int(v)) => self.belt.handle_count = to_u32(v)?,
            ("belt.handle_spacing", FieldValue::Float(v)) => self.belt.handle_spacing = v,
            ("belt.handle_size", FieldValue::Float(v)) => self.belt.handle_size = v,
            ("belt.handle_group_name", FieldValue::Text(v)) => {
                if v.trim().is_empty() {
                    return Err(SettingsError::invalid(key, "must not be empty"));
                }
                self.belt.handle_group_name = v;
            }
            ("render.arc_segments", FieldValue::Int(v)) => self.render.arc_segments = to_u32(v)?,
            ("render.tangent_points", FieldValue::Int(v)) => {
                self.render.tangent_points = to_u32(v)?
            }
            ("render.draw_pulleys", FieldValue::Bool(v)) => self.render.draw_pulleys = v,
            ("render.stroke_width", FieldValue::Float(v)) => self.render.stroke_width = v,
            ("render.export_format", FieldValue::Text(v)) => {
                self.render.export_format = v.parse()?
            }
            (key, _) => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }

        debug!("Set {}", key);
        Ok(())
    }
}
