//! Command line interface
//!
//! `build` wraps a belt around handle snapshots (or the default handle row)
//! and writes SVG or JSON, `panel` prints the tuning panel and `init-config`
//! writes a config file.

use crate::rig::{self, BeltRig, RigAction};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use truckrig_belt::{
    belt_polyline, svg_document, to_json, BeltPath, Resolution, SvgOptions, TransformSnapshot,
};
use truckrig_settings::{Config, ExportFormat, Panel, Tunable};

#[derive(Parser, Debug)]
#[command(name = "truckrig")]
#[command(about = "Wraps a belt or tread around a set of pulleys")]
#[command(version, long_version = crate::LONG_VERSION)]
pub struct Cli {
    /// Config file (JSON or TOML); defaults to the platform config directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override a setting, e.g. `--set belt.handle_count=7`
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a belt and write it as SVG or JSON
    Build {
        /// JSON list of handle transform snapshots; the default handle row is used otherwise
        #[arg(short = 'i', long)]
        handles: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format, overriding the config
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print the tuning panel with the current settings
    Panel {
        /// Print the panel schema as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with default settings
    InitConfig {
        /// Target file; the platform config location when omitted
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Svg,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => ExportFormat::Svg,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

/// Machine-readable build result
#[derive(Debug, Serialize)]
pub struct BeltReport<'a> {
    pub order: Vec<usize>,
    pub total_length: f64,
    /// Part positions whose tangents cross
    pub crossings: Vec<(usize, usize)>,
    /// Full clockwise turns of the belt; above 1 when it doubles back
    pub winding: u32,
    pub path: &'a BeltPath,
    /// Closed belt outline sampled at the configured resolution
    pub polyline: Vec<[f64; 2]>,
    /// Per-arc wedges used to trim the pulley outlines
    pub slicers: Vec<[[f64; 2]; 5]>,
}

impl<'a> BeltReport<'a> {
    pub fn new(path: &'a BeltPath, resolution: Resolution) -> Self {
        Self {
            order: path.order(),
            total_length: path.total_length(),
            crossings: path.crossing_tangents(),
            winding: path.winding(),
            path,
            polyline: belt_polyline(path, resolution)
                .into_iter()
                .map(|p| p.to_array())
                .collect(),
            slicers: path
                .arcs()
                .map(|arc| arc.slicer_points().map(|p| p.to_array()))
                .collect(),
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Build {
            handles,
            output,
            format,
        } => {
            let config = load_config(&cli)?;
            let handles = handles.as_deref().map(read_handles).transpose()?;
            let rig = build_rig(config, handles)?;
            let format = format.map(ExportFormat::from);
            let text = render(&rig, format)?;
            write_output(output.as_deref(), &text)
        }
        Commands::Panel { json } => {
            let config = load_config(&cli)?;
            let panel = Panel::build("Belt Rig", &config);
            if *json {
                println!("{}", serde_json::to_string_pretty(&panel)?);
            } else {
                print!("{}", panel.render_text());
            }
            Ok(())
        }
        Commands::InitConfig { path, force } => {
            let path = match path {
                Some(path) => path.clone(),
                None => Config::default_path()?,
            };
            if path.exists() && !force {
                bail!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                );
            }
            let config = apply_overrides(Config::default(), &cli.overrides)?;
            config.save_to_file(&path)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Config from `--config`, the default location or built-in defaults, with `--set` applied.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(e) => {
                warn!("{}; using default settings", e);
                Config::default()
            }
        },
    };
    apply_overrides(config, &cli.overrides)
}

pub fn apply_overrides(mut config: Config, overrides: &[String]) -> anyhow::Result<Config> {
    for item in overrides {
        let Some((key, value)) = item.split_once('=') else {
            bail!("override '{}' is not KEY=VALUE", item);
        };
        config
            .set_from_str(key.trim(), value)
            .with_context(|| format!("applying override '{}'", item))?;
    }
    Ok(config)
}

pub fn read_handles(path: &Path) -> anyhow::Result<Vec<TransformSnapshot>> {
    rig::read_handles(path).with_context(|| format!("reading handles {}", path.display()))
}

/// Run the rig workflow through to a built belt.
pub fn build_rig(
    config: Config,
    handles: Option<Vec<TransformSnapshot>>,
) -> anyhow::Result<BeltRig> {
    let mut rig = BeltRig::new(config);
    match handles {
        Some(handles) => rig.begin_with(handles)?,
        None => rig.apply(RigAction::Begin)?,
    };
    rig.apply(RigAction::Accept)?;
    Ok(rig)
}

/// Render a built rig in the requested format, or the configured one.
pub fn render(rig: &BeltRig, format: Option<ExportFormat>) -> anyhow::Result<String> {
    let Some(path) = rig.path() else {
        bail!("the belt has not been built");
    };
    let render = &rig.config().render;

    let text = match format.unwrap_or(render.export_format) {
        ExportFormat::Svg => {
            let options = SvgOptions {
                stroke_width: render.stroke_width,
                draw_pulleys: render.draw_pulleys,
                ..SvgOptions::default()
            };
            svg_document(path, rig.circles(), &options)
        }
        ExportFormat::Json => {
            let resolution = Resolution {
                arc_segments: render.arc_segments as usize,
                tangent_points: render.tangent_points as usize,
            };
            serde_json::to_string_pretty(&BeltReport::new(path, resolution))?
        }
    };
    Ok(text)
}

fn write_output(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
