//! # Rig Workflow
//!
//! The button-panel workflow of the belt rigger as an explicit state machine.
//! A [`BeltRig`] moves between [`RigStage`]s on [`RigAction`]s; every stage
//! carries the prompt shown to the user, and entering a stage runs its entry
//! action (generate handles, build the belt, discard state).
//!
//! ```text
//! Start --Begin--> PlaceHandles --Accept--> Built
//!   ^                |   ^  |                 |
//!   +------Back------+   +--+ Reset           +--Back--> PlaceHandles
//!   ^                                         |
//!   +------------------Reset------------------+
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};
use truckrig_belt::{
    circles_from_transforms, BeltPath, BeltPathBuilder, Circle, RowLayout, TransformSnapshot,
};
use truckrig_core::{Error, Result, RigError};
use truckrig_settings::Config;

/// Stage of the rig workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RigStage {
    /// Nothing generated yet; settings are editable
    Start,
    /// Handles exist and are being placed over the wheels
    PlaceHandles,
    /// The belt has been built from the placed handles
    Built,
}

/// User action on the button panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RigAction {
    Begin,
    Accept,
    Reset,
    Back,
}

impl RigStage {
    /// Transition table: the stage reached from `self` on `action`, if allowed.
    pub fn next(&self, action: RigAction) -> Option<RigStage> {
        use RigAction::*;
        use RigStage::*;
        match (self, action) {
            (Start, Begin) => Some(PlaceHandles),
            (PlaceHandles, Accept) => Some(Built),
            (PlaceHandles, Reset) => Some(PlaceHandles),
            (PlaceHandles, Back) => Some(Start),
            (Built, Back) => Some(PlaceHandles),
            (Built, Reset) => Some(Start),
            _ => None,
        }
    }

    pub fn can_apply(&self, action: RigAction) -> bool {
        self.next(action).is_some()
    }

    /// Text shown in the prompt box while in this stage.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Start => " - Welcome!\n - Press [Begin] to start building your belt rig.",
            Self::PlaceHandles => {
                " - Spread these circles on top of each wheel.\n - Press [Accept] to build the belt."
            }
            Self::Built => " - The belt is built.\n - Press [Back] to adjust the handles.",
        }
    }

    /// Settings may only change while no handles are out.
    pub fn panel_enabled(&self) -> bool {
        matches!(self, Self::Start | Self::Built)
    }
}

impl fmt::Display for RigStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::PlaceHandles => write!(f, "PlaceHandles"),
            Self::Built => write!(f, "Built"),
        }
    }
}

impl fmt::Display for RigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin => write!(f, "Begin"),
            Self::Accept => write!(f, "Accept"),
            Self::Reset => write!(f, "Reset"),
            Self::Back => write!(f, "Back"),
        }
    }
}

/// A belt rig in progress
#[derive(Debug, Clone)]
pub struct BeltRig {
    config: Config,
    stage: RigStage,
    handles: Vec<TransformSnapshot>,
    circles: Vec<Circle>,
    path: Option<BeltPath>,
}

impl BeltRig {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stage: RigStage::Start,
            handles: Vec::new(),
            circles: Vec::new(),
            path: None,
        }
    }

    pub fn stage(&self) -> RigStage {
        self.stage
    }

    pub fn prompt(&self) -> &'static str {
        self.stage.prompt()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable settings, available only while the panel is enabled.
    pub fn config_mut(&mut self) -> Option<&mut Config> {
        if self.stage.panel_enabled() {
            Some(&mut self.config)
        } else {
            None
        }
    }

    pub fn handles(&self) -> &[TransformSnapshot] {
        &self.handles
    }

    /// Handles to move around; only while they are being placed.
    pub fn handles_mut(&mut self) -> Result<&mut [TransformSnapshot]> {
        if self.stage != RigStage::PlaceHandles {
            return Err(RigError::InvalidStateTransition {
                current: self.stage.to_string(),
                requested: "MoveHandles".to_string(),
            }
            .into());
        }
        Ok(&mut self.handles)
    }

    /// Circles sampled from the handles when the belt was built.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn path(&self) -> Option<&BeltPath> {
        self.path.as_ref()
    }

    fn layout(&self) -> RowLayout {
        RowLayout::new(
            self.config.belt.handle_count,
            self.config.belt.handle_spacing,
            self.config.belt.handle_size,
        )
    }

    fn next_stage(&self, action: RigAction) -> Result<RigStage> {
        self.stage.next(action).ok_or_else(|| {
            RigError::InvalidStateTransition {
                current: self.stage.to_string(),
                requested: action.to_string(),
            }
            .into()
        })
    }

    fn enter(&mut self, action: RigAction, next: RigStage) -> RigStage {
        debug!("Rig {} --{}--> {}", self.stage, action, next);
        self.stage = next;
        next
    }

    /// Apply an action, running the entry action of the stage it leads to.
    ///
    /// On error the rig stays in its current stage.
    pub fn apply(&mut self, action: RigAction) -> Result<RigStage> {
        let next = self.next_stage(action)?;

        match (self.stage, next) {
            (RigStage::Start, RigStage::PlaceHandles)
            | (RigStage::PlaceHandles, RigStage::PlaceHandles) => {
                self.handles = self.layout().snapshots(&self.config.belt.handle_group_name);
                debug!("Generated {} handles", self.handles.len());
            }
            (RigStage::PlaceHandles, RigStage::Built) => self.build()?,
            (RigStage::Built, RigStage::PlaceHandles) => {
                self.path = None;
                self.circles.clear();
            }
            (_, RigStage::Start) => {
                self.handles.clear();
                self.circles.clear();
                self.path = None;
            }
            _ => {}
        }

        Ok(self.enter(action, next))
    }

    /// Begin with handles sampled elsewhere instead of the generated row.
    pub fn begin_with(&mut self, handles: Vec<TransformSnapshot>) -> Result<RigStage> {
        let next = self.next_stage(RigAction::Begin)?;
        self.handles = handles;
        debug!("Loaded {} handles", self.handles.len());
        Ok(self.enter(RigAction::Begin, next))
    }

    fn build(&mut self) -> Result<()> {
        if self.handles.is_empty() {
            return Err(RigError::MissingHandles.into());
        }

        let circles = circles_from_transforms(&self.handles)?;
        let path = BeltPathBuilder::new().build(&circles)?;
        info!(
            "Belt built over {} handles, length {:.3}",
            circles.len(),
            path.total_length()
        );

        self.circles = circles;
        self.path = Some(path);
        Ok(())
    }
}

/// Read handle snapshots saved as a JSON list.
pub fn read_handles(path: &Path) -> Result<Vec<TransformSnapshot>> {
    let content = std::fs::read_to_string(path)?;
    let handles: Vec<TransformSnapshot> = serde_json::from_str(&content)
        .map_err(|e| Error::other(format!("{}: {}", path.display(), e)))?;
    info!("Read {} handles from {}", handles.len(), path.display());
    Ok(handles)
}
