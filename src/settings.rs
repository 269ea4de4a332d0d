use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::element::{ANCHOR_SIZE, ShapeKind};
use crate::persistence::DEFAULT_CANVAS_FILE;
use crate::scene::DEFAULT_REDRAW_DELAY;

/// User settings restored across restarts through eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasSettings {
    /// Where Save, Reset and Load read and write the canvas
    pub save_path: PathBuf,
    /// Kind of shape created by dragging on empty canvas
    pub default_kind: ShapeKind,
    /// Side length of the corner anchors
    pub anchor_size: f32,
    /// Delay before the automatic redraw after a shape is added
    pub redraw_delay_secs: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_CANVAS_FILE),
            default_kind: ShapeKind::Rectangle,
            anchor_size: ANCHOR_SIZE,
            redraw_delay_secs: DEFAULT_REDRAW_DELAY.as_secs_f32(),
        }
    }
}

impl CanvasSettings {
    pub fn redraw_delay(&self) -> Duration {
        Duration::from_secs_f32(self.redraw_delay_secs.max(0.0))
    }
}
