use egui::{CursorIcon, Pos2};
use log::debug;

use crate::command::Command;
use crate::document::Document;
use crate::drag_path::PathRecorder;
use crate::element::{ANCHOR_SIZE, Shape, ShapeKind};
use crate::geometry::hit_testing::{self, Grab};
use crate::tools::Tool;
use crate::widgets::Corner;

/// What the current pointer gesture is doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Dragging out a new shape from `origin`
    Creating { index: usize, origin: Pos2 },
    /// Dragging a shape body
    Moving { index: usize, last_pos: Pos2 },
    /// Dragging one of a shape's anchors
    Resizing {
        index: usize,
        corner: Corner,
        last_pos: Pos2,
    },
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Creating { .. } => "Creating",
            Self::Moving { .. } => "Moving",
            Self::Resizing { .. } => "Resizing",
        }
    }
}

/// The single canvas tool: press on empty space creates, press on a shape
/// moves it, press on an anchor resizes it.
#[derive(Debug, Clone)]
pub struct ShapeTool {
    state: InteractionState,
    kind: ShapeKind,
    anchor_size: f32,
    recorder: PathRecorder,
}

impl Default for ShapeTool {
    fn default() -> Self {
        Self::new(ShapeKind::default(), ANCHOR_SIZE)
    }
}

impl ShapeTool {
    pub fn new(kind: ShapeKind, anchor_size: f32) -> Self {
        Self {
            state: InteractionState::Idle,
            kind,
            anchor_size,
            recorder: PathRecorder::new(),
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Kind used for shapes created from now on
    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    pub fn anchor_size(&self) -> f32 {
        self.anchor_size
    }

    /// Index of the shape the current gesture manipulates
    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Creating { index, .. }
            | InteractionState::Moving { index, .. }
            | InteractionState::Resizing { index, .. } => Some(index),
        }
    }

    /// Points recorded so far for the current move gesture
    pub fn recorded_points(&self) -> &[Pos2] {
        self.recorder.points()
    }

    fn transition(&mut self, next: InteractionState) {
        debug!("{} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        "Shape"
    }

    fn on_pointer_down(&mut self, pos: Pos2, doc: &Document) -> Option<Command> {
        self.recorder.start(pos);

        match doc.shape_at(pos, self.anchor_size) {
            Some((index, Grab::Anchor(corner))) => {
                self.transition(InteractionState::Resizing { index, corner, last_pos: pos });
                None
            }
            Some((index, Grab::Body)) => {
                self.transition(InteractionState::Moving { index, last_pos: pos });
                None
            }
            None => {
                // AddShape appends, so the new shape lands at the current length
                let index = doc.shapes().len();
                self.transition(InteractionState::Creating { index, origin: pos });
                Some(Command::AddShape(Shape::at(self.kind, pos)))
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, _doc: &Document) -> Option<Command> {
        match &mut self.state {
            InteractionState::Idle => None,
            InteractionState::Creating { index, origin } => Some(Command::SetBounds {
                index: *index,
                from: *origin,
                to: pos,
            }),
            InteractionState::Moving { index, last_pos } => {
                let delta = pos - *last_pos;
                *last_pos = pos;
                let index = *index;
                self.recorder.record(pos);
                Some(Command::Translate { index, delta })
            }
            InteractionState::Resizing { index, corner, last_pos } => {
                let delta = pos - *last_pos;
                *last_pos = pos;
                Some(Command::ResizeCorner {
                    index: *index,
                    corner: *corner,
                    delta,
                })
            }
        }
    }

    fn on_pointer_up(&mut self, _pos: Pos2, doc: &Document) -> Option<Command> {
        let command = match self.state {
            InteractionState::Moving { .. } if !self.recorder.is_empty() => {
                Some(Command::CommitDragPath(self.recorder.to_drag_path()))
            }
            InteractionState::Creating { index, .. }
                if doc.shape(index).is_some_and(Shape::is_degenerate) =>
            {
                Some(Command::DiscardShape { index })
            }
            _ => None,
        };

        self.recorder.clear();
        self.transition(InteractionState::Idle);
        command
    }

    fn hover_cursor(&self, pos: Pos2, doc: &Document) -> CursorIcon {
        doc.shapes()
            .iter()
            .map(Shape::rect)
            .find(|&bounds| hit_testing::is_near_anchor(bounds, pos, self.anchor_size))
            .and_then(|bounds| hit_testing::anchor_at(bounds, pos, self.anchor_size))
            .map_or(CursorIcon::Default, |corner| corner.cursor_icon())
    }

    fn reset(&mut self) {
        self.recorder.clear();
        self.state = InteractionState::Idle;
    }
}
