use egui::{CursorIcon, Pos2};

use crate::command::Command;
use crate::document::Document;

/// Tool trait defines how pointer gestures on the canvas become commands
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas.
    /// Return a Command to **begin** an action if applicable, or None.
    fn on_pointer_down(&mut self, pos: Pos2, doc: &Document) -> Option<Command>;

    /// Handle pointer drag while the primary button is held down.
    fn on_pointer_move(&mut self, pos: Pos2, doc: &Document) -> Option<Command>;

    /// Handle pointer release.
    /// Return a Command to **finalize** an action if applicable.
    fn on_pointer_up(&mut self, pos: Pos2, doc: &Document) -> Option<Command>;

    /// Cursor to show while hovering without a button held
    fn hover_cursor(&self, _pos: Pos2, _doc: &Document) -> CursorIcon {
        CursorIcon::Default
    }

    /// Drop any in-progress gesture, e.g. after the document was replaced
    fn reset(&mut self);
}

mod shape_tool;
pub use shape_tool::{InteractionState, ShapeTool};
