use egui::{Pos2, Vec2};
use log::debug;

use super::{CommandError, CommandResult};
use crate::document::Document;
use crate::drag_path::DragPath;
use crate::element::Shape;
use crate::widgets::Corner;

/// Mutations the canvas tools can apply to a document
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Appends a shape to the end of the paint order
    AddShape(Shape),
    /// Sets a shape's bounds to the rectangle spanned by two points
    SetBounds {
        index: usize,
        from: Pos2,
        to: Pos2,
    },
    /// Moves a shape by a delta
    Translate {
        index: usize,
        delta: Vec2,
    },
    /// Drags one anchor of a shape by a delta
    ResizeCorner {
        index: usize,
        corner: Corner,
        delta: Vec2,
    },
    /// Keeps a finished move trail
    CommitDragPath(DragPath),
    /// Removes a shape
    DiscardShape {
        index: usize,
    },
    /// Removes all shapes and trails
    Clear,
}

impl Command {
    pub fn execute(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddShape(shape) => {
                let index = document.add_shape(*shape);
                debug!("Added {} shape at index {}", shape.kind().name(), index);
            }
            Command::SetBounds { index, from, to } => {
                shape_mut(document, *index)?.set_bounds_from_corners(*from, *to);
            }
            Command::Translate { index, delta } => {
                shape_mut(document, *index)?.translate(*delta);
            }
            Command::ResizeCorner { index, corner, delta } => {
                shape_mut(document, *index)?.resize_corner(*corner, *delta);
            }
            Command::CommitDragPath(path) => {
                debug!("Recorded drag path with {} points", path.points().len());
                document.add_drag_path(path.clone());
            }
            Command::DiscardShape { index } => {
                document
                    .remove_shape(*index)
                    .ok_or(CommandError::ShapeNotFound(*index))?;
            }
            Command::Clear => document.clear(),
        }
        Ok(())
    }
}

fn shape_mut(document: &mut Document, index: usize) -> Result<&mut Shape, CommandError> {
    document
        .shape_mut(index)
        .ok_or(CommandError::ShapeNotFound(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ShapeKind;
    use egui::{pos2, vec2};

    #[test]
    fn missing_index_is_reported() {
        let mut doc = Document::new();
        let cmd = Command::Translate { index: 3, delta: vec2(1.0, 1.0) };
        assert_eq!(cmd.execute(&mut doc), Err(CommandError::ShapeNotFound(3)));

        let cmd = Command::DiscardShape { index: 0 };
        assert_eq!(cmd.execute(&mut doc), Err(CommandError::ShapeNotFound(0)));
    }

    #[test]
    fn set_bounds_and_discard() {
        let mut doc = Document::new();
        Command::AddShape(Shape::at(ShapeKind::Rectangle, pos2(10.0, 10.0)))
            .execute(&mut doc)
            .unwrap();
        Command::SetBounds { index: 0, from: pos2(10.0, 10.0), to: pos2(4.0, 30.0) }
            .execute(&mut doc)
            .unwrap();
        assert_eq!(doc.shapes()[0], Shape::new(ShapeKind::Rectangle, 4.0, 10.0, 6.0, 20.0));

        Command::DiscardShape { index: 0 }.execute(&mut doc).unwrap();
        assert!(doc.shapes().is_empty());
    }

    #[test]
    fn clear_drops_shapes_and_trails() {
        let mut doc = Document::new();
        Command::AddShape(Shape::new(ShapeKind::Ellipse, 0.0, 0.0, 20.0, 10.0))
            .execute(&mut doc)
            .unwrap();
        Command::CommitDragPath(DragPath::new(vec![pos2(0.0, 0.0), pos2(5.0, 5.0)]))
            .execute(&mut doc)
            .unwrap();

        assert_eq!(Command::Clear.execute(&mut doc), Ok(()));
        assert!(doc.is_empty());
        assert!(doc.drag_paths().is_empty());
    }
}
