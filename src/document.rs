use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::drag_path::DragPath;
use crate::element::Shape;
use crate::geometry::hit_testing::{self, Grab};

/// Everything drawn on the canvas: shapes in paint order plus the recorded
/// move trails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    shapes: Vec<Shape>,
    drag_paths: Vec<DragPath>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(shapes: Vec<Shape>, drag_paths: Vec<DragPath>) -> Self {
        Self { shapes, drag_paths }
    }

    /// Append a shape and return its index
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn remove_shape(&mut self, index: usize) -> Option<Shape> {
        (index < self.shapes.len()).then(|| self.shapes.remove(index))
    }

    /// The first shape grabbed at `pos`, anchors included
    pub fn shape_at(&self, pos: Pos2, anchor_size: f32) -> Option<(usize, Grab)> {
        hit_testing::hit_shape(&self.shapes, pos, anchor_size)
    }

    pub fn add_drag_path(&mut self, path: DragPath) {
        self.drag_paths.push(path);
    }

    pub fn drag_paths(&self) -> &[DragPath] {
        &self.drag_paths
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.drag_paths.clear();
    }

    /// Swap in a loaded document wholesale
    pub fn replace(&mut self, other: Document) {
        *self = other;
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.drag_paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ANCHOR_SIZE, ShapeKind};
    use egui::pos2;

    #[test]
    fn add_and_remove_shapes() {
        let mut doc = Document::new();
        let first = doc.add_shape(Shape::new(ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0));
        let second = doc.add_shape(Shape::new(ShapeKind::Ellipse, 20.0, 0.0, 10.0, 10.0));
        assert_eq!((first, second), (0, 1));

        let removed = doc.remove_shape(0).unwrap();
        assert_eq!(removed.kind(), ShapeKind::Rectangle);
        assert_eq!(doc.shapes().len(), 1);
        assert!(doc.remove_shape(5).is_none());
    }

    #[test]
    fn clear_drops_shapes_and_paths() {
        let mut doc = Document::new();
        doc.add_shape(Shape::new(ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0));
        doc.add_drag_path(DragPath::new(vec![pos2(0.0, 0.0)]));
        assert!(!doc.is_empty());

        doc.clear();
        assert!(doc.is_empty());
    }

    #[test]
    fn shape_at_reports_grab() {
        let mut doc = Document::new();
        doc.add_shape(Shape::new(ShapeKind::Rectangle, 10.0, 10.0, 50.0, 50.0));
        assert_eq!(doc.shape_at(pos2(30.0, 30.0), ANCHOR_SIZE), Some((0, Grab::Body)));
        assert!(matches!(
            doc.shape_at(pos2(60.0, 60.0), ANCHOR_SIZE),
            Some((0, Grab::Anchor(_)))
        ));
        assert_eq!(doc.shape_at(pos2(200.0, 200.0), ANCHOR_SIZE), None);
    }
}
