use egui::Pos2;
use serde::{Deserialize, Serialize};

// Immutable trail kept in the document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DragPath {
    points: Vec<Pos2>,
}

// Mutable trail being recorded during a move gesture
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    points: Vec<Pos2>,
}

impl DragPath {
    pub fn new(points: Vec<Pos2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Consecutive point pairs, one per rendered line segment
    pub fn segments(&self) -> impl Iterator<Item = [Pos2; 2]> + '_ {
        self.points.windows(2).map(|pair| [pair[0], pair[1]])
    }
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    // Drop whatever was recorded and begin at `pos`
    pub fn start(&mut self, pos: Pos2) {
        self.points.clear();
        self.points.push(pos);
    }

    pub fn record(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    // Snapshot into an immutable DragPath
    pub fn to_drag_path(&self) -> DragPath {
        DragPath::new(self.points.clone())
    }
}
