use egui::{Color32, Painter, Rect, Stroke};

use crate::document::Document;
use crate::geometry::hit_testing;
use crate::scene::Drawable;
use crate::widgets::draw_anchor;

/// Colors and widths used to paint the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub selection: Color32,
    pub trail: Color32,
    pub line_width: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            selection: Color32::BLUE,
            trail: Color32::RED,
            line_width: 1.0,
        }
    }
}

/// Paints a document onto a canvas area
#[derive(Debug, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas area
    ///     document (Document): What to draw
    ///     selected (Option<usize>): Shape under manipulation, drawn with anchors
    ///     anchor_size (f32): Side length of the anchor squares
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        document: &Document,
        selected: Option<usize>,
        anchor_size: f32,
    ) {
        painter.rect_filled(rect, 0.0, self.palette.background);

        for shape in document.shapes() {
            shape.draw(painter);
        }

        if let Some(shape) = selected.and_then(|index| document.shape(index)) {
            shape.paint(painter, Stroke::new(self.palette.line_width, self.palette.selection));
            for (_, anchor) in hit_testing::anchors(shape.rect(), anchor_size) {
                draw_anchor(painter, anchor, self.palette.selection);
            }
        }

        let trail = Stroke::new(self.palette.line_width, self.palette.trail);
        for path in document.drag_paths() {
            for segment in path.segments() {
                painter.line_segment(segment, trail);
            }
        }
    }
}
