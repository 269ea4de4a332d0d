use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};
use serde::{Deserialize, Serialize};

use crate::element::common::{self, MIN_SHAPE_SIZE};
use crate::widgets::Corner;

/// The geometric primitives the canvas can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rectangle, ShapeKind::Ellipse];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
        }
    }
}

/// A rectangle or ellipse described by its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    kind: ShapeKind,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Shape {
    pub fn new(kind: ShapeKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { kind, x, y, width, height }
    }

    /// A zero-size shape anchored at `pos`, grown later while the user drags
    pub fn at(kind: ShapeKind, pos: Pos2) -> Self {
        Self::new(kind, pos.x, pos.y, 0.0, 0.0)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Bounding box in canvas coordinates
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// Kind-aware containment: ellipses only cover their inscribed area
    pub fn contains(&self, pos: Pos2) -> bool {
        match self.kind {
            ShapeKind::Rectangle => self.rect().contains(pos),
            ShapeKind::Ellipse => common::ellipse_contains(self.rect(), pos),
        }
    }

    /// A shape that was clicked but never dragged out. A flat shape from a
    /// purely horizontal or vertical drag still paints as a line.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Replace the bounds with the rectangle spanned by two points
    pub fn set_bounds_from_corners(&mut self, a: Pos2, b: Pos2) {
        let rect = common::rect_from_corners(a, b);
        self.x = rect.min.x;
        self.y = rect.min.y;
        self.width = rect.width();
        self.height = rect.height();
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Drag one corner by `delta`, keeping the opposite corner in place.
    ///
    /// Width and height never fall below [`MIN_SHAPE_SIZE`]; when they would,
    /// the origin is pushed back so the shape stays one pixel wide.
    pub fn resize_corner(&mut self, corner: Corner, delta: Vec2) {
        let (dx, dy) = (delta.x, delta.y);
        match corner {
            Corner::TopLeft => {
                self.x += dx;
                self.y += dy;
                self.width -= dx;
                self.height -= dy;
            }
            Corner::TopRight => {
                self.y += dy;
                self.width += dx;
                self.height -= dy;
            }
            Corner::BottomLeft => {
                self.x += dx;
                self.width -= dx;
                self.height += dy;
            }
            Corner::BottomRight => {
                self.width += dx;
                self.height += dy;
            }
        }

        if self.width < MIN_SHAPE_SIZE {
            self.x -= MIN_SHAPE_SIZE - self.width;
            self.width = MIN_SHAPE_SIZE;
        }
        if self.height < MIN_SHAPE_SIZE {
            self.y -= MIN_SHAPE_SIZE - self.height;
            self.height = MIN_SHAPE_SIZE;
        }
    }

    /// Outline the shape with the given stroke
    pub fn paint(&self, painter: &Painter, stroke: EguiStroke) {
        let rect = self.rect();
        match self.kind {
            ShapeKind::Rectangle => {
                painter.rect_stroke(rect, 0.0, stroke);
            }
            ShapeKind::Ellipse => {
                painter.add(egui::Shape::ellipse_stroke(rect.center(), rect.size() / 2.0, stroke));
            }
        }
    }
}

impl crate::scene::Drawable for Shape {
    fn draw(&self, painter: &Painter) {
        self.paint(painter, EguiStroke::new(1.0, Color32::BLACK));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn rect_shape() -> Shape {
        Shape::new(ShapeKind::Rectangle, 10.0, 10.0, 40.0, 30.0)
    }

    #[test]
    fn bounds_from_corners_normalizes() {
        let mut shape = Shape::at(ShapeKind::Rectangle, pos2(60.0, 60.0));
        shape.set_bounds_from_corners(pos2(60.0, 60.0), pos2(20.0, 80.0));
        assert_eq!(shape, Shape::new(ShapeKind::Rectangle, 20.0, 60.0, 40.0, 20.0));
    }

    #[test]
    fn resize_each_corner() {
        let delta = vec2(5.0, -5.0);

        let mut shape = rect_shape();
        shape.resize_corner(Corner::TopLeft, delta);
        assert_eq!(shape, Shape::new(ShapeKind::Rectangle, 15.0, 5.0, 35.0, 35.0));

        let mut shape = rect_shape();
        shape.resize_corner(Corner::TopRight, delta);
        assert_eq!(shape, Shape::new(ShapeKind::Rectangle, 10.0, 5.0, 45.0, 35.0));

        let mut shape = rect_shape();
        shape.resize_corner(Corner::BottomLeft, delta);
        assert_eq!(shape, Shape::new(ShapeKind::Rectangle, 15.0, 10.0, 35.0, 25.0));

        let mut shape = rect_shape();
        shape.resize_corner(Corner::BottomRight, delta);
        assert_eq!(shape, Shape::new(ShapeKind::Rectangle, 10.0, 10.0, 45.0, 25.0));
    }

    #[test]
    fn resize_clamps_to_minimum_size() {
        let mut shape = rect_shape();
        shape.resize_corner(Corner::BottomRight, vec2(-100.0, -100.0));
        assert_eq!(shape.width(), MIN_SHAPE_SIZE);
        assert_eq!(shape.height(), MIN_SHAPE_SIZE);
        // width went to -60, so the origin is pushed back by 61
        assert_eq!(shape.x(), 10.0 - 61.0);
        assert_eq!(shape.y(), 10.0 - 71.0);
    }

    #[test]
    fn ellipse_hit_test_ignores_box_corners() {
        let shape = Shape::new(ShapeKind::Ellipse, 0.0, 0.0, 100.0, 100.0);
        assert!(shape.contains(pos2(50.0, 50.0)));
        assert!(!shape.contains(pos2(1.0, 1.0)));
        assert!(rect_shape().contains(pos2(10.0, 10.0)));
    }

    #[test]
    fn fresh_shape_is_degenerate() {
        assert!(Shape::at(ShapeKind::Ellipse, pos2(3.0, 4.0)).is_degenerate());
        assert!(!rect_shape().is_degenerate());
    }

    #[test]
    fn flat_shape_is_not_degenerate() {
        assert!(!Shape::new(ShapeKind::Rectangle, 10.0, 50.0, 80.0, 0.0).is_degenerate());
        assert!(!Shape::new(ShapeKind::Ellipse, 10.0, 50.0, 0.0, 30.0).is_degenerate());
    }
}
