use egui::{Pos2, Rect};

// Common constants for all shape kinds
pub const MIN_SHAPE_SIZE: f32 = 1.0;
pub const ANCHOR_SIZE: f32 = 10.0;

/// Normalized rectangle spanned by two arbitrary corner points
pub(crate) fn rect_from_corners(a: Pos2, b: Pos2) -> Rect {
    Rect::from_min_size(
        Pos2::new(a.x.min(b.x), a.y.min(b.y)),
        egui::vec2((a.x - b.x).abs(), (a.y - b.y).abs()),
    )
}

/// Test whether a point lies inside the ellipse inscribed in `bounds`
pub(crate) fn ellipse_contains(bounds: Rect, pos: Pos2) -> bool {
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }

    let center = bounds.center();
    let nx = (pos.x - center.x) / rx;
    let ny = (pos.y - center.y) / ry;
    nx * nx + ny * ny < 1.0
}
