use egui::{Color32, CursorIcon, Painter, Rect, Stroke};

/// Represents a corner of a shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in anchor hit-test order
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Corner::TopLeft => CursorIcon::ResizeNwSe,
            Corner::TopRight => CursorIcon::ResizeNeSw,
            Corner::BottomLeft => CursorIcon::ResizeNeSw,
            Corner::BottomRight => CursorIcon::ResizeNwSe,
        }
    }

    /// The position of this corner on the given rectangle
    pub fn position_on(&self, rect: Rect) -> egui::Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }
}

/// Paint a filled anchor square
pub fn draw_anchor(painter: &Painter, anchor: Rect, color: Color32) {
    painter.rect_filled(anchor, 0.0, color);
    painter.rect_stroke(anchor, 0.0, Stroke::new(1.0, Color32::WHITE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_positions_follow_rect() {
        let rect = Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(30.0, 40.0));
        assert_eq!(Corner::TopLeft.position_on(rect), egui::pos2(10.0, 20.0));
        assert_eq!(Corner::TopRight.position_on(rect), egui::pos2(40.0, 20.0));
        assert_eq!(Corner::BottomLeft.position_on(rect), egui::pos2(10.0, 60.0));
        assert_eq!(Corner::BottomRight.position_on(rect), egui::pos2(40.0, 60.0));
    }

    #[test]
    fn diagonal_corners_share_cursor() {
        assert_eq!(Corner::TopLeft.cursor_icon(), Corner::BottomRight.cursor_icon());
        assert_eq!(Corner::TopRight.cursor_icon(), Corner::BottomLeft.cursor_icon());
    }
}
