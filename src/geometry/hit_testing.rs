use egui::{Pos2, Rect, Vec2};

use crate::element::Shape;
use crate::widgets::Corner;

/// The four anchor squares of `bounds`, each centred on a corner.
/// Order matches [`Corner::ALL`], which is also the hit-test order.
pub fn anchors(bounds: Rect, anchor_size: f32) -> [(Corner, Rect); 4] {
    Corner::ALL.map(|corner| {
        let center = corner.position_on(bounds);
        (corner, Rect::from_center_size(center, Vec2::splat(anchor_size)))
    })
}

/// Which anchor of `bounds`, if any, lies under `pos`
pub fn anchor_at(bounds: Rect, pos: Pos2, anchor_size: f32) -> Option<Corner> {
    anchors(bounds, anchor_size)
        .into_iter()
        .find(|(_, anchor)| anchor.contains(pos))
        .map(|(corner, _)| corner)
}

/// Whether `pos` lies on any of the anchors of `bounds`
pub fn is_near_anchor(bounds: Rect, pos: Pos2, anchor_size: f32) -> bool {
    anchor_at(bounds, pos, anchor_size).is_some()
}

/// What a pointer press on a shape would grab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grab {
    Anchor(Corner),
    Body,
}

/// Anchors win over the body so that corners of ellipses, which sit outside
/// the inscribed area, stay reachable.
pub fn grab_at(shape: &Shape, pos: Pos2, anchor_size: f32) -> Option<Grab> {
    if let Some(corner) = anchor_at(shape.rect(), pos, anchor_size) {
        return Some(Grab::Anchor(corner));
    }
    shape.contains(pos).then_some(Grab::Body)
}

/// First shape in paint order that `pos` grabs
pub fn hit_shape(shapes: &[Shape], pos: Pos2, anchor_size: f32) -> Option<(usize, Grab)> {
    shapes
        .iter()
        .enumerate()
        .find_map(|(index, shape)| grab_at(shape, pos, anchor_size).map(|grab| (index, grab)))
}
