//! Shapes that live on the canvas.

pub(crate) mod common;
mod shape;

pub use common::{ANCHOR_SIZE, MIN_SHAPE_SIZE};
pub use shape::{Shape, ShapeKind};
