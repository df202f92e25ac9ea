//! Pieces module - the shape library
//!
//! Base masks and colors for the seven archetypes. Masks are stored in their
//! smallest bounding box; rotation is applied on demand by [`Shape::rotated`].

use crate::shape::Shape;
use crate::types::{Color, PieceKind};

const I_SHAPE: Shape = Shape::from_mask(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const O_SHAPE: Shape = Shape::from_mask(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const T_SHAPE: Shape = Shape::from_mask(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::from_mask(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Shape = Shape::from_mask(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
const J_SHAPE: Shape = Shape::from_mask(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const L_SHAPE: Shape = Shape::from_mask(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// Get the unrotated mask for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Get the canonical color for a piece kind
pub fn base_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::CYAN,
        PieceKind::O => Color::YELLOW,
        PieceKind::T => Color::PURPLE,
        PieceKind::S => Color::GREEN,
        PieceKind::Z => Color::RED,
        PieceKind::J => Color::BLUE,
        PieceKind::L => Color::ORANGE,
    }
}

/// Spawn row for new pieces
pub const SPAWN_ROW: i32 = 0;

/// Spawn column for a grid of the given width (`width / 2 - 1`)
pub fn spawn_column(width: usize) -> i32 {
    (width / 2) as i32 - 1
}
