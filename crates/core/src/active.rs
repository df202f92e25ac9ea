//! Active piece - the piece currently falling
//!
//! Movement methods translate or rotate unconditionally. Validation is the
//! caller's job (see [`crate::Grid::can_place`]); a rejected move is undone with
//! the opposite method.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::pieces::{spawn_column, SPAWN_ROW};
use crate::shape::Shape;
use crate::types::{Color, Rotation, MAX_SHAPE_DIM};

/// Absolute (row, col) cells covered by a piece; never more than a full 4x4 mask
pub type PieceCells = ArrayVec<(i32, i32), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    piece: Piece,
    /// Column of the mask's left edge
    x: i32,
    /// Row of the mask's top edge (may be negative above the grid)
    y: i32,
    rotation: Rotation,
}

impl ActivePiece {
    pub fn new(piece: Piece, x: i32, y: i32) -> Self {
        Self {
            piece,
            x,
            y,
            rotation: Rotation::North,
        }
    }

    /// Place a piece at the spawn point of a grid of the given width
    pub fn spawn(piece: Piece, grid_width: usize) -> Self {
        Self::new(piece, spawn_column(grid_width), SPAWN_ROW)
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    pub fn move_down(&mut self) {
        self.y += 1;
    }

    /// Undo a [`move_down`](Self::move_down)
    pub fn move_up(&mut self) {
        self.y -= 1;
    }

    /// Rotate 90° clockwise
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotate_cw();
    }

    /// Undo a [`rotate`](Self::rotate); same orientation as three more clockwise turns
    pub fn rotate_back(&mut self) {
        self.rotation = self.rotation.rotate_ccw();
    }

    /// Base mask with the current rotation applied
    pub fn current_shape(&self) -> Shape {
        self.piece.shape().rotated(self.rotation.quarter_turns())
    }

    /// Absolute (row, col) of every occupied cell at the current position
    pub fn cells(&self) -> PieceCells {
        self.current_shape()
            .cells()
            .map(|(r, c)| (self.y + r as i32, self.x + c as i32))
            .collect()
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Resolved color written to the grid on lock
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}
