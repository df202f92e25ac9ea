//! Grid module - manages the playfield
//!
//! The grid is `height x width` cells, each empty or holding the color of a locked block.
//! Uses a flat row-major vector sized once at construction.
//! Coordinates are (row, col): row 0 is the top, col 0 the left edge.
//! Pieces may extend above row 0 (negative rows) while falling; those cells are
//! never stored.

use crate::active::ActivePiece;
use crate::error::CoreError;
use crate::types::{Cell, Color, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat vector of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty 10x20 grid
    pub fn new() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cells: vec![None; DEFAULT_GRID_WIDTH * DEFAULT_GRID_HEIGHT],
        }
    }

    /// Create an empty grid with custom dimensions
    pub fn with_size(width: usize, height: usize) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether (row, col) is inside the grid and empty
    ///
    /// Out-of-bounds positions are never empty, so nothing can be placed there.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        matches!(self.index(row, col).map(|idx| self.cells[idx]), Some(None))
    }

    /// Contents of (row, col)
    pub fn cell(&self, row: i32, col: i32) -> Result<Cell, CoreError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(CoreError::CellOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
    }

    /// All cells of one row
    pub fn row(&self, row: usize) -> Result<&[Cell], CoreError> {
        if row >= self.height {
            return Err(CoreError::RowOutOfBounds {
                row,
                height: self.height,
            });
        }
        let start = row * self.width;
        Ok(&self.cells[start..start + self.width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Write a block; returns false (and writes nothing) when out of bounds
    pub fn set_block(&mut self, row: i32, col: i32, color: Color) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = Some(color);
                true
            }
            None => false,
        }
    }

    /// Check whether the piece fits at its current position and rotation
    ///
    /// A cell fails if its column is outside `[0, width)`, its row is at or below
    /// the bottom, or (for rows >= 0) the target cell is occupied. Rows above the
    /// top are allowed.
    pub fn can_place(&self, piece: &ActivePiece) -> bool {
        piece.cells().iter().all(|&(row, col)| {
            if col < 0 || col as usize >= self.width || row >= self.height as i32 {
                return false;
            }
            row < 0 || self.is_empty(row, col)
        })
    }

    /// Commit the piece's cells with its resolved color
    ///
    /// Cells above the top are dropped. Callers check [`can_place`](Self::can_place) first.
    pub fn place(&mut self, piece: &ActivePiece) {
        let color = piece.color();
        for (row, col) in piece.cells() {
            if row >= 0 {
                self.set_block(row, col, color);
            }
        }
    }

    /// Private fast path for a row index known to be in range
    fn row_full(&self, row: usize) -> bool {
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Check if a row is completely filled
    pub fn is_line_complete(&self, row: usize) -> Result<bool, CoreError> {
        if row >= self.height {
            return Err(CoreError::RowOutOfBounds {
                row,
                height: self.height,
            });
        }
        Ok(self.row_full(row))
    }

    /// Remove one row, shifting everything above it down by one
    pub fn clear_line(&mut self, row: usize) -> Result<(), CoreError> {
        if row >= self.height {
            return Err(CoreError::RowOutOfBounds {
                row,
                height: self.height,
            });
        }

        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(None);
        Ok(())
    }

    /// Clear all full rows and return how many were removed
    ///
    /// Equivalent to scanning bottom to top, removing each full row and re-checking
    /// the same index, but done in one compaction pass: surviving rows are copied
    /// down past the removed ones and the freed rows at the top are emptied.
    pub fn clear_complete_lines(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_row = self.height;

        // Scan from bottom to top
        for read_row in (0..self.height).rev() {
            if self.row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_row * width].fill(None);

        cleared
    }

    /// True when any cell of the top row is occupied
    pub fn is_game_over(&self) -> bool {
        self.cells[..self.width].iter().any(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as nested rows (for snapshots and tests)
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
