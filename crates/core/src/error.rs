//! Error type for structural misuse of the core types.
//!
//! Illegal moves are never errors: they are resolved by rolling the piece back.
//! These variants cover calls that address something that does not exist,
//! such as a row below the grid or a modifier layer a piece was never given.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} is outside a grid of height {height}")]
    RowOutOfBounds { row: usize, height: usize },

    #[error("cell ({row}, {col}) is outside a {width}x{height} grid")]
    CellOutOfBounds {
        row: i32,
        col: i32,
        width: usize,
        height: usize,
    },

    #[error("shape mask must be between 1x1 and {max}x{max} (got {rows}x{cols})")]
    InvalidShape { rows: usize, cols: usize, max: usize },

    #[error("shape mask rows must all have the same length")]
    RaggedShape,

    #[error("shape mask has no occupied cells")]
    EmptyShape,

    #[error("piece has {layers} modifier layer(s), no layer at index {index}")]
    MissingModifier { index: usize, layers: usize },
}
