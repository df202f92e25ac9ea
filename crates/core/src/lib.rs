//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid simulation: shapes, pieces and their power-up
//! layers, the falling piece, collision and line clearing, random generation and
//! the scoring rules. It has **no** dependencies on rendering, input handling,
//! logging or I/O.
//!
//! # Module Structure
//!
//! - [`shape`]: 4x4 bitmask shapes with clockwise rotation
//! - [`pieces`]: base masks and colors of the seven archetypes
//! - [`piece`]: immutable pieces with stackable power-up layers
//! - [`active`]: position and rotation of the falling piece
//! - [`grid`]: playfield with placement checks and line clearing
//! - [`rng`]: deterministic LCG
//! - [`factory`]: random pieces and power-ups
//! - [`scoring`]: line clear points, drop bonus, level and fall speed
//! - [`error`]: structural misuse errors
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ActivePiece, Grid, PieceFactory};
//! use blockfall_types::PieceKind;
//!
//! let mut grid = Grid::new();
//! let mut piece = ActivePiece::spawn(PieceFactory::create_piece(PieceKind::T), grid.width());
//! assert!(grid.can_place(&piece));
//!
//! // Move down until blocked, then step back and lock
//! while grid.can_place(&piece) {
//!     piece.move_down();
//! }
//! piece.move_up();
//! grid.place(&piece);
//!
//! assert_eq!(grid.occupied_count(), 4);
//! assert_eq!(grid.clear_complete_lines(), 0);
//! ```

pub mod active;
pub mod error;
pub mod factory;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, PieceCells};
pub use error::CoreError;
pub use factory::PieceFactory;
pub use grid::Grid;
pub use piece::Piece;
pub use pieces::{base_color, base_shape, spawn_column};
pub use rng::SimpleRng;
pub use shape::Shape;
