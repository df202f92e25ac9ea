//! Read-only view of a game for renderers and tooling

use blockfall_types::{Cell, Color, PieceKind, Rotation, Screen};
use serde::Serialize;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    pub color: Color,
    /// Rotated mask, one row per entry
    pub shape: Vec<Vec<bool>>,
    /// Absolute (row, col) cells, including any above the top
    pub cells: Vec<(i32, i32)>,
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub shape: Vec<Vec<bool>>,
    pub special: bool,
    pub animated: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub state: &'static str,
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_speed: f64,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn capture(screen: Screen, session: &Session) -> Self {
        let grid = session.grid();
        let active = session.current_piece().map(|active| ActiveSnapshot {
            kind: active.piece().kind(),
            x: active.x(),
            y: active.y(),
            rotation: active.rotation(),
            color: active.color(),
            shape: active.current_shape().to_rows(),
            cells: active.cells().into_iter().collect(),
            animated: active.piece().is_animated(),
        });
        let next = session.next_piece();

        Self {
            state: screen.as_str(),
            width: grid.width(),
            height: grid.height(),
            grid: grid.to_cells(),
            active,
            next: NextSnapshot {
                kind: next.kind(),
                color: next.color(),
                shape: next.shape().to_rows(),
                special: next.has_special_effect(),
                animated: next.is_animated(),
                description: next.description(),
            },
            score: session.score(),
            level: session.level(),
            lines: session.lines_cleared(),
            fall_speed: session.fall_speed(),
            game_over: session.is_game_over(),
        }
    }
}
