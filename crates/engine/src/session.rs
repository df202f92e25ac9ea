//! Game session - owns the grid, the falling piece and the counters
//!
//! This module ties together the core components: grid, pieces, factory and
//! scoring. It handles fall timing, piece movement and rotation, locking, line
//! clears and the game lifecycle.
//!
//! Every move follows the same pattern: apply it to the active piece, check
//! [`Grid::can_place`], and undo it if the check fails. A failed downward step
//! locks the piece instead.

use blockfall_core::{scoring, ActivePiece, Grid, Piece, PieceFactory};
use blockfall_types::PieceKind;
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::EngineError;

/// Outcome of committing a piece to the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Line clear points after the multiplier
    pub score_awarded: u32,
    /// Hard drop bonus added just before this lock (0 for a normal lock)
    pub drop_bonus: u32,
    pub multiplier: u32,
    /// Level after the lock
    pub level: u32,
    pub level_up: bool,
    /// The top row is occupied after the lock
    pub top_out: bool,
    pub description: String,
    pub special: bool,
}

/// Most recent notable thing the session did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SessionEvent {
    Spawned { kind: PieceKind, description: String },
    SpawnBlocked { kind: PieceKind },
    Locked(LockEvent),
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    factory: PieceFactory,
    current: Option<ActivePiece>,
    next: Piece,
    score: u32,
    level: u32,
    lines: u32,
    /// Seconds between automatic drops
    fall_speed: f64,
    fall_timer: f64,
    game_over: bool,
    /// Last spawn/lock event (consumed by observers).
    last_event: Option<SessionEvent>,
}

impl Session {
    /// Build an idle session: empty grid, no active piece, one piece queued
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let grid = Grid::with_size(config.width, config.height)?;
        let mut factory =
            PieceFactory::new(config.seed).with_power_up_chance(config.power_up_chance);
        let next = factory.next_piece();

        Ok(Self {
            fall_speed: config.base_fall_speed,
            config,
            grid,
            factory,
            current: None,
            next,
            score: 0,
            level: 1,
            lines: 0,
            fall_timer: 0.0,
            game_over: false,
            last_event: None,
        })
    }

    /// Start a fresh game and spawn the first piece immediately
    pub fn initialize_game(&mut self) {
        self.reset_counters();
        self.current = None;
        self.spawn_piece();
    }

    /// Return to an idle session with an empty grid and no active piece
    pub fn reset_game(&mut self) {
        self.reset_counters();
        self.current = None;
        self.next = self.factory.next_piece();
    }

    fn reset_counters(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_speed = self.config.base_fall_speed;
        self.fall_timer = 0.0;
        self.game_over = false;
        self.last_event = None;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for hosts that prepare a board before play
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn current_piece(&self) -> Option<&ActivePiece> {
        self.current.as_ref()
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn fall_speed(&self) -> f64 {
        self.fall_speed
    }

    pub fn fall_timer(&self) -> f64 {
        self.fall_timer
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// RNG state of the piece factory
    pub fn seed(&self) -> u32 {
        self.factory.seed()
    }

    /// Replace the falling piece
    ///
    /// Refused (returns false) when the piece would overlap the grid, so the
    /// no-overlap invariant holds for pieces supplied from outside too. A
    /// placed piece starts with a fresh fall timer.
    pub fn set_current_piece(&mut self, piece: ActivePiece) -> bool {
        if !self.grid.can_place(&piece) {
            return false;
        }
        self.current = Some(piece);
        self.fall_timer = 0.0;
        true
    }

    /// Replace the queued piece
    pub fn set_next_piece(&mut self, piece: Piece) {
        self.next = piece;
    }

    /// Take and clear the last spawn/lock event.
    pub fn take_last_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    /// Move the queued piece to the spawn point and queue a fresh one
    ///
    /// Returns false and ends the game when the spawn point is blocked; the
    /// blocked piece stays visible as the current piece.
    fn spawn_piece(&mut self) -> bool {
        let fresh = self.factory.next_piece();
        let piece = std::mem::replace(&mut self.next, fresh);
        let kind = piece.kind();
        let active = ActivePiece::spawn(piece, self.grid.width());
        let placeable = self.grid.can_place(&active);

        self.last_event = Some(if placeable {
            SessionEvent::Spawned {
                kind,
                description: active.piece().description(),
            }
        } else {
            SessionEvent::SpawnBlocked { kind }
        });
        self.current = Some(active);

        if !placeable {
            self.game_over = true;
        }
        placeable
    }

    /// Main game tick - spawn or apply gravity
    ///
    /// With no active piece this only spawns; otherwise `dt` seconds are added
    /// to the fall timer and one automatic step happens once it reaches the fall
    /// speed. Does nothing after game over.
    pub fn update(&mut self, dt: f64) {
        if self.game_over {
            return;
        }

        if self.current.is_none() {
            self.spawn_piece();
            return;
        }

        if dt.is_finite() && dt > 0.0 {
            self.fall_timer += dt;
        }
        if self.fall_timer >= self.fall_speed {
            self.fall_timer = 0.0;
            self.move_down();
        }
    }

    /// Apply a move to the active piece and undo it if the result does not fit
    fn try_apply(&mut self, apply: fn(&mut ActivePiece), undo: fn(&mut ActivePiece)) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.current.as_mut() else {
            return false;
        };

        apply(active);
        if self.grid.can_place(active) {
            return true;
        }
        undo(active);
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_apply(ActivePiece::move_left, ActivePiece::move_right)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_apply(ActivePiece::move_right, ActivePiece::move_left)
    }

    /// Rotate clockwise; a rotation that does not fit is reverted with no kick
    pub fn rotate(&mut self) -> bool {
        self.try_apply(ActivePiece::rotate, ActivePiece::rotate_back)
    }

    /// Step down one row, locking the piece if it cannot go further
    ///
    /// Returns true when the piece moved, false when it locked or there was none.
    pub fn move_down(&mut self) -> bool {
        if self.try_apply(ActivePiece::move_down, ActivePiece::move_up) {
            return true;
        }
        if !self.game_over && self.current.is_some() {
            self.lock_piece(0);
        }
        false
    }

    /// Hard drop the active piece to the bottom and lock it
    ///
    /// Every downward step is counted, including the final one that does not
    /// fit and is stepped back, so a piece resting `n` rows above the stack
    /// scores a distance of `n + 1`. Awards 2 points per counted step and
    /// returns the counted distance.
    pub fn drop_piece(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let Some(active) = self.current.as_mut() else {
            return 0;
        };

        let mut distance: u32 = 0;
        while self.grid.can_place(active) {
            active.move_down();
            distance = distance.saturating_add(1);
        }
        active.move_up();

        let bonus = scoring::hard_drop_bonus(distance);
        self.score = self.score.saturating_add(bonus);
        self.lock_piece(bonus);
        distance
    }

    /// Lock the active piece onto the grid and handle line clears
    fn lock_piece(&mut self, drop_bonus: u32) {
        let Some(active) = self.current.take() else {
            return;
        };

        self.grid.place(&active);
        let cleared = self.grid.clear_complete_lines();

        let piece = active.piece();
        let multiplier = piece.score_multiplier();
        let previous_level = self.level;
        let mut score_awarded = 0;

        if cleared > 0 {
            self.lines = self
                .lines
                .saturating_add(u32::try_from(cleared).unwrap_or(u32::MAX));
            score_awarded = scoring::line_clear_score(cleared, multiplier);
            self.score = self.score.saturating_add(score_awarded);
            self.level = scoring::level_for_lines(self.lines);
            self.fall_speed =
                scoring::fall_speed_for_level(self.config.base_fall_speed, self.level);
        }

        let top_out = self.grid.is_game_over();
        if top_out {
            self.game_over = true;
        }

        self.last_event = Some(SessionEvent::Locked(LockEvent {
            kind: piece.kind(),
            lines_cleared: u32::try_from(cleared).unwrap_or(u32::MAX),
            score_awarded,
            drop_bonus,
            multiplier,
            level: self.level,
            level_up: self.level > previous_level,
            top_out,
            description: piece.description(),
            special: piece.has_special_effect(),
        }));
    }
}
