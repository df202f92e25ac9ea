//! Observer hooks - where the engine reports what happened
//!
//! The engine never writes logs itself. A host injects a [`GameObserver`] into
//! [`crate::Game`]; [`LogObserver`] forwards everything to the `log` facade and
//! [`NullObserver`] drops it.

use blockfall_types::{PieceKind, Screen};
use log::{debug, info, warn};

use crate::session::LockEvent;

/// Extension points called synchronously from inside `handle_input` and `update`
///
/// Every hook has an empty default so implementors only override what they need.
pub trait GameObserver {
    fn on_transition(&mut self, _from: Screen, _to: Screen) {}

    fn on_spawn(&mut self, _kind: PieceKind, _description: &str) {}

    fn on_spawn_blocked(&mut self, _kind: PieceKind) {}

    fn on_lock(&mut self, _event: &LockEvent) {}

    fn on_lines_cleared(&mut self, _lines: u32, _score_awarded: u32, _total_score: u32) {}

    fn on_game_over(&mut self, _score: u32, _level: u32, _lines: u32) {}
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Reports through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_transition(&mut self, from: Screen, to: Screen) {
        info!("state change: {} -> {}", from.as_str(), to.as_str());
    }

    fn on_spawn(&mut self, kind: PieceKind, description: &str) {
        debug!("spawned {} ({})", kind.as_str(), description);
    }

    fn on_spawn_blocked(&mut self, kind: PieceKind) {
        warn!("cannot spawn {} piece, spawn point blocked", kind.as_str());
    }

    fn on_lock(&mut self, event: &LockEvent) {
        if event.drop_bonus > 0 {
            debug!(
                "piece dropped: {} (bonus {})",
                event.description, event.drop_bonus
            );
        }
        debug!(
            "locked {} x{} level={}",
            event.description, event.multiplier, event.level
        );
    }

    fn on_lines_cleared(&mut self, lines: u32, score_awarded: u32, total_score: u32) {
        info!(
            "lines cleared: {} | score added: {} | total: {}",
            lines, score_awarded, total_score
        );
    }

    fn on_game_over(&mut self, score: u32, level: u32, lines: u32) {
        info!(
            "game over: final score {} (level {}, {} lines)",
            score, level, lines
        );
    }
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_transition(&mut self, from: Screen, to: Screen) {
        (**self).on_transition(from, to);
    }

    fn on_spawn(&mut self, kind: PieceKind, description: &str) {
        (**self).on_spawn(kind, description);
    }

    fn on_spawn_blocked(&mut self, kind: PieceKind) {
        (**self).on_spawn_blocked(kind);
    }

    fn on_lock(&mut self, event: &LockEvent) {
        (**self).on_lock(event);
    }

    fn on_lines_cleared(&mut self, lines: u32, score_awarded: u32, total_score: u32) {
        (**self).on_lines_cleared(lines, score_awarded, total_score);
    }

    fn on_game_over(&mut self, score: u32, level: u32, lines: u32) {
        (**self).on_game_over(score, level, lines);
    }
}
