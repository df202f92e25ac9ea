use blockfall_core::CoreError;
use thiserror::Error;

/// Failures raised while building a session
///
/// Gameplay never produces these: illegal moves are rolled back and a blocked
/// spawn ends the game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("fall speed must be a positive number of seconds, got {0}")]
    InvalidFallSpeed(f64),

    #[error("power-up chance must lie in [0, 1], got {0}")]
    InvalidPowerUpChance(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}
