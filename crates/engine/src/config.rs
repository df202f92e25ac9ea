//! Session configuration
//!
//! Grid dimensions are read once when the session is built and never change
//! afterwards.

use blockfall_core::CoreError;
use blockfall_types::{BASE_FALL_SPEED, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, POWER_UP_CHANCE};
use serde::Serialize;

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Seconds between automatic drops at level 1
    pub base_fall_speed: f64,
    pub power_up_chance: f64,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            base_fall_speed: BASE_FALL_SPEED,
            power_up_chance: POWER_UP_CHANCE,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fall_speed(mut self, seconds: f64) -> Self {
        self.base_fall_speed = seconds;
        self
    }

    pub fn with_power_up_chance(mut self, chance: f64) -> Self {
        self.power_up_chance = chance;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject settings a session cannot run with
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if !self.base_fall_speed.is_finite() || self.base_fall_speed <= 0.0 {
            return Err(EngineError::InvalidFallSpeed(self.base_fall_speed));
        }
        if !(0.0..=1.0).contains(&self.power_up_chance) {
            return Err(EngineError::InvalidPowerUpChance(self.power_up_chance));
        }
        Ok(())
    }
}
