//! Factory module - piece and power-up generation
//!
//! [`PieceFactory`] owns the random source. Building a specific archetype or
//! applying a specific power-up is deterministic and needs no factory instance.

use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::types::{PieceKind, PowerUp, POWER_UP_CHANCE};

/// Random piece generator with optional power-up decoration
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    power_up_chance: f64,
}

impl PieceFactory {
    /// Create a factory with the given seed and the default 15% power-up chance
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            power_up_chance: POWER_UP_CHANCE,
        }
    }

    /// Override the probability used by [`apply_random_power_up`](Self::apply_random_power_up)
    pub fn with_power_up_chance(mut self, chance: f64) -> Self {
        self.power_up_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn power_up_chance(&self) -> f64 {
        self.power_up_chance
    }

    /// Canonical base piece for an archetype
    pub fn create_piece(kind: PieceKind) -> Piece {
        Piece::new(kind)
    }

    /// Uniformly random archetype, undecorated
    pub fn create_random_piece(&mut self) -> Piece {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Self::create_piece(PieceKind::ALL[idx])
    }

    /// With the configured probability, wrap the piece in one uniformly chosen power-up
    pub fn apply_random_power_up(&mut self, piece: Piece) -> Piece {
        if !self.rng.chance(self.power_up_chance) {
            return piece;
        }
        let idx = self.rng.next_range(PowerUp::ALL.len() as u32) as usize;
        Self::apply_power_up(&piece, PowerUp::ALL[idx])
    }

    /// Add one specific power-up layer
    pub fn apply_power_up(piece: &Piece, power_up: PowerUp) -> Piece {
        piece.with_power_up(power_up)
    }

    /// Stack several power-ups, applied in order
    pub fn apply_power_ups(piece: &Piece, power_ups: &[PowerUp]) -> Piece {
        power_ups
            .iter()
            .fold(piece.clone(), |acc, &power_up| acc.with_power_up(power_up))
    }

    /// Random archetype followed by a random power-up roll
    pub fn next_piece(&mut self) -> Piece {
        let piece = self.create_random_piece();
        self.apply_random_power_up(piece)
    }

    /// Restart the random sequence from a new seed
    pub fn reseed(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
    }

    /// Current RNG state
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
