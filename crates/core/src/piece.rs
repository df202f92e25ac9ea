//! Piece module - immutable pieces with stackable power-up layers
//!
//! A [`Piece`] is a base archetype plus an ordered list of [`PowerUp`] layers.
//! Every effective property (color, score multiplier, special-effect flag,
//! description) is computed by folding that list over the base values, so
//! applying a layer never mutates an existing piece.

use crate::error::CoreError;
use crate::pieces::{base_color, base_shape};
use crate::shape::Shape;
use crate::types::{Color, PieceKind, PowerUp};

/// Share of the way a golden layer pulls the color towards gold
const GOLDEN_TINT: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    color: Color,
    modifiers: Vec<PowerUp>,
}

impl Piece {
    /// Canonical, undecorated piece for an archetype
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            color: base_color(kind),
            modifiers: Vec::new(),
        }
    }

    /// Piece with a custom mask and color (no modifiers)
    pub fn with_shape(kind: PieceKind, shape: Shape, color: Color) -> Self {
        Self {
            kind,
            shape,
            color,
            modifiers: Vec::new(),
        }
    }

    /// Return a copy of this piece with one more power-up layer on top
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Piece;
    /// use blockfall_types::{PieceKind, PowerUp};
    ///
    /// let piece = Piece::new(PieceKind::T)
    ///     .with_power_up(PowerUp::Golden)
    ///     .with_power_up(PowerUp::Rainbow);
    /// assert_eq!(piece.score_multiplier(), 6);
    /// assert!(piece.has_special_effect());
    /// ```
    pub fn with_power_up(&self, power_up: PowerUp) -> Piece {
        let mut next = self.clone();
        next.modifiers.push(power_up);
        next
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Unrotated mask
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Color of the undecorated archetype
    pub fn base_color(&self) -> Color {
        self.color
    }

    /// Applied layers, innermost first
    pub fn modifiers(&self) -> &[PowerUp] {
        &self.modifiers
    }

    /// Layer at `index` (0 = first applied)
    pub fn modifier(&self, index: usize) -> Result<PowerUp, CoreError> {
        self.modifiers
            .get(index)
            .copied()
            .ok_or(CoreError::MissingModifier {
                index,
                layers: self.modifiers.len(),
            })
    }

    pub fn is_decorated(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Color after every layer has been applied
    pub fn color(&self) -> Color {
        self.modifiers
            .iter()
            .fold(self.color, |color, power_up| match power_up {
                PowerUp::Golden => color.lerp(Color::GOLD, GOLDEN_TINT),
                PowerUp::Rainbow => Color::RAINBOW,
                PowerUp::Bomb => color,
            })
    }

    /// Product of all layer multipliers (1 when undecorated)
    pub fn score_multiplier(&self) -> u32 {
        self.modifiers
            .iter()
            .fold(1u32, |acc, p| acc.saturating_mul(p.score_multiplier()))
    }

    /// Every power-up layer marks the piece as special
    pub fn has_special_effect(&self) -> bool {
        self.is_decorated()
    }

    /// Whether a view should animate this piece's color
    pub fn is_animated(&self) -> bool {
        self.modifiers.contains(&PowerUp::Rainbow)
    }

    /// Whether the piece carries the area-clear flag
    pub fn clears_area(&self) -> bool {
        self.modifiers.contains(&PowerUp::Bomb)
    }

    pub fn description(&self) -> String {
        let mut out = format!("Basic {} piece", self.kind.as_str());
        for power_up in &self.modifiers {
            out.push_str(" + ");
            out.push_str(power_up.label());
        }
        out
    }
}
