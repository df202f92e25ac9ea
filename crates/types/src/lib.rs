//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental vocabulary used throughout the engine.
//! All types are plain data with no behaviour beyond small conversions, making them
//! usable from the grid simulation, the session state machine and any view layer.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9, left to right)
//! - **Height**: 20 rows by default (indexed 0-19, row 0 at the top)
//! - **Spawn position**: column `width / 2 - 1`, row 0
//!
//! Dimensions are chosen once when a session is built and never change afterwards.
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_SPEED` | 1.0 | Seconds between automatic drops at level 1 |
//! | `FALL_SPEED_STEP` | 0.1 | Per-level speed-up factor |
//! | `LEVEL_LINES` | 10 | Lines needed per level |
//! | `POWER_UP_CHANCE` | 0.15 | Probability that a new piece carries a power-up |
//! | `HARD_DROP_POINTS_PER_CELL` | 2 | Bonus per cell travelled by a hard drop |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{InputToken, PieceKind, Rotation, Screen};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(InputToken::from_str("drop"), Some(InputToken::Drop));
//! assert_eq!(InputToken::from_str("jump"), None);
//!
//! assert_eq!(Screen::GameOver.as_str(), "GAME_OVER");
//! ```

use serde::Serialize;

/// Default grid width in cells (10 columns)
pub const DEFAULT_GRID_WIDTH: usize = 10;

/// Default grid height in cells (20 rows)
pub const DEFAULT_GRID_HEIGHT: usize = 20;

/// Seconds between automatic downward moves at level 1
pub const BASE_FALL_SPEED: f64 = 1.0;

/// Each level above the first divides the fall interval by `1 + (level - 1) * FALL_SPEED_STEP`
pub const FALL_SPEED_STEP: f64 = 0.1;

/// Lines that must be cleared to advance one level
pub const LEVEL_LINES: u32 = 10;

/// Probability that a freshly generated piece receives a random power-up
pub const POWER_UP_CHANCE: f64 = 0.15;

/// Points awarded per cell travelled during a hard drop
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Largest row or column count a piece mask may have
pub const MAX_SHAPE_DIM: usize = 4;

/// Line clear scoring table
///
/// Base points for clearing N lines with a single lock:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Clears of more than four lines score `100 * n`. The base is then multiplied by
/// the locked piece's score multiplier.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece archetypes
///
/// Each archetype has a fixed base mask and color:
/// - **I**: Cyan, four-cell bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every archetype, in declaration order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case single letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation state of a falling piece
///
/// - **North**: base orientation (0 quarter turns)
/// - **East**: rotated 90° clockwise
/// - **South**: rotated 180°
/// - **West**: rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns from North (0..4)
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from a quarter turn count, wrapping modulo 4
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// RGB color carried by pieces and placed cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GOLD: Color = Color::rgb(255, 215, 0);

    /// Resting tint of a rainbow piece (hue 0, saturation 0.8, brightness 0.9).
    ///
    /// The view may animate the hue; the grid stores this value on lock.
    pub const RAINBOW: Color = Color::rgb(230, 46, 46);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let a = f64::from(a);
            let b = f64::from(b);
            channel((a + (b - a) * t) / 255.0)
        };
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Convert from hue (degrees), saturation and brightness (both `[0, 1]`)
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Color {
        let saturation = saturation.clamp(0.0, 1.0);
        let brightness = brightness.clamp(0.0, 1.0);
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = brightness * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = brightness - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::rgb(channel(r + m), channel(g + m), channel(b + m))
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Power-up modifiers that can be stacked onto a piece
///
/// - **Golden**: x2 score, color shifted towards gold
/// - **Bomb**: special effect flag only, x1
/// - **Rainbow**: x3 score, animated rainbow tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PowerUp {
    Golden,
    Bomb,
    Rainbow,
}

impl PowerUp {
    pub const ALL: [PowerUp; 3] = [PowerUp::Golden, PowerUp::Bomb, PowerUp::Rainbow];

    /// Factor this modifier contributes to the piece's score multiplier
    pub fn score_multiplier(&self) -> u32 {
        match self {
            PowerUp::Golden => 2,
            PowerUp::Bomb => 1,
            PowerUp::Rainbow => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUp::Golden => "GOLDEN",
            PowerUp::Bomb => "BOMB",
            PowerUp::Rainbow => "RAINBOW",
        }
    }

    /// Suffix appended to a piece description for each applied layer
    pub fn label(&self) -> &'static str {
        match self {
            PowerUp::Golden => "Golden Boost (x2 score)",
            PowerUp::Bomb => "Bomb Effect (clears adjacent lines)",
            PowerUp::Rainbow => "Rainbow Power (x3 score, animated)",
        }
    }
}

/// Discrete input tokens forwarded by the host's input layer
///
/// Tokens are interpreted by the state machine according to the current screen;
/// a token with no meaning on the current screen is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InputToken {
    /// Leave the menu and begin a new game
    Start,
    /// Ask the host to terminate (menu only)
    Quit,
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Move piece one cell down, locking it if blocked
    Down,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Hard drop to the lowest valid row and lock
    Drop,
    /// Pause while playing, resume while paused
    Pause,
    /// Resume a paused game
    Resume,
    /// Start over after game over
    Restart,
    /// Return to the main menu
    Menu,
}

impl InputToken {
    pub const ALL: [InputToken; 11] = [
        InputToken::Start,
        InputToken::Quit,
        InputToken::Left,
        InputToken::Right,
        InputToken::Down,
        InputToken::Rotate,
        InputToken::Drop,
        InputToken::Pause,
        InputToken::Resume,
        InputToken::Restart,
        InputToken::Menu,
    ];

    /// Parse a token name (case-insensitive, surrounding whitespace ignored)
    ///
    /// Unknown names yield `None`; callers drop them silently.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "START" => Some(InputToken::Start),
            "QUIT" => Some(InputToken::Quit),
            "LEFT" => Some(InputToken::Left),
            "RIGHT" => Some(InputToken::Right),
            "DOWN" => Some(InputToken::Down),
            "ROTATE" => Some(InputToken::Rotate),
            "DROP" => Some(InputToken::Drop),
            "PAUSE" => Some(InputToken::Pause),
            "RESUME" => Some(InputToken::Resume),
            "RESTART" => Some(InputToken::Restart),
            "MENU" => Some(InputToken::Menu),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputToken::Start => "START",
            InputToken::Quit => "QUIT",
            InputToken::Left => "LEFT",
            InputToken::Right => "RIGHT",
            InputToken::Down => "DOWN",
            InputToken::Rotate => "ROTATE",
            InputToken::Drop => "DROP",
            InputToken::Pause => "PAUSE",
            InputToken::Resume => "RESUME",
            InputToken::Restart => "RESTART",
            InputToken::Menu => "MENU",
        }
    }
}

/// Top-level screens of the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Menu => "MENU",
            Screen::Playing => "PLAYING",
            Screen::Paused => "PAUSED",
            Screen::GameOver => "GAME_OVER",
        }
    }
}
