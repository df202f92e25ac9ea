//! Engine module - game session, screen state machine and observer hooks
//!
//! Builds on [`blockfall_core`] to run complete games:
//!
//! - [`session`]: spawn, gravity, movement with rollback, locking and scoring
//! - [`machine`]: Menu/Playing/Paused/GameOver screens driven by input tokens
//! - [`observer`]: injected hooks for transitions, spawns, locks and game over
//! - [`snapshot`]: serializable read-only view for renderers
//! - [`config`]: session settings and validation
//!
//! The engine is single-threaded and tick-driven: a host calls
//! [`Game::update`] once per frame and [`Game::handle_input`] between frames.
//!
//! ```
//! use blockfall_engine::{Flow, Game, GameConfig};
//! use blockfall_types::{InputToken, Screen};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7)).unwrap();
//! game.handle_input(InputToken::Start);
//! assert_eq!(game.screen(), Screen::Playing);
//!
//! game.handle_input(InputToken::Drop);
//! game.update(1.0 / 60.0);
//! assert_eq!(game.handle_raw_input("jump"), Flow::Continue);
//! ```

pub mod config;
pub mod error;
pub mod machine;
pub mod observer;
pub mod session;
pub mod snapshot;

pub use config::GameConfig;
pub use error::EngineError;
pub use machine::{transition, Flow, Game, PieceAction, Step};
pub use observer::{GameObserver, LogObserver, NullObserver};
pub use session::{LockEvent, Session, SessionEvent};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
