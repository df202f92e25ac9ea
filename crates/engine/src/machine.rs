//! Screen state machine
//!
//! The four screens form a tagged enum and every input goes through one pure
//! function, [`transition`], which maps `(screen, token)` to a [`Step`]. [`Game`]
//! applies steps to its [`Session`] and reports them to the injected observer.
//!
//! | Screen   | Token                        | Step                         |
//! |----------|------------------------------|------------------------------|
//! | Menu     | START                        | new game, go to Playing      |
//! | Menu     | QUIT                         | ask the host to quit         |
//! | Playing  | LEFT RIGHT DOWN ROTATE DROP  | move the active piece        |
//! | Playing  | PAUSE                        | go to Paused                 |
//! | Paused   | RESUME or PAUSE              | go back to Playing           |
//! | Paused   | MENU                         | go to Menu                   |
//! | GameOver | RESTART                      | reset, new game, Playing     |
//! | GameOver | MENU                         | reset, go to Menu            |
//!
//! Anything else is ignored. Playing moves to GameOver only from `update`, once
//! the session reports game over.

use blockfall_types::{InputToken, Screen};

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::observer::{GameObserver, NullObserver};
use crate::session::{Session, SessionEvent};
use crate::snapshot::GameSnapshot;

/// Piece actions available while Playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceAction {
    Left,
    Right,
    Down,
    Rotate,
    Drop,
}

/// What an input does in a given screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Ignore,
    Quit,
    Act(PieceAction),
    /// Switch screens; `reset` clears the session first, `new_game` starts a
    /// fresh game after the switch
    Enter {
        screen: Screen,
        reset: bool,
        new_game: bool,
    },
}

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Continue,
    Quit,
}

/// The transition table
pub fn transition(screen: Screen, token: InputToken) -> Step {
    use InputToken as T;
    use Screen as S;

    let enter = |screen, reset, new_game| Step::Enter {
        screen,
        reset,
        new_game,
    };

    match (screen, token) {
        (S::Menu, T::Start) => enter(S::Playing, false, true),
        (S::Menu, T::Quit) => Step::Quit,

        (S::Playing, T::Left) => Step::Act(PieceAction::Left),
        (S::Playing, T::Right) => Step::Act(PieceAction::Right),
        (S::Playing, T::Down) => Step::Act(PieceAction::Down),
        (S::Playing, T::Rotate) => Step::Act(PieceAction::Rotate),
        (S::Playing, T::Drop) => Step::Act(PieceAction::Drop),
        (S::Playing, T::Pause) => enter(S::Paused, false, false),

        (S::Paused, T::Resume | T::Pause) => enter(S::Playing, false, false),
        (S::Paused, T::Menu) => enter(S::Menu, false, false),

        (S::GameOver, T::Restart) => enter(S::Playing, true, true),
        (S::GameOver, T::Menu) => enter(S::Menu, true, false),

        _ => Step::Ignore,
    }
}

/// Session plus screen, driven by input tokens and per-frame ticks
pub struct Game<O: GameObserver = NullObserver> {
    screen: Screen,
    session: Session,
    observer: O,
}

impl Game<NullObserver> {
    /// Game on the menu screen with no observer
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: GameObserver> Game<O> {
    pub fn with_observer(config: GameConfig, observer: O) -> Result<Self, EngineError> {
        Ok(Self {
            screen: Screen::Menu,
            session: Session::new(config)?,
            observer,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current screen name (`MENU`, `PLAYING`, `PAUSED`, `GAME_OVER`)
    pub fn state_name(&self) -> &'static str {
        self.screen.as_str()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.screen, &self.session)
    }

    /// Route one input token
    pub fn handle_input(&mut self, token: InputToken) -> Flow {
        match transition(self.screen, token) {
            Step::Ignore => {}
            Step::Quit => return Flow::Quit,
            Step::Act(action) => {
                match action {
                    PieceAction::Left => {
                        self.session.move_left();
                    }
                    PieceAction::Right => {
                        self.session.move_right();
                    }
                    PieceAction::Down => {
                        self.session.move_down();
                    }
                    PieceAction::Rotate => {
                        self.session.rotate();
                    }
                    PieceAction::Drop => {
                        self.session.drop_piece();
                    }
                }
                self.dispatch_events();
            }
            Step::Enter {
                screen,
                reset,
                new_game,
            } => {
                if reset {
                    self.session.reset_game();
                }
                self.enter(screen);
                if new_game {
                    self.session.initialize_game();
                    self.dispatch_events();
                    self.check_game_over();
                }
            }
        }
        Flow::Continue
    }

    /// Parse and route a textual token; unknown tokens are ignored
    pub fn handle_raw_input(&mut self, raw: &str) -> Flow {
        match InputToken::from_str(raw) {
            Some(token) => self.handle_input(token),
            None => Flow::Continue,
        }
    }

    /// Advance the session by `dt` seconds; only runs while Playing
    pub fn update(&mut self, dt: f64) {
        if self.screen != Screen::Playing {
            return;
        }
        self.session.update(dt);
        self.dispatch_events();
        self.check_game_over();
    }

    pub fn start_new_game(&mut self) -> Flow {
        self.handle_input(InputToken::Start)
    }

    pub fn pause(&mut self) -> Flow {
        self.handle_input(InputToken::Pause)
    }

    pub fn resume(&mut self) -> Flow {
        self.handle_input(InputToken::Resume)
    }

    pub fn return_to_menu(&mut self) -> Flow {
        self.handle_input(InputToken::Menu)
    }

    pub fn restart(&mut self) -> Flow {
        self.handle_input(InputToken::Restart)
    }

    fn enter(&mut self, screen: Screen) {
        let from = self.screen;
        self.screen = screen;
        self.observer.on_transition(from, screen);
    }

    fn check_game_over(&mut self) {
        if self.screen == Screen::Playing && self.session.is_game_over() {
            self.enter(Screen::GameOver);
            self.observer.on_game_over(
                self.session.score(),
                self.session.level(),
                self.session.lines_cleared(),
            );
        }
    }

    fn dispatch_events(&mut self) {
        let Some(event) = self.session.take_last_event() else {
            return;
        };
        match event {
            SessionEvent::Spawned { kind, description } => {
                self.observer.on_spawn(kind, &description);
            }
            SessionEvent::SpawnBlocked { kind } => {
                self.observer.on_spawn_blocked(kind);
            }
            SessionEvent::Locked(lock) => {
                self.observer.on_lock(&lock);
                if lock.lines_cleared > 0 {
                    self.observer.on_lines_cleared(
                        lock.lines_cleared,
                        lock.score_awarded,
                        self.session.score(),
                    );
                }
            }
        }
    }
}
