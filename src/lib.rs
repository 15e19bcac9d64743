//! # hyakunin-quiz
//!
//! A Hyakunin Isshu (百人一首) quiz game: guess the lower verse of a poem or
//! its author from four choices while a running score is kept.
//!
//! The game logic is front-end agnostic. A [`Session`] is driven by
//! [`Intent`]s and exposes a [`SessionView`] snapshot; the terminal UI, the
//! WebSocket [`server`] and its [`client`] are thin layers over it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hyakunin_quiz::{Game, GameMode, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let game = Game::from_json("hyakunin_isshu.json", GameMode::LowerVerse)?;
//!     game.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod client;
mod data;
pub mod generator;
pub mod input;
pub mod logging;
mod models;
pub mod protocol;
pub mod server;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{DEFAULT_POEMS_PATH, DataError, PoemStore};
pub use generator::{build_choices, generate_question};
pub use models::{CHOICE_COUNT, GameMode, Poem, Question, Score};
pub use session::{AnswerOutcome, Intent, Phase, Session, SessionView};

use input::{Action, action_for_key};
use ui::Screen;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] DataError),

    #[error("no poems are loaded")]
    EmptyCorpus,

    #[error("question generation failed: {0}")]
    Generation(String),

    #[error("cannot {action} while {phase}")]
    InvalidAction { action: &'static str, phase: Phase },

    #[error("choice {index} is out of range (0..{count})")]
    InvalidChoice { index: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A local game that can be run in the terminal.
pub struct Game {
    app: App,
}

impl Game {
    pub fn new(store: PoemStore, mode: GameMode) -> Self {
        Self {
            app: App::new(store, mode),
        }
    }

    /// Load the corpus from a JSON file.
    ///
    /// ```rust,no_run
    /// use hyakunin_quiz::{Game, GameMode};
    ///
    /// let game = Game::from_json("hyakunin_isshu.json", GameMode::Author).expect("corpus");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, mode: GameMode) -> Result<Self, QuizError> {
        let store = PoemStore::load(path)?;
        Ok(Self::new(store, mode))
    }

    /// Run the game in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        run_event_loop(&mut term, &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::GameTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        let view = app.view();
        terminal.draw(|frame| {
            ui::render(
                frame,
                &Screen {
                    view: &view,
                    cursor: app.cursor(),
                    notice: app.notice(),
                    status: None,
                },
            )
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, &view, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the game should exit.
fn handle_input(app: &mut App, view: &SessionView, key: KeyCode) -> bool {
    match action_for_key(view, app.cursor(), key) {
        Action::Dispatch(intent) => {
            app.dispatch(intent);
            false
        }
        Action::CursorUp => {
            app.cursor_up();
            false
        }
        Action::CursorDown => {
            app.cursor_down();
            false
        }
        Action::Quit => true,
        Action::Ignore => false,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::Poem;

    pub fn poem(id: u32) -> Poem {
        Poem {
            id,
            author: format!("author {}", id),
            upper: format!("upper {}", id),
            lower: format!("lower {}", id),
            reading_upper: format!("reading upper {}", id),
            reading_lower: format!("reading lower {}", id),
            description: format!("description {}", id),
        }
    }
}
