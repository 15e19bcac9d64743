use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use crate::data::PoemStore;
use crate::input::{next_cursor, previous_cursor};
use crate::models::GameMode;
use crate::session::{Intent, Session, SessionView};

/// Local single-player game: one session over an owned corpus.
pub struct App {
    store: PoemStore,
    session: Session,
    rng: StdRng,
    cursor: usize,
    notice: Option<String>,
}

impl App {
    pub fn new(store: PoemStore, mode: GameMode) -> Self {
        Self::with_rng(store, mode, StdRng::from_entropy())
    }

    pub fn with_rng(store: PoemStore, mode: GameMode, rng: StdRng) -> Self {
        Self {
            store,
            session: Session::new(mode),
            rng,
            cursor: 0,
            notice: None,
        }
    }

    pub fn store(&self) -> &PoemStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn cursor_down(&mut self) {
        self.cursor = next_cursor(self.cursor);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = previous_cursor(self.cursor);
    }

    /// Apply an intent. Failures become the on-screen notice and leave the
    /// session as it was.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match self.session.dispatch(intent, &self.store, &mut self.rng) {
            Ok(()) => {
                self.cursor = 0;
                self.notice = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "intent rejected");
                self.notice = Some(err.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;
    use crate::test_support::poem;

    fn app() -> App {
        let store = PoemStore::new((1..=10).map(poem).collect());
        App::with_rng(store, GameMode::LowerVerse, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_dispatch_resets_cursor() {
        let mut app = app();
        assert!(app.dispatch(Intent::NewQuestion));
        app.cursor_down();
        app.cursor_down();
        assert_eq!(app.cursor(), 2);

        assert!(app.dispatch(Intent::Answer { choice: app.cursor() }));
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.session().phase(), Phase::ShowingResult);
    }

    #[test]
    fn test_rejected_intent_sets_notice() {
        let mut app = app();
        assert!(!app.dispatch(Intent::Next));
        assert!(app.notice().is_some());
        assert_eq!(app.session().phase(), Phase::Idle);

        assert!(app.dispatch(Intent::NewQuestion));
        assert!(app.notice().is_none());
    }
}
