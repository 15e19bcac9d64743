//! Client state management.

use crate::input::{next_cursor, previous_cursor};
use crate::protocol::ServerMessage;
use crate::session::SessionView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected { session_id: String, total_poems: usize },
    Disconnected { message: String },
}

/// Client application state. The session itself lives on the server; this
/// only mirrors its last snapshot.
pub struct ClientApp {
    pub host: String,
    pub port: u16,
    pub status: ConnectionStatus,
    pub should_quit: bool,
    view: Option<SessionView>,
    cursor: usize,
    notice: Option<String>,
}

impl ClientApp {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            status: ConnectionStatus::Connecting,
            should_quit: false,
            view: None,
            cursor: 0,
            notice: None,
        }
    }

    /// Get the server address string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn view(&self) -> Option<&SessionView> {
        self.view.as_ref()
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

    pub fn disconnect(&mut self, message: String) {
        self.status = ConnectionStatus::Disconnected { message };
    }

    /// An intent never reached the server. Keeps the first disconnect reason.
    pub fn send_failed(&mut self) {
        if !matches!(self.status, ConnectionStatus::Disconnected { .. }) {
            self.disconnect("Connection lost: input was not delivered".to_string());
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.status, ConnectionStatus::Connected { .. })
    }

    /// Line shown in the sidebar under the score.
    pub fn status_line(&self) -> String {
        match &self.status {
            ConnectionStatus::Connecting => format!("接続中 {}", self.server_addr()),
            ConnectionStatus::Connected { total_poems, .. } => {
                format!("{} · {}首", self.server_addr(), total_poems)
            }
            ConnectionStatus::Disconnected { message } => message.clone(),
        }
    }

    /// Fold a server message into the mirrored state.
    pub fn apply(&mut self, msg: ServerMessage) {
        match msg {
            ServerMessage::Welcome {
                session_id,
                total_poems,
            } => {
                self.status = ConnectionStatus::Connected {
                    session_id,
                    total_poems,
                };
            }
            ServerMessage::State { view } => {
                let round_changed = self
                    .view
                    .as_ref()
                    .is_none_or(|old| old.phase != view.phase || old.question != view.question);
                if round_changed {
                    self.cursor = 0;
                }
                self.view = Some(view);
                self.notice = None;
            }
            ServerMessage::Rejected { reason } => {
                self.notice = Some(reason);
            }
            ServerMessage::ServerClosing => {
                self.disconnect("Server is shutting down".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameMode, Score};
    use crate::session::{Phase, QuestionView};

    fn view(phase: Phase, prompt: &str) -> SessionView {
        SessionView {
            mode: GameMode::LowerVerse,
            phase,
            score: Score::default(),
            question: Some(QuestionView {
                prompt: prompt.to_string(),
                choices: ["a", "b", "c", "d"].map(String::from),
                kind: GameMode::LowerVerse,
            }),
            result: None,
        }
    }

    #[test]
    fn test_welcome_connects() {
        let mut app = ClientApp::new("127.0.0.1".to_string(), 8712);
        assert!(!app.is_connected());
        app.apply(ServerMessage::Welcome {
            session_id: "id".to_string(),
            total_poems: 100,
        });
        assert!(app.is_connected());
        assert_eq!(app.status_line(), "127.0.0.1:8712 · 100首");
    }

    #[test]
    fn test_cursor_survives_only_same_round() {
        let mut app = ClientApp::new("localhost".to_string(), 1);
        app.apply(ServerMessage::State {
            view: view(Phase::ShowingQuestion, "p"),
        });
        app.cursor_down();
        app.apply(ServerMessage::Rejected {
            reason: "nope".to_string(),
        });
        assert_eq!(app.cursor(), 1);
        assert_eq!(app.notice(), Some("nope"));

        app.apply(ServerMessage::State {
            view: view(Phase::ShowingQuestion, "p"),
        });
        assert_eq!(app.cursor(), 1);
        assert_eq!(app.notice(), None);

        app.apply(ServerMessage::State {
            view: view(Phase::ShowingQuestion, "q"),
        });
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_server_closing_disconnects() {
        let mut app = ClientApp::new("localhost".to_string(), 1);
        app.apply(ServerMessage::ServerClosing);
        assert_eq!(
            app.status,
            ConnectionStatus::Disconnected {
                message: "Server is shutting down".to_string()
            }
        );
    }

    #[test]
    fn test_send_failure_disconnects() {
        let mut app = ClientApp::new("localhost".to_string(), 1);
        app.apply(ServerMessage::Welcome {
            session_id: "id".to_string(),
            total_poems: 100,
        });
        app.apply(ServerMessage::State {
            view: view(Phase::ShowingQuestion, "p"),
        });

        app.send_failed();
        assert!(!app.is_connected());
        assert_eq!(app.status_line(), "Connection lost: input was not delivered");
    }

    #[test]
    fn test_send_failure_keeps_first_reason() {
        let mut app = ClientApp::new("localhost".to_string(), 1);
        app.disconnect("Connection error: broken pipe".to_string());
        app.send_failed();
        assert_eq!(
            app.status,
            ConnectionStatus::Disconnected {
                message: "Connection error: broken pipe".to_string()
            }
        );
    }
}
