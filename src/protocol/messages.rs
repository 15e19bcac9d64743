//! Protocol messages for client-server communication.
//!
//! All messages are serialized as JSON over WebSocket, tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::session::{Intent, SessionView};

/// Messages sent from client to server: one intent for the connection's session.
pub type ClientMessage = Intent;

/// Messages sent from server to client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Connection accepted and a fresh session created.
    Welcome {
        session_id: String,
        total_poems: usize,
    },

    /// Session snapshot, sent on connect and after every accepted intent.
    State { view: SessionView },

    /// The last intent failed; the session is unchanged.
    Rejected { reason: String },

    /// Server is shutting down.
    ServerClosing,
}

/// Default server port.
pub const DEFAULT_PORT: u16 = 8712;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameMode;
    use crate::session::Session;

    #[test]
    fn test_message_serialization() {
        let msg = ServerMessage::Welcome {
            session_id: "abc".to_string(),
            total_poems: 100,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"Welcome\""));

        let msg = ServerMessage::State {
            view: Session::new(GameMode::Author).view(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"State\""));
        assert!(json.contains("\"mode\":\"author\""));
        assert!(json.contains("\"phase\":\"idle\""));

        let back: ServerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_client_message_parsing() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"NewQuestion"}"#).unwrap();
        assert_eq!(msg, Intent::NewQuestion);

        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"Join"}"#).is_err());
    }
}
