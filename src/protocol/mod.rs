//! JSON messages exchanged with WebSocket clients.

mod messages;

pub use messages::{ClientMessage, DEFAULT_PORT, ServerMessage};
