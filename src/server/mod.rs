//! Quiz server module.
//!
//! Hosts the game over WebSocket. Each connection is its own session.

mod server;

pub use server::{run, serve};
