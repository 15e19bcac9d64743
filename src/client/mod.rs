//! Quiz client module.
//!
//! Plays a remote session hosted by the quiz server.

mod client;
mod state;
mod ui;

pub use client::run;
pub use state::{ClientApp, ConnectionStatus};
