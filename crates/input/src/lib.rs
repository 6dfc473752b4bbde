//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and runs the
//! blocking key reader that feeds the game loop over a channel.

pub mod map;
pub mod reader;

pub use minotris_types as types;

pub use map::{is_quit, map_key};
pub use reader::{pump_events, spawn_reader};
