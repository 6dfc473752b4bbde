//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view paints a framebuffer from
//! a game snapshot, and the renderer flushes only the changed cells to the
//! terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so layouts can be unit-tested
//! - Map color ids onto the 8 basic ANSI colors

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;
pub mod screen;

pub use minotris_core as core;
pub use minotris_engine as engine;
pub use minotris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use palette::{cell_color, term_color};
pub use renderer::{encode_frame, TerminalRenderer};
pub use screen::TerminalScreen;
