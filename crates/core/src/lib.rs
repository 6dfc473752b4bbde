//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid/piece state machine and nothing else: no
//! terminal, no timers, no threads. Randomness comes from a seeded
//! [`rand::rngs::StdRng`], so the same seed replays the same piece sequence.
//!
//! # Module Structure
//!
//! - [`shape`]: square bitmaps with four cached clockwise rotations
//! - [`mino`]: the active piece (shared shape + rotation + anchor)
//! - [`grid`]: cell storage, collision, locking and line clearing
//! - [`scoring`]: the fixed line-clear table
//! - [`game`]: spawn / fall / lock / clear / game-over transitions
//! - [`snapshot`]: borrowed per-frame view for renderers
//!
//! # Rules
//!
//! - Pieces are chosen uniformly at random, optionally through a look-ahead queue
//! - Rotation is naive: a turn that collides is rejected, there are no wall kicks
//! - A piece locks when a gravity tick cannot move it down
//! - Clearing 1/2/3/4 rows with one lock scores 100/300/500/800
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use minotris_core::{Game, GameConfig, ShapeSet};
//! use minotris_types::Command;
//!
//! let shapes = ShapeSet::standard().expect("canonical shapes are valid");
//! let mut game = Game::new(&GameConfig::default(), shapes, 12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateRight);
//! game.apply(Command::Drop);
//! game.tick(); // locks the dropped piece and spawns the next one
//!
//! assert!(!game.is_over());
//! assert_eq!(game.score(), Some(0));
//! ```

pub mod game;
pub mod grid;
pub mod mino;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use minotris_types as types;

// Re-export commonly used types for convenience
pub use game::{Game, GameConfig, Phase, TickOutcome};
pub use grid::Grid;
pub use mino::{Mino, MinoCells, Turn};
pub use scoring::score_for_lines;
pub use shape::{Shape, ShapeError, ShapeSet};
pub use snapshot::Snapshot;
