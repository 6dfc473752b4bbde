//! minotris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `minotris::{core,engine,input,term,types}` and ships the binary.

pub use minotris_core as core;
pub use minotris_engine as engine;
pub use minotris_input as input;
pub use minotris_term as term;
pub use minotris_types as types;
