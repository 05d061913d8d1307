//! Blockfall: a terminal falling-block puzzle game.
//!
//! The crate is split along the engine/presentation boundary: `core` owns
//! all game state and rules, `term` renders snapshots, `input` maps keys to
//! commands, and the binary wires them together with a fixed-interval
//! gravity scheduler.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
