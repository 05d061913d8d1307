//! Board engine: grid state, piece movement, rotation, locking, and line
//! clearing. Pure logic, no I/O and no wall-clock time.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use engine::GameState;
pub use piece::{ActivePiece, Shape};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
