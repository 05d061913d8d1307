//! Terminal presentation layer: framebuffer, renderer, and game view.
//!
//! Everything here is derived, disposable render state rebuilt from engine
//! snapshots; nothing in this module mutates the game.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
