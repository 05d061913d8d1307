//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Default board dimensions.
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 10;

/// Default gravity interval (milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

/// Default board cell size in terminal columns/rows.
/// 2x1 compensates for the typical terminal glyph aspect ratio.
pub const DEFAULT_CELL_W: u16 = 2;
pub const DEFAULT_CELL_H: u16 = 1;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    Z,
    S,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds, in the order the shape table lists them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind).
///
/// The engine only distinguishes empty from filled; the kind is retained
/// so the renderer can color locked cells.
pub type Cell = Option<PieceKind>;

/// Commands the presentation layer can issue to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    Pause,
    Resume,
    Restart,
}

/// Recognized configuration options.
///
/// Board dimensions are captured by the engine at construction and never
/// change afterwards. `cell_w`/`cell_h` are rendering-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval_ms: u64,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            cell_w: DEFAULT_CELL_W,
            cell_h: DEFAULT_CELL_H,
        }
    }
}
