//! Read-only view of the game state handed to the presentation layer.

use crate::core::piece::{ActivePiece, Shape};
use crate::types::{Cell, PieceKind};

/// The falling piece as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i32,
    pub col: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            row: value.row,
            col: value.col,
        }
    }
}

/// A full copy of everything a renderer needs for one frame.
///
/// Snapshots are disposable: the presentation layer recreates its artifacts
/// from a fresh snapshot after every command and never mutates engine state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    rows: usize,
    cols: usize,
    /// Locked cells, row-major.
    grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub(crate) fn new(
        rows: usize,
        cols: usize,
        grid: Vec<Cell>,
        active: Option<ActiveSnapshot>,
        started: bool,
        paused: bool,
        game_over: bool,
    ) -> Self {
        debug_assert_eq!(grid.len(), rows * cols);
        Self {
            rows,
            cols,
            grid,
            active,
            started,
            paused,
            game_over,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Locked cell at (row, col); None when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.grid[row * self.cols + col])
    }

    pub fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }
}
