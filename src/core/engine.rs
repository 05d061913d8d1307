//! Engine module - owns the complete game state.
//!
//! The engine is driven by discrete commands (tick, move, rotate) and has no
//! notion of wall-clock time; the runner schedules gravity ticks. All
//! boundary and collision checks are boolean predicates consulted before
//! mutation, never failure signals.

use crate::core::board::Board;
use crate::core::piece::{ActivePiece, Shape};
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameConfig};

/// Complete game state: grid, active piece, and lifecycle flags.
///
/// Exclusively owned by whoever constructs it; presentation code reads
/// [`GameSnapshot`]s and issues commands, never touching the grid directly.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a fresh, not-yet-started game with the given RNG seed.
    pub fn new(config: &GameConfig, seed: u32) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            active: None,
            rng: SimpleRng::new(seed),
            started: false,
            paused: false,
            game_over: false,
        }
    }

    /// Begin a new game: fresh grid, first piece spawned. Also serves as
    /// restart on a finished or in-progress game.
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.started = true;
        self.paused = false;
        self.game_over = false;
        self.spawn_piece();
    }

    /// Freeze the game; tick/move/rotate become no-ops until resumed.
    pub fn pause(&mut self) {
        if self.started && !self.game_over {
            self.paused = true;
        }
    }

    /// Resume from a pause; state is exactly as it was frozen.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether commands currently advance the game.
    pub fn running(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Spawn row/column for new pieces: top row, horizontally centered.
    pub fn spawn_position(&self) -> (i32, i32) {
        (0, (self.board.cols() / 2) as i32 - 1)
    }

    /// Replace the active piece with a uniformly random one at the spawn
    /// position. If any of its cells is already filled, the stack has
    /// reached the top: the game enters a terminal game-over state.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_piece();
        let (row, col) = self.spawn_position();
        let piece = ActivePiece::new(kind, row, col);

        let blocked = piece
            .cells()
            .iter()
            .any(|&(r, c)| self.board.is_filled(r, c));
        if blocked {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Pure placement predicate: would the active piece's anchor shifted by
    /// (row_off, col_off), wearing `shape`, sit fully on open cells?
    ///
    /// False when any occupied cell would leave the grid or land on a
    /// filled cell.
    pub fn is_valid_move(&self, row_off: i32, col_off: i32, shape: &Shape) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        shape.offsets().iter().all(|&(dr, dc)| {
            self.board
                .is_open(active.row + dr + row_off, active.col + dc + col_off)
        })
    }

    /// One gravity step. Descend if possible; otherwise lock the piece into
    /// the grid, clear completed lines, and spawn the next piece.
    ///
    /// Returns true when the piece locked on this tick.
    pub fn tick(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.is_valid_move(1, 0, &active.shape) {
            self.active = Some(ActivePiece {
                row: active.row + 1,
                ..active
            });
            false
        } else {
            self.lock_piece();
            true
        }
    }

    /// Shift the active piece one column left; no-op when blocked.
    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    /// Shift the active piece one column right; no-op when blocked.
    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, col_off: i32) -> bool {
        if !self.running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.is_valid_move(0, col_off, &active.shape) {
            self.active = Some(ActivePiece {
                col: active.col + col_off,
                ..active
            });
            true
        } else {
            false
        }
    }

    /// Rotate the active piece 90 degrees clockwise in place (anchor
    /// unchanged, no wall kicks). Silently rejected when the rotated
    /// matrix does not fit.
    pub fn rotate(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotate_cw();
        if self.is_valid_move(0, 0, &rotated) {
            self.active = Some(ActivePiece {
                shape: rotated,
                ..active
            });
            true
        } else {
            false
        }
    }

    /// Commit the active piece into the grid, clear completed lines, and
    /// spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .fill_cells(&active.shape.offsets(), active.row, active.col, active.kind);
        self.board.clear_full_rows();
        self.spawn_piece();
    }

    /// Dispatch a presentation-layer command.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => {
                self.pause();
                self.paused
            }
            GameAction::Resume => {
                self.resume();
                true
            }
            GameAction::Restart => {
                self.start();
                true
            }
        }
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.rows(),
            self.board.cols(),
            self.board.cells().to_vec(),
            self.active.map(ActiveSnapshot::from),
            self.started,
            self.paused,
            self.game_over,
        )
    }
}
