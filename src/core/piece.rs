//! Piece module - tetromino shapes and rotation.
//!
//! A `Shape` is an immutable boolean matrix over its bounding box. The seven
//! canonical shapes use the original matrices (I is 1x4, O is 2x2, the rest
//! 2x3). Rotation is a plain 90-degree clockwise matrix rotation with no
//! wall-kick adjustment; it produces a new `Shape` with swapped dimensions.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest bounding box a shape (or any of its rotations) can have.
pub const MAX_SHAPE_DIM: usize = 4;

/// Largest number of cells a bounding box can hold.
pub const MAX_SHAPE_AREA: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Cells in a tetromino.
pub const SHAPE_CELLS: usize = 4;

/// An immutable 2D boolean matrix describing which cells of the bounding box
/// are occupied. Packed into a bitmask, addressed row-major like the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: u16,
}

impl Shape {
    /// Build a shape from matrix rows. Rows must be non-empty, equal-length,
    /// and fit in the 4x4 bounding box.
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);

        let mut bits = 0u16;
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape matrix");
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    bits |= 1 << (r * cols + c);
                }
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        }
    }

    /// The canonical (spawn orientation) matrix for a piece kind.
    pub fn canonical(kind: PieceKind) -> Self {
        const X: bool = true;
        const O: bool = false;
        match kind {
            PieceKind::I => Self::from_rows(&[&[X, X, X, X]]),
            PieceKind::O => Self::from_rows(&[&[X, X], &[X, X]]),
            PieceKind::Z => Self::from_rows(&[&[X, X, O], &[O, X, X]]),
            PieceKind::S => Self::from_rows(&[&[O, X, X], &[X, X, O]]),
            PieceKind::T => Self::from_rows(&[&[X, X, X], &[O, X, O]]),
            PieceKind::L => Self::from_rows(&[&[X, X, X], &[O, O, X]]),
            PieceKind::J => Self::from_rows(&[&[X, X, X], &[X, O, O]]),
        }
    }

    /// Bounding box height.
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Bounding box width.
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the bounding-box cell (row, col) is occupied.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        if row >= self.rows() || col >= self.cols() {
            return false;
        }
        self.bits & (1 << (row * self.cols() + col)) != 0
    }

    /// Occupied cells as (row, col) offsets from the bounding-box top-left.
    pub fn offsets(&self) -> ArrayVec<(i32, i32), MAX_SHAPE_AREA> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.filled(r, c) {
                    out.push((r as i32, c as i32));
                }
            }
        }
        out
    }

    /// Rotate 90 degrees clockwise, yielding a cols x rows matrix where
    /// `rotated[c][rows - 1 - r] = self[r][c]`.
    pub fn rotate_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = 0u16;
        for r in 0..rows {
            for c in 0..cols {
                if self.filled(r, c) {
                    // New position: row = c, col = rows - 1 - r, width = rows.
                    bits |= 1 << (c * rows + (rows - 1 - r));
                }
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

/// The falling piece: a shape plus the grid position of its bounding-box
/// top-left corner. Replaced wholesale on spawn, never mutated into a
/// different shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// Create a piece in spawn orientation at the given anchor.
    pub fn new(kind: PieceKind, row: i32, col: i32) -> Self {
        Self {
            kind,
            shape: Shape::canonical(kind),
            row,
            col,
        }
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> ArrayVec<(i32, i32), MAX_SHAPE_AREA> {
        let mut out = ArrayVec::new();
        for (dr, dc) in self.shape.offsets() {
            out.push((self.row + dr, self.col + dc));
        }
        out
    }
}
