//! Board module - manages the game grid.
//!
//! The board is a `rows x cols` grid (defaults 20x10) where each cell is
//! empty or filled with a piece kind. Storage is a flat row-major `Vec` for
//! cache locality; dimensions are fixed at construction.
//! Coordinates: (row, col) with row 0 at the top and col 0 at the left.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind};

/// Most cleared rows a single lock can produce (a piece spans 4 rows).
pub const MAX_CLEARED_ROWS: usize = 4;

/// The occupancy grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col).
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Calculate flat index from (row, col), bounds-checked.
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= self.rows as i32 || col < 0 || col >= self.cols as i32 {
            return None;
        }
        Some((row as usize) * self.cols + (col as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a position is within bounds and empty.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if a position is within bounds and filled.
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Clear all full rows, shifting the rows above each down by one and
    /// leaving empty rows at the top. Returns the cleared row indices in
    /// ascending order. The grid keeps its height.
    ///
    /// Two-pointer compaction: non-full rows are copied down to the write
    /// cursor in a single bottom-up scan, so indices shifting during removal
    /// never need rescanning.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                // Capacity is MAX_CLEARED_ROWS; a single lock cannot complete
                // more rows than a piece spans, but stay safe regardless.
                let _ = cleared.try_push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * self.cols;
                    let dst = write_row * self.cols;
                    self.cells.copy_within(src..src + self.cols, dst);
                }
            }
        }

        // Rows above the write cursor become empty.
        for cell in &mut self.cells[..write_row * self.cols] {
            *cell = None;
        }

        cleared.reverse();
        cleared
    }

    /// Mark the given cell offsets, anchored at (row, col), as filled.
    ///
    /// Callers validate placement first; offsets that fall outside the grid
    /// are ignored rather than wrapped.
    pub fn fill_cells(&mut self, offsets: &[(i32, i32)], row: i32, col: i32, kind: PieceKind) {
        for &(dr, dc) in offsets {
            self.set(row + dr, col + dc, Some(kind));
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Raw cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_row_major_and_rejects_out_of_bounds() {
        let board = Board::new(20, 10);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut board = Board::new(20, 10);
        assert!(board.set(10, 5, Some(PieceKind::T)));
        assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));
        assert_eq!(board.cells()[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn fill_cells_ignores_out_of_range_offsets() {
        let mut board = Board::new(20, 10);
        board.fill_cells(&[(0, 0), (0, 1)], 19, 9, PieceKind::O);
        assert_eq!(board.get(19, 9), Some(Some(PieceKind::O)));
        // (19, 10) is outside; nothing wrapped onto another row.
        assert_eq!(board.get(19, 0), Some(None));
    }
}
