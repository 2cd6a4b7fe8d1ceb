//! Board module - manages the game grid
//!
//! The board is a 6x6 grid where each cell is empty, filled (owned by one placement)
//! or junk. Uses a flat array for cache locality and zero-allocation scans.
//! Coordinates: (x, y) where x is the column 0..5 (left to right) and y is the row
//! 0..5 (top to bottom).
//!
//! Boards are plain values. Rule operations take `&Board` and hand back a new one,
//! so a caller can keep old boards around for undo.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Cell, CellStatus, PlacementId, BOARD_CELLS, BOARD_SIZE};

/// Row or column indices found full during a scan
pub type LineSet = ArrayVec<u8, { BOARD_SIZE as usize }>;

/// The game board - 6 columns x 6 rows using flat array storage
///
/// Equality and hashing look at cells only; the placement counter is bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; BOARD_CELLS],
    /// Id handed to the next placement stamped onto this board
    next_placement: u32,
}

/// Rejected board layout when rebuilding from rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardLayoutError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognized cell {ch:?} at ({x}, {y})")]
    BadCell { ch: char, x: usize, y: usize },
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
            next_placement: 0,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_SIZE as i8 || y < 0 || y >= BOARD_SIZE as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_SIZE as usize) + (x as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                if let Some(owner) = cell.owner() {
                    self.next_placement = self.next_placement.max(owner.0.saturating_add(1));
                }
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is free for placement (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// A row is full when none of its cells is empty (junk counts as occupied)
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_SIZE as usize {
            return false;
        }
        let start = y * BOARD_SIZE as usize;
        let end = start + BOARD_SIZE as usize;
        self.cells[start..end].iter().all(|cell| !cell.is_empty())
    }

    /// A column is full when none of its cells is empty (junk counts as occupied)
    pub fn is_col_full(&self, x: usize) -> bool {
        if x >= BOARD_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(x)
            .step_by(BOARD_SIZE as usize)
            .all(|cell| !cell.is_empty())
    }

    /// Indices of all full rows, ascending
    pub fn full_rows(&self) -> LineSet {
        (0..BOARD_SIZE)
            .filter(|&y| self.is_row_full(y as usize))
            .collect()
    }

    /// Indices of all full columns, ascending
    pub fn full_cols(&self) -> LineSet {
        (0..BOARD_SIZE)
            .filter(|&x| self.is_col_full(x as usize))
            .collect()
    }

    /// Count cells with the given status
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|c| c.status() == status).count()
    }

    /// Id the next placement on this board will receive
    pub fn next_placement_id(&self) -> PlacementId {
        PlacementId(self.next_placement)
    }

    /// Reserve a fresh placement id
    pub(crate) fn allocate_placement_id(&mut self) -> PlacementId {
        let id = PlacementId(self.next_placement);
        self.next_placement = self.next_placement.wrapping_add(1);
        id
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the flat cells, row-major
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Build a board from ASCII rows (top to bottom).
    ///
    /// `.` is empty, `x` is junk, and a base-36 digit (`0-9`, `a-w`) is a filled
    /// cell owned by the placement with that id. Filled cells get the first
    /// palette color; color is irrelevant to the rules.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, BoardLayoutError> {
        let size = BOARD_SIZE as usize;
        if rows.len() != size {
            return Err(BoardLayoutError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != size {
                return Err(BoardLayoutError::RowWidth {
                    row: y,
                    expected: size,
                    found: chars.len(),
                });
            }
            for (x, &ch) in chars.iter().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'x' | 'X' => Cell::Junk,
                    c => match c.to_digit(36) {
                        Some(id) => Cell::Filled {
                            color: crate::types::PALETTE[0],
                            owner: PlacementId(id),
                        },
                        None => return Err(BoardLayoutError::BadCell { ch, x, y }),
                    },
                };
                board.set(x as i8, y as i8, cell);
            }
        }
        Ok(board)
    }

    /// Render rows as text: `.` empty, `#` filled, `x` junk
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(BOARD_SIZE as usize)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Filled { .. } => '#',
                        Cell::Junk => 'x',
                    })
                    .collect()
            })
            .collect()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::hash::Hash for Board {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board
            .cells
            .chunks(BOARD_SIZE as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardLayoutError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let size = BOARD_SIZE as usize;
        if rows.len() != size {
            return Err(BoardLayoutError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardLayoutError::RowWidth {
                    row: y,
                    expected: size,
                    found: row.len(),
                });
            }
            for (x, cell) in row.iter().enumerate() {
                // `set` keeps the placement counter ahead of every owner seen.
                board.set(x as i8, y as i8, *cell);
            }
        }
        Ok(board)
    }
}

/// Create an empty board
pub fn create_empty_board() -> Board {
    Board::new()
}
