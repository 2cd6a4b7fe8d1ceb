//! Placement module - legality check and the clear/leftover processor
//!
//! [`apply_placement`] stamps a shape, clears every full row and column, and turns
//! the uncleared remainder of each shape that lost cells to the clear into junk.
//! Junk is inert: it is never removed, even when a cleared line runs through it.

use arrayvec::ArrayVec;

use crate::board::{Board, LineSet};
use crate::scoring::{calculate_score, next_combo, ScoreResult};
use crate::shapes::Shape;
use crate::types::{Cell, PlacementId, BOARD_CELLS, BOARD_SIZE};

/// Result of stamping a shape and resolving clears
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Fresh board; the input board is never touched
    pub board: Board,
    /// Id stamped onto the shape's cells
    pub placement_id: PlacementId,
    pub cleared_rows: LineSet,
    pub cleared_cols: LineSet,
    /// Full rows plus full columns
    pub lines_cleared: u32,
    /// Filled cells converted to junk
    pub junk_created: u32,
    pub score: ScoreResult,
    /// Equal to `score.total`
    pub points: u32,
    pub combo_out: u32,
}

/// Check whether `shape` fits at anchor (x, y): every covered cell must be on the
/// board and empty.
pub fn can_place(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape
        .offsets()
        .iter()
        .all(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
            (Some(px), Some(py)) => board.is_valid(px, py),
            _ => false,
        })
}

/// Stamp `shape` at (x, y), clear full lines, convert leftovers to junk and score.
///
/// The caller must have checked [`can_place`] first; an illegal placement is not
/// re-validated and leaves the result unspecified.
pub fn apply_placement(
    board: &Board,
    shape: &Shape,
    x: i8,
    y: i8,
    combo_in: u32,
) -> PlacementOutcome {
    let mut next = board.clone();
    let placement_id = next.allocate_placement_id();

    for (px, py) in shape.cells_at(x, y) {
        next.set(
            px,
            py,
            Cell::Filled {
                color: shape.color,
                owner: placement_id,
            },
        );
    }

    let cleared_rows = next.full_rows();
    let cleared_cols = next.full_cols();
    let lines_cleared = (cleared_rows.len() + cleared_cols.len()) as u32;

    let junk_created = if lines_cleared == 0 {
        0
    } else {
        resolve_clear(&mut next, &cleared_rows, &cleared_cols)
    };

    let combo_out = next_combo(combo_in, lines_cleared, junk_created);
    let score = calculate_score(
        shape.cell_count() as u32,
        lines_cleared,
        junk_created,
        combo_out,
    );

    PlacementOutcome {
        board: next,
        placement_id,
        cleared_rows,
        cleared_cols,
        lines_cleared,
        junk_created,
        points: score.total,
        score,
        combo_out,
    }
}

/// Empty the cleared cells and junk the rest of every affected placement.
/// Returns the number of cells turned into junk.
fn resolve_clear(board: &mut Board, rows: &[u8], cols: &[u8]) -> u32 {
    let size = BOARD_SIZE as usize;

    let mut cleared = [false; BOARD_CELLS];
    for &row in rows {
        let start = row as usize * size;
        cleared[start..start + size].fill(true);
    }
    for &col in cols {
        for y in 0..size {
            cleared[y * size + col as usize] = true;
        }
    }

    // Owners that lost at least one cell; junk has no owner and never contributes.
    let mut affected: ArrayVec<PlacementId, BOARD_CELLS> = ArrayVec::new();
    for (idx, cell) in board.cells().iter().enumerate() {
        if let (true, Some(owner)) = (cleared[idx], cell.owner()) {
            if !affected.contains(&owner) {
                affected.push(owner);
            }
        }
    }

    let mut junk_created = 0;
    for (idx, cell) in board.cells_mut().iter_mut().enumerate() {
        match *cell {
            Cell::Junk | Cell::Empty => {}
            Cell::Filled { .. } if cleared[idx] => *cell = Cell::Empty,
            Cell::Filled { owner, .. } if affected.contains(&owner) => {
                *cell = Cell::Junk;
                junk_created += 1;
            }
            Cell::Filled { .. } => {}
        }
    }
    junk_created
}
