//! Oracle module - is any move left?
//!
//! Exhaustive search over hand shapes x 4 rotations x every anchor on the board.
//! At 6x6 with at most 3 shapes that is under 450 `can_place` calls.

use crate::board::Board;
use crate::placement::can_place;
use crate::shapes::{rotate, Shape};
use crate::types::{BOARD_SIZE, ROTATION_COUNT};

/// A legal move found by the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveHint {
    /// Index into the hand
    pub hand_index: usize,
    /// Clockwise quarter turns to apply before placing (0..4)
    pub rotations: u8,
    pub x: i8,
    pub y: i8,
}

/// First legal placement in search order: hand order, then rotations 0..4, then
/// rows top to bottom, then columns left to right.
pub fn find_placement(board: &Board, hand: &[Shape]) -> Option<MoveHint> {
    for (hand_index, shape) in hand.iter().enumerate() {
        let mut oriented = shape.clone();
        for rotations in 0..ROTATION_COUNT {
            if rotations > 0 {
                oriented = rotate(&oriented);
            }
            if let Some((x, y)) = find_anchor(board, &oriented) {
                return Some(MoveHint {
                    hand_index,
                    rotations,
                    x,
                    y,
                });
            }
        }
    }
    None
}

/// First anchor where `shape` fits as-is
pub fn find_anchor(board: &Board, shape: &Shape) -> Option<(i8, i8)> {
    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            if can_place(board, shape, x, y) {
                return Some((x, y));
            }
        }
    }
    None
}

/// True if some shape in `hand` fits somewhere in some rotation.
///
/// An empty hand is vacuously placeable; callers refill before asking.
pub fn can_place_anywhere(board: &Board, hand: &[Shape]) -> bool {
    hand.is_empty() || find_placement(board, hand).is_some()
}
