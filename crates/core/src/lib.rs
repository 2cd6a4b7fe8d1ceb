//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains the rules of the 6x6 block-placement puzzle: placement
//! legality, line clears, the leftover-to-junk transformation, scoring, rotation
//! and the "no move left" check. It has **zero dependencies** on UI, storage or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical hands
//! - **Pure**: Rule operations take a board by reference and return a new one
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 6x6 grid of empty / filled / junk cells and full-line scans
//! - [`shapes`]: normalized polyomino offsets and 90° rotation
//! - [`catalog`]: shape templates and hand dealing (hands are capped at
//!   [`types::HAND_SIZE`] shapes)
//! - [`rng`]: injectable random source with a seeded LCG default
//! - [`placement`]: `can_place` and the clear/leftover processor
//! - [`scoring`]: per-block, per-line, clean-clear and combo points
//! - [`oracle`]: exhaustive move availability search
//! - [`snapshot`]: session state value and its persistence codec
//! - [`session`]: caller-side game loop with bounded undo history
//!
//! # Game Rules
//!
//! - A row or column is full when none of its cells is empty; junk counts.
//! - Filled cells in a full line are emptied. Every other cell belonging to a
//!   placement that lost a cell becomes junk.
//! - Junk never clears, moves or belongs to anything.
//! - Clean clears build a combo; junk or a non-clearing placement resets it.
//!
//! # Example
//!
//! ```
//! use junk_blocks_core::{apply_placement, can_place, create_empty_board, Shape};
//! use junk_blocks_core::types::{Color, ShapeId, ShapeKind};
//!
//! let board = create_empty_board();
//! let domino = Shape::new(ShapeId(0), ShapeKind::DominoH, &[(0, 0), (1, 0)], Color::Red).unwrap();
//!
//! assert!(can_place(&board, &domino, 0, 0));
//! let outcome = apply_placement(&board, &domino, 0, 0, 0);
//!
//! assert_eq!(outcome.lines_cleared, 0);
//! assert_eq!(outcome.points, 20);
//! assert_eq!(outcome.combo_out, 0);
//! ```

pub mod board;
pub mod catalog;
pub mod oracle;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use junk_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{create_empty_board, Board, BoardLayoutError};
pub use catalog::{generate_hand, Hand, HandDealer, CATALOG};
pub use oracle::{can_place_anywhere, find_placement, MoveHint};
pub use placement::{apply_placement, can_place, PlacementOutcome};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{calculate_score, next_combo, ScoreResult};
pub use session::{GameSession, History, PlaceError};
pub use shapes::{rotate, Shape, ShapeError};
pub use snapshot::{SessionSnapshot, SnapshotError};
