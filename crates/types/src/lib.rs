//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the rules engine.
//! All types are plain data with no behavior beyond small accessors, making them
//! usable in any context (core logic, persistence, presentation adapters).
//!
//! # Board Dimensions
//!
//! The board is a fixed 6x6 grid:
//!
//! - **Columns**: indexed 0-5 (x, left to right)
//! - **Rows**: indexed 0-5 (y, top to bottom)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_BLOCK` | 10 | Reward per cell for a placement that clears nothing |
//! | `POINTS_PER_LINE` | 100 | Reward per cleared row or column |
//! | `CLEAN_CLEAR_BONUS_PER_LINE` | 50 | Extra per line when no junk was created |
//! | `COMBO_STEP_BONUS` | 100 | Streak bonus per combo step past the first |
//!
//! # Examples
//!
//! ```
//! use junk_blocks_types::{Cell, CellStatus, Color, ShapeKind, BOARD_SIZE, JUNK_COLOR};
//!
//! assert_eq!(BOARD_SIZE, 6);
//!
//! let kind = ShapeKind::from_str("corner_ne").unwrap();
//! assert_eq!(kind, ShapeKind::CornerNe);
//!
//! assert_eq!(Cell::Junk.status(), CellStatus::Junk);
//! assert_eq!(Cell::Junk.color(), Some(JUNK_COLOR));
//! assert_eq!(Cell::Empty.color(), None::<Color>);
//! ```

use serde::{Deserialize, Serialize};

/// Board side length in cells (6 columns x 6 rows)
pub const BOARD_SIZE: u8 = 6;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of shapes dealt into a fresh hand
pub const HAND_SIZE: usize = 3;

/// Largest polyomino in the catalog (trominoes)
pub const MAX_SHAPE_CELLS: usize = 3;

/// Number of distinct 90° orientations considered by the move oracle
pub const ROTATION_COUNT: u8 = 4;

/// Snapshots kept for undo before the oldest is evicted
pub const HISTORY_LIMIT: usize = 20;

/// Points per stamped cell when a placement clears no lines
pub const POINTS_PER_BLOCK: u32 = 10;

/// Points per cleared row or column
pub const POINTS_PER_LINE: u32 = 100;

/// Extra points per cleared line when the clear produced no junk
pub const CLEAN_CLEAR_BONUS_PER_LINE: u32 = 50;

/// Streak bonus per combo step beyond the first (combo 2 => +100, combo 3 => +200)
pub const COMBO_STEP_BONUS: u32 = 100;

/// Display colors for shapes and cells (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Gray => "gray",
        }
    }
}

/// Colors a freshly dealt shape may receive (uniform draw)
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
];

/// Fixed color reported for junk cells
pub const JUNK_COLOR: Color = Color::Gray;

/// Identifier of a dealt shape. Survives rotation; never reused by a dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u32);

/// Identifier of one stamping of a shape onto the board.
///
/// Two placements of the same shape template always get different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementId(pub u32);

/// Catalog templates
///
/// Corner trominoes are named after the corner of their 2x2 bounding box that
/// holds the elbow cell:
/// - **CornerNw**: (0,0) (1,0) (0,1)
/// - **CornerNe**: (0,0) (1,0) (1,1)
/// - **CornerSe**: (1,0) (0,1) (1,1)
/// - **CornerSw**: (0,0) (0,1) (1,1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Dot,
    DominoH,
    DominoV,
    DominoDiag,
    TrominoH,
    TrominoV,
    CornerNw,
    CornerNe,
    CornerSe,
    CornerSw,
}

impl ShapeKind {
    /// Every template, in catalog order
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Dot,
        ShapeKind::DominoH,
        ShapeKind::DominoV,
        ShapeKind::DominoDiag,
        ShapeKind::TrominoH,
        ShapeKind::TrominoV,
        ShapeKind::CornerNw,
        ShapeKind::CornerNe,
        ShapeKind::CornerSe,
        ShapeKind::CornerSw,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use junk_blocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("dot"), Some(ShapeKind::Dot));
    /// assert_eq!(ShapeKind::from_str("DOMINO_DIAG"), Some(ShapeKind::DominoDiag));
    /// assert_eq!(ShapeKind::from_str("tetromino"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Some(ShapeKind::Dot),
            "domino_h" => Some(ShapeKind::DominoH),
            "domino_v" => Some(ShapeKind::DominoV),
            "domino_diag" => Some(ShapeKind::DominoDiag),
            "tromino_h" => Some(ShapeKind::TrominoH),
            "tromino_v" => Some(ShapeKind::TrominoV),
            "corner_nw" => Some(ShapeKind::CornerNw),
            "corner_ne" => Some(ShapeKind::CornerNe),
            "corner_se" => Some(ShapeKind::CornerSe),
            "corner_sw" => Some(ShapeKind::CornerSw),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Dot => "dot",
            ShapeKind::DominoH => "domino_h",
            ShapeKind::DominoV => "domino_v",
            ShapeKind::DominoDiag => "domino_diag",
            ShapeKind::TrominoH => "tromino_h",
            ShapeKind::TrominoV => "tromino_v",
            ShapeKind::CornerNw => "corner_nw",
            ShapeKind::CornerNe => "corner_ne",
            ShapeKind::CornerSe => "corner_se",
            ShapeKind::CornerSw => "corner_sw",
        }
    }
}

/// Logical status of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Empty,
    Filled,
    Junk,
}

/// A cell on the game board
///
/// - `Empty`: free for placement
/// - `Filled`: stamped by a placement; carries that placement's id
/// - `Junk`: left behind by a partial clear; never owned, never cleared
///
/// Ownership lives inside `Filled`, so a junk or empty cell cannot carry an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Filled {
        color: Color,
        owner: PlacementId,
    },
    Junk,
}

impl Cell {
    pub fn status(&self) -> CellStatus {
        match self {
            Cell::Empty => CellStatus::Empty,
            Cell::Filled { .. } => CellStatus::Filled,
            Cell::Junk => CellStatus::Junk,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owning placement, present only for filled cells
    pub fn owner(&self) -> Option<PlacementId> {
        match self {
            Cell::Filled { owner, .. } => Some(*owner),
            _ => None,
        }
    }

    /// Display color; junk always reports [`JUNK_COLOR`]
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled { color, .. } => Some(*color),
            Cell::Junk => Some(JUNK_COLOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_defaults() {
        assert_eq!(POINTS_PER_BLOCK, 10);
        assert_eq!(POINTS_PER_LINE, 100);
        assert_eq!(CLEAN_CLEAR_BONUS_PER_LINE, 50);
        assert_eq!(COMBO_STEP_BONUS, 100);
    }

    #[test]
    fn shape_kind_names_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn only_filled_cells_have_owners() {
        let filled = Cell::Filled {
            color: Color::Blue,
            owner: PlacementId(7),
        };
        assert_eq!(filled.owner(), Some(PlacementId(7)));
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Junk.owner(), None);
    }

    #[test]
    fn palette_excludes_junk_color() {
        assert!(!PALETTE.contains(&JUNK_COLOR));
    }

    #[test]
    fn cell_serializes_with_status_tag() {
        let json = serde_json::to_string(&Cell::Junk).unwrap();
        assert_eq!(json, r#"{"status":"junk"}"#);

        let filled = Cell::Filled {
            color: Color::Red,
            owner: PlacementId(3),
        };
        let json = serde_json::to_string(&filled).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filled);
    }
}
