//! Catalog module - shape templates and hand dealing
//!
//! Ten templates: the single cell, three dominoes (horizontal, vertical and the
//! diagonal-adjacency domino) and every tromino orientation. Draws are uniform
//! over the catalog with replacement; colors are uniform over [`PALETTE`].

use arrayvec::ArrayVec;

use crate::rng::{RandomSource, SimpleRng};
use crate::shapes::{CellOffset, Shape, ShapeCells};
use crate::types::{ShapeId, ShapeKind, HAND_SIZE, PALETTE};

/// Shapes currently offered to the player
pub type Hand = ArrayVec<Shape, HAND_SIZE>;

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub kind: ShapeKind,
    pub cells: &'static [CellOffset],
    /// Relative draw weight. Every template currently weighs 1 and draws are uniform.
    pub weight: u32,
}

/// The full catalog, in [`ShapeKind::ALL`] order
#[rustfmt::skip]
pub const CATALOG: [Template; 10] = [
    Template { kind: ShapeKind::Dot, cells: &[(0, 0)], weight: 1 },
    Template { kind: ShapeKind::DominoH, cells: &[(0, 0), (1, 0)], weight: 1 },
    Template { kind: ShapeKind::DominoV, cells: &[(0, 0), (0, 1)], weight: 1 },
    Template { kind: ShapeKind::DominoDiag, cells: &[(0, 0), (1, 1)], weight: 1 },
    Template { kind: ShapeKind::TrominoH, cells: &[(0, 0), (1, 0), (2, 0)], weight: 1 },
    Template { kind: ShapeKind::TrominoV, cells: &[(0, 0), (0, 1), (0, 2)], weight: 1 },
    Template { kind: ShapeKind::CornerNw, cells: &[(0, 0), (1, 0), (0, 1)], weight: 1 },
    Template { kind: ShapeKind::CornerNe, cells: &[(0, 0), (1, 0), (1, 1)], weight: 1 },
    Template { kind: ShapeKind::CornerSe, cells: &[(1, 0), (0, 1), (1, 1)], weight: 1 },
    Template { kind: ShapeKind::CornerSw, cells: &[(0, 0), (0, 1), (1, 1)], weight: 1 },
];

/// Look up the template for a kind
pub fn template(kind: ShapeKind) -> &'static Template {
    match CATALOG.iter().find(|t| t.kind == kind) {
        Some(t) => t,
        None => unreachable!("catalog covers every ShapeKind"),
    }
}

/// Offsets of a template as a normalized shape cell list
pub fn template_cells(kind: ShapeKind) -> ShapeCells {
    template(kind).cells.iter().copied().collect()
}

/// Draw `min(count, HAND_SIZE)` shapes uniformly from the catalog (with replacement).
///
/// A [`Hand`] holds at most [`HAND_SIZE`] shapes, so a larger `count` is capped
/// rather than rejected; only drawn shapes consume ids and random draws.
///
/// Each shape gets a fresh id taken from `next_id` and a uniformly random palette
/// color. `difficulty` is accepted for callers but does not bias the draw.
pub fn generate_hand<R: RandomSource>(
    rng: &mut R,
    next_id: &mut u32,
    count: usize,
    _difficulty: u32,
) -> Hand {
    let mut hand = Hand::new();
    for _ in 0..count.min(HAND_SIZE) {
        let t = &CATALOG[rng.next_range(CATALOG.len() as u32) as usize];
        let color = PALETTE[rng.next_range(PALETTE.len() as u32) as usize];
        let id = ShapeId(*next_id);
        *next_id = next_id.wrapping_add(1);

        match Shape::new(id, t.kind, t.cells, color) {
            Ok(shape) => hand.push(shape),
            Err(e) => unreachable!("catalog template {:?} is invalid: {}", t.kind, e),
        }
    }
    hand
}

/// Deals hands from an owned random source, keeping shape ids unique
#[derive(Debug, Clone)]
pub struct HandDealer<R = SimpleRng> {
    rng: R,
    next_id: u32,
}

impl HandDealer<SimpleRng> {
    /// Create a dealer backed by a seeded [`SimpleRng`]
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> HandDealer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Continue id allocation after `next_id` (used when resuming a saved game)
    pub fn resume_ids(&mut self, next_id: u32) {
        self.next_id = self.next_id.max(next_id);
    }

    /// Id the next dealt shape will receive
    pub fn next_id(&self) -> ShapeId {
        ShapeId(self.next_id)
    }

    /// Draw up to `count` shapes; capped at [`HAND_SIZE`] like [`generate_hand`]
    pub fn generate_hand(&mut self, count: usize, difficulty: u32) -> Hand {
        generate_hand(&mut self.rng, &mut self.next_id, count, difficulty)
    }

    /// Deal a full hand of [`HAND_SIZE`] shapes
    pub fn deal(&mut self, difficulty: u32) -> Hand {
        self.generate_hand(HAND_SIZE, difficulty)
    }
}

impl Default for HandDealer<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
