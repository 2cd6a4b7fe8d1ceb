//! Shapes module - polyomino offsets, normalization and rotation
//!
//! A shape's offsets are always normalized (minimum x and minimum y are both 0)
//! and kept in canonical order (ascending by y, then by x). Every constructor and
//! transform re-establishes both, so placement math can assume the bounding box
//! starts at the anchor.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Color, ShapeId, ShapeKind, MAX_SHAPE_CELLS};

/// Offset of a single cell relative to the shape anchor
pub type CellOffset = (i8, i8);

/// Offsets of a shape, normalized and canonically ordered
pub type ShapeCells = ArrayVec<CellOffset, MAX_SHAPE_CELLS>;

/// A shape in the player's hand
///
/// Deserializing goes through [`Shape::new`], so a loaded shape is validated and
/// normalized like a freshly built one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct Shape {
    pub id: ShapeId,
    /// Template the shape was dealt from (unchanged by rotation)
    pub kind: ShapeKind,
    offsets: ShapeCells,
    pub color: Color,
}

/// Rejected offset list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("a shape needs at least one cell")]
    Empty,
    #[error("a shape has at most {max} cells, got {got}")]
    TooManyCells { max: usize, got: usize },
    #[error("offset ({0}, {1}) appears more than once")]
    DuplicateCell(i8, i8),
    #[error("offsets span more than {max} cells on one axis")]
    SpanTooLarge { max: i8 },
}

/// Wire form of a [`Shape`], checked by `TryFrom` on load
#[derive(Deserialize)]
struct RawShape {
    id: ShapeId,
    kind: ShapeKind,
    offsets: Vec<CellOffset>,
    color: Color,
}

impl TryFrom<RawShape> for Shape {
    type Error = ShapeError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        Shape::new(raw.id, raw.kind, &raw.offsets, raw.color)
    }
}

impl Shape {
    /// Build a shape from arbitrary offsets, normalizing them.
    pub fn new(
        id: ShapeId,
        kind: ShapeKind,
        offsets: &[CellOffset],
        color: Color,
    ) -> Result<Self, ShapeError> {
        if offsets.is_empty() {
            return Err(ShapeError::Empty);
        }
        if offsets.len() > MAX_SHAPE_CELLS {
            return Err(ShapeError::TooManyCells {
                max: MAX_SHAPE_CELLS,
                got: offsets.len(),
            });
        }

        let mut cells: ShapeCells = offsets.iter().copied().collect();
        normalize(&mut cells)?;
        if let Some(w) = cells.windows(2).find(|w| w[0] == w[1]) {
            // Report in the caller's coordinates, not the normalized ones.
            let (min_x, min_y) = min_corner(offsets);
            return Err(ShapeError::DuplicateCell(w[0].0 + min_x, w[0].1 + min_y));
        }

        Ok(Self {
            id,
            kind,
            offsets: cells,
            color,
        })
    }

    /// Normalized offsets in canonical order
    pub fn offsets(&self) -> &[CellOffset] {
        &self.offsets
    }

    /// Number of cells the shape covers
    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Bounding box as (width, height)
    pub fn extent(&self) -> (i8, i8) {
        let w = self.offsets.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let h = self.offsets.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        (w, h)
    }

    /// Absolute board coordinates covered when anchored at (x, y)
    pub fn cells_at(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.offsets
            .iter()
            .map(move |&(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// Rotate 90° clockwise; identity and color carry over
    pub fn rotated(&self) -> Self {
        rotate(self)
    }
}

fn min_corner(offsets: &[CellOffset]) -> (i8, i8) {
    let min_x = offsets.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = offsets.iter().map(|&(_, y)| y).min().unwrap_or(0);
    (min_x, min_y)
}

/// Shift offsets so the bounding box starts at (0, 0), then sort by (y, x).
///
/// Fails if the offsets span more than `i8::MAX` on either axis; `cells` may be
/// partly shifted in that case.
pub fn normalize(cells: &mut [CellOffset]) -> Result<(), ShapeError> {
    let (min_x, min_y) = min_corner(cells);
    for cell in cells.iter_mut() {
        match (cell.0.checked_sub(min_x), cell.1.checked_sub(min_y)) {
            (Some(x), Some(y)) => *cell = (x, y),
            _ => return Err(ShapeError::SpanTooLarge { max: i8::MAX }),
        }
    }
    cells.sort_unstable_by_key(|&(x, y)| (y, x));
    Ok(())
}

/// Rotate a shape 90° clockwise: (x, y) -> (-y, x), renormalized.
///
/// The shape id, kind and color pass through unchanged.
pub fn rotate(shape: &Shape) -> Shape {
    // Normalized offsets lie in 0..=i8::MAX, so negating and re-shifting stays in range.
    let mut cells: ShapeCells = shape.offsets.iter().map(|&(x, y)| (-y, x)).collect();
    if let Err(e) = normalize(&mut cells) {
        unreachable!("rotating a normalized shape overflowed: {}", e);
    }
    Shape {
        id: shape.id,
        kind: shape.kind,
        offsets: cells,
        color: shape.color,
    }
}

/// All four orientations, starting with the shape as given.
///
/// Symmetric shapes repeat orientations; the oracle does not deduplicate.
pub fn orientations(shape: &Shape) -> [Shape; 4] {
    let r1 = rotate(shape);
    let r2 = rotate(&r1);
    let r3 = rotate(&r2);
    [shape.clone(), r1, r2, r3]
}
