//! Board tests - grid access, full-line scans and placement legality

use junk_blocks::core::{apply_placement, can_place, create_empty_board, Board, Shape};
use junk_blocks::types::{Cell, CellStatus, Color, PlacementId, ShapeId, ShapeKind, BOARD_SIZE};

fn filled(owner: u32) -> Cell {
    Cell::Filled {
        color: Color::Blue,
        owner: PlacementId(owner),
    }
}

fn shape(kind: ShapeKind, offsets: &[(i8, i8)]) -> Shape {
    Shape::new(ShapeId(0), kind, offsets, Color::Red).unwrap()
}

#[test]
fn test_board_new_empty() {
    let board = create_empty_board();
    assert_eq!(board.size(), BOARD_SIZE);

    // All cells should be empty
    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(Cell::Empty));
        }
    }
    assert_eq!(board.count(CellStatus::Empty), 36);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    // Negative coordinates
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);

    // Beyond bounds
    assert_eq!(board.get(BOARD_SIZE as i8, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE as i8), None);
    assert!(board.is_out_of_bounds(6, 6));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 4, filled(3)));
    assert_eq!(board.get(5, 4), Some(filled(3)));
    assert!(!board.is_valid(5, 4));

    assert!(board.set(0, 0, Cell::Junk));
    assert_eq!(board.get(0, 0).map(|c| c.status()), Some(CellStatus::Junk));
    assert_eq!(board.get(0, 0).and_then(|c| c.owner()), None);

    // Clear a cell
    assert!(board.set(5, 4, Cell::Empty));
    assert_eq!(board.get(5, 4), Some(Cell::Empty));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    // Should return false for out of bounds
    assert!(!board.set(-1, 0, Cell::Junk));
    assert!(!board.set(0, -1, Cell::Junk));
    assert!(!board.set(BOARD_SIZE as i8, 0, Cell::Junk));
    assert!(!board.set(0, BOARD_SIZE as i8, Cell::Junk));
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();

    // Empty row is not full
    assert!(!board.is_row_full(2));

    // Fill row 2 with a mix of filled and junk
    for x in 0..BOARD_SIZE as i8 {
        let cell = if x % 2 == 0 { filled(1) } else { Cell::Junk };
        board.set(x, 2, cell);
    }
    assert!(board.is_row_full(2));

    // Leave one cell empty in row 3
    for x in 0..BOARD_SIZE as i8 - 1 {
        board.set(x, 3, filled(2));
    }
    assert!(!board.is_row_full(3));
    assert!(!board.is_row_full(99));

    assert_eq!(board.full_rows().as_slice(), &[2]);
}

#[test]
fn test_board_is_col_full() {
    let mut board = Board::new();
    for y in 0..BOARD_SIZE as i8 {
        board.set(4, y, filled(y as u32));
    }
    assert!(board.is_col_full(4));
    assert!(!board.is_col_full(3));
    assert_eq!(board.full_cols().as_slice(), &[4]);
    assert!(board.full_rows().is_empty());
}

#[test]
fn test_can_place_is_exact() {
    let board = Board::from_ascii(&[
        "......", ".x....", "......", "....0.", "......", "......",
    ])
    .unwrap();
    let corner = shape(ShapeKind::CornerNw, &[(0, 0), (1, 0), (0, 1)]);

    let mut legal = 0;
    for y in -2..8i8 {
        for x in -2..8i8 {
            let expected = corner
                .cells_at(x, y)
                .all(|(px, py)| board.get(px, py) == Some(Cell::Empty));
            assert_eq!(can_place(&board, &corner, x, y), expected, "anchor ({x}, {y})");
            if expected {
                legal += 1;
            }
        }
    }
    // 25 anchors keep the 2x2 box on the board; each occupied cell knocks out 3.
    assert_eq!(legal, 19);
}

#[test]
fn test_stamped_cells_reject_any_other_shape() {
    let board = Board::new();
    let domino = shape(ShapeKind::DominoH, &[(0, 0), (1, 0)]);
    let dot = shape(ShapeKind::Dot, &[(0, 0)]);
    let vertical = shape(ShapeKind::DominoV, &[(0, 0), (0, 1)]);

    let out = apply_placement(&board, &domino, 2, 3, 0);
    assert_eq!(out.lines_cleared, 0);

    for (x, y) in domino.cells_at(2, 3) {
        assert!(can_place(&board, &dot, x, y));
        assert!(!can_place(&out.board, &dot, x, y), "dot at ({x}, {y})");
        assert!(!can_place(&out.board, &vertical, x, y - 1), "vertical over ({x}, {y})");
    }
    assert!(!can_place(&out.board, &domino, 2, 3));
    assert!(can_place(&out.board, &dot, 4, 3));
}

#[test]
fn test_board_ascii_layout() {
    let board = Board::from_ascii(&[
        "0.....", "0.....", "x.....", "......", "......", ".....1",
    ])
    .unwrap();
    assert_eq!(board.get(0, 0).and_then(|c| c.owner()), Some(PlacementId(0)));
    assert_eq!(board.get(5, 5).and_then(|c| c.owner()), Some(PlacementId(1)));
    assert_eq!(board.next_placement_id(), PlacementId(2));
    assert_eq!(
        board.to_ascii(),
        vec!["#.....", "#.....", "x.....", "......", "......", ".....#"]
    );
}
