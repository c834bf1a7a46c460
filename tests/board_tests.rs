//! Board occupancy tests

use tui_snake::core::Board;
use tui_snake::types::{Cell, ItemKind, Position, SnakeTone, COLS, ROWS};

#[test]
fn test_board_new() {
    let board = Board::new(ROWS, COLS);

    assert_eq!(board.rows(), 27);
    assert_eq!(board.cols(), 37);
    assert_eq!(board.area(), 27 * 37);
    assert!(board.cells().iter().all(|c| c.is_empty()));
    assert_eq!(board.free_count(), 27 * 37);
}

#[test]
fn test_board_set_get() {
    let mut board = Board::new(5, 6);

    assert!(board.set(Position::new(4, 5), Cell::Snake(SnakeTone::Normal)));
    assert!(board.set(Position::new(0, 0), Cell::Item(ItemKind::Apple)));

    assert_eq!(board.get(Position::new(4, 5)), Some(Cell::Snake(SnakeTone::Normal)));
    assert_eq!(board.get(Position::new(0, 0)), Some(Cell::Item(ItemKind::Apple)));
    assert_eq!(board.get(Position::new(1, 1)), Some(Cell::Empty));
}

#[test]
fn test_board_bounds() {
    let mut board = Board::new(5, 6);

    for pos in [
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(5, 0),
        Position::new(0, 6),
    ] {
        assert!(board.is_out_of_bounds(pos), "{:?}", pos);
        assert_eq!(board.get(pos), None);
        assert!(!board.set(pos, Cell::Snake(SnakeTone::Normal)));
        assert!(!board.is_free(pos));
    }
    assert!(!board.is_out_of_bounds(Position::new(4, 5)));
}

#[test]
fn test_items_do_not_block_spawning() {
    let mut board = Board::new(3, 3);
    board.set(Position::new(1, 1), Cell::Snake(SnakeTone::Powered));
    board.set(Position::new(0, 0), Cell::Item(ItemKind::Power));

    assert!(board.is_snake(Position::new(1, 1)));
    assert!(!board.is_free(Position::new(1, 1)));
    assert!(board.is_free(Position::new(0, 0)));
    assert_eq!(board.free_count(), 8);
    assert_eq!(board.nth_free(4), Some(Position::new(1, 2)));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new(4, 4);
    board.set(Position::new(2, 2), Cell::Snake(SnakeTone::Normal));
    board.set(Position::new(3, 3), Cell::Item(ItemKind::Apple));

    board.clear();

    assert_eq!(board.free_count(), 16);
    assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
}

#[test]
fn test_iter_is_row_major() {
    let board = Board::new(2, 3);
    let positions: Vec<_> = board.iter().map(|(pos, _)| (pos.row, pos.col)).collect();

    assert_eq!(
        positions,
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
    );
}
