//! Board tests - grid, placement legality and piece movement

use swiftris::core::{Block, Board, BoardConfig, GamePhase, Grid2D};
use swiftris::types::{BlockColor, NUM_COLUMNS, NUM_ROWS};

fn board() -> Board {
    Board::new(BoardConfig::seeded(2015)).unwrap()
}

#[test]
fn test_grid_new_empty() {
    let grid: Grid2D<Block> = Grid2D::new(NUM_COLUMNS, NUM_ROWS);
    assert_eq!(grid.columns(), 10);
    assert_eq!(grid.rows(), 20);

    for row in 0..NUM_ROWS {
        for column in 0..NUM_COLUMNS {
            assert!(grid.get(column, row).is_none(), "({column}, {row}) should be empty");
        }
    }
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid2D::new(NUM_COLUMNS, NUM_ROWS);
    let block = Block::new(5, 10, BlockColor::Red);

    grid.set(5, 10, Some(block));
    assert_eq!(grid.get(5, 10), Some(&block));

    grid.set(5, 10, None);
    assert_eq!(grid.get(5, 10), None);
}

#[test]
#[should_panic]
fn test_grid_out_of_bounds_fails_loudly() {
    let grid: Grid2D<Block> = Grid2D::new(NUM_COLUMNS, NUM_ROWS);
    let _ = grid.get(NUM_COLUMNS, 0);
}

#[test]
fn test_board_block_at_out_of_bounds() {
    let board = board();
    assert_eq!(board.block_at(-1, 0), None);
    assert_eq!(board.block_at(0, -1), None);
    assert_eq!(board.block_at(NUM_COLUMNS as i32, 0), None);
    assert_eq!(board.block_at(0, NUM_ROWS as i32), None);
}

#[test]
fn test_board_is_occupied() {
    let mut board = board();
    assert!(!board.is_occupied(3, 7));
    assert!(board.place_block(Block::new(3, 7, BlockColor::Teal)));
    assert!(board.is_occupied(3, 7));
    assert!(!board.is_occupied(-1, 7));
}

#[test]
fn test_fresh_spawn_is_legal() {
    let mut board = board();
    board.begin_game();
    for _ in 0..20 {
        let (falling, next) = board.advance_piece();
        assert!(falling.is_some());
        assert!(next.is_some());
        assert!(!board.is_placement_illegal());
        // throw the piece away without settling it
        board.drop_shape();
    }
}

#[test]
fn test_spawn_over_stack_is_illegal() {
    let mut board = board();
    for column in 0..NUM_COLUMNS as i32 {
        for row in 0..4 {
            board.place_block(Block::new(column, row, BlockColor::Yellow));
        }
    }
    board.begin_game();
    assert_eq!(board.advance_piece(), (None, None));
    assert_eq!(board.phase(), GamePhase::Over);
    assert!(!board.is_placement_illegal());
}

#[test]
fn test_moves_stop_at_walls() {
    let mut board = board();
    board.begin_game();
    board.advance_piece();

    let mut left_moves = 0;
    while board.move_shape_left() {
        left_moves += 1;
        assert!(left_moves < NUM_COLUMNS, "piece walked through the left wall");
    }
    let leftmost = board
        .falling_piece()
        .unwrap()
        .blocks()
        .iter()
        .map(Block::column)
        .min()
        .unwrap();
    assert_eq!(leftmost, 0);

    while board.move_shape_right() {}
    let rightmost = board
        .falling_piece()
        .unwrap()
        .blocks()
        .iter()
        .map(Block::column)
        .max()
        .unwrap();
    assert_eq!(rightmost, NUM_COLUMNS as i32 - 1);
}

#[test]
fn test_drop_then_settle_fills_grid() {
    let mut board = board();
    board.begin_game();
    let (falling, _) = board.advance_piece();
    let color = falling.unwrap().color();

    board.drop_shape();
    assert!(board.detect_touch());
    let landed = *board.falling_piece().unwrap();
    board.settle_shape();

    assert!(board.falling_piece().is_none());
    for block in landed.blocks() {
        let settled = board.block_at(block.column(), block.row()).unwrap();
        assert_eq!(settled.color(), color);
    }
    assert_eq!(board.grid().iter().count(), 4);
}

#[test]
fn test_moves_ignored_after_game_over() {
    let mut board = board();
    board.begin_game();
    board.advance_piece();
    board.end_game();

    assert!(!board.move_shape_left());
    assert!(!board.move_shape_right());
    assert!(!board.rotate_shape());
}
