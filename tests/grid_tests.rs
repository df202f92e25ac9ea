//! Grid tests - placement, collision and line clearing

use blockfall::core::{ActivePiece, CoreError, Grid, Piece};
use blockfall::types::{Color, PieceKind, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

fn fill_row(grid: &mut Grid, row: i32, color: Color) {
    for col in 0..grid.width() as i32 {
        grid.set_block(row, col, color);
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), DEFAULT_GRID_WIDTH);
    assert_eq!(grid.height(), DEFAULT_GRID_HEIGHT);

    // All cells should be empty
    for row in 0..DEFAULT_GRID_HEIGHT as i32 {
        for col in 0..DEFAULT_GRID_WIDTH as i32 {
            assert!(grid.is_empty(row, col), "cell ({}, {}) should be empty", row, col);
            assert_eq!(grid.cell(row, col), Ok(None));
        }
    }
}

#[test]
fn test_out_of_bounds_is_never_empty() {
    let grid = Grid::new();
    assert!(!grid.is_empty(-1, 0));
    assert!(!grid.is_empty(0, -1));
    assert!(!grid.is_empty(20, 0));
    assert!(!grid.is_empty(0, 10));
}

#[test]
fn test_out_of_bounds_access_is_an_error() {
    let grid = Grid::new();
    assert_eq!(
        grid.cell(3, 10),
        Err(CoreError::CellOutOfBounds {
            row: 3,
            col: 10,
            width: 10,
            height: 20
        })
    );
    assert!(grid.row(20).is_err());
    assert!(grid.is_line_complete(25).is_err());
}

#[test]
fn test_set_block_out_of_bounds() {
    let mut grid = Grid::new();
    assert!(!grid.set_block(-1, 0, Color::RED));
    assert!(!grid.set_block(0, 10, Color::RED));
    assert!(grid.set_block(19, 9, Color::RED));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_can_place_walls_floor_and_blocks() {
    let mut grid = Grid::new();
    let square = |x, y| ActivePiece::new(Piece::new(PieceKind::O), x, y);

    assert!(grid.can_place(&square(0, 0)));
    assert!(grid.can_place(&square(8, 18)));
    assert!(!grid.can_place(&square(-1, 5)));
    assert!(!grid.can_place(&square(9, 5)));
    assert!(!grid.can_place(&square(4, 19)));

    grid.set_block(10, 5, Color::RED);
    assert!(!grid.can_place(&square(4, 9)));
    assert!(grid.can_place(&square(3, 9)));
}

#[test]
fn test_can_place_allows_rows_above_top() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0, Color::RED);

    // Entirely above the grid: nothing to collide with
    let hidden = ActivePiece::new(Piece::new(PieceKind::O), 4, -2);
    assert!(grid.can_place(&hidden));

    // One row overlaps the filled top row
    let touching = ActivePiece::new(Piece::new(PieceKind::O), 4, -1);
    assert!(!grid.can_place(&touching));

    // Still bounded horizontally while above the top
    let outside = ActivePiece::new(Piece::new(PieceKind::O), -1, -2);
    assert!(!grid.can_place(&outside));
}

#[test]
fn test_place_writes_resolved_color() {
    let mut grid = Grid::new();
    let golden = Piece::new(PieceKind::T).with_power_up(blockfall::types::PowerUp::Golden);
    let expected = golden.color();
    let piece = ActivePiece::new(golden, 3, 5);

    grid.place(&piece);
    assert_eq!(grid.cell(5, 4), Ok(Some(expected)));
    assert_eq!(grid.cell(6, 3), Ok(Some(expected)));
    assert_eq!(grid.cell(6, 5), Ok(Some(expected)));
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn test_line_complete() {
    let mut grid = Grid::new();
    assert_eq!(grid.is_line_complete(5), Ok(false));

    fill_row(&mut grid, 5, Color::BLUE);
    assert_eq!(grid.is_line_complete(5), Ok(true));

    // Leave one cell empty in row 6
    for col in 0..9 {
        grid.set_block(6, col, Color::BLUE);
    }
    assert_eq!(grid.is_line_complete(6), Ok(false));
}

#[test]
fn test_clear_rows_two_and_five() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 2, Color::RED);
    fill_row(&mut grid, 5, Color::RED);

    // Partial rows with one marker each
    grid.set_block(0, 0, Color::CYAN);
    grid.set_block(1, 1, Color::YELLOW);
    grid.set_block(3, 2, Color::PURPLE);
    grid.set_block(4, 3, Color::GREEN);
    grid.set_block(6, 4, Color::ORANGE);
    grid.set_block(19, 9, Color::BLUE);

    assert_eq!(grid.clear_complete_lines(), 2);

    // Above row 2: shifted down by two
    assert_eq!(grid.cell(2, 0), Ok(Some(Color::CYAN)));
    assert_eq!(grid.cell(3, 1), Ok(Some(Color::YELLOW)));
    // Between the cleared rows: shifted down by one
    assert_eq!(grid.cell(4, 2), Ok(Some(Color::PURPLE)));
    assert_eq!(grid.cell(5, 3), Ok(Some(Color::GREEN)));
    // Below row 5: unchanged
    assert_eq!(grid.cell(6, 4), Ok(Some(Color::ORANGE)));
    assert_eq!(grid.cell(19, 9), Ok(Some(Color::BLUE)));

    // Top two rows are empty
    for row in 0..2 {
        assert!(grid.row(row).unwrap().iter().all(|cell| cell.is_none()));
    }
    assert_eq!(grid.occupied_count(), 6);
}

#[test]
fn test_clear_adjacent_rows_rechecks_same_index() {
    let mut grid = Grid::new();
    for row in 16..20 {
        fill_row(&mut grid, row, Color::RED);
    }
    grid.set_block(15, 0, Color::GREEN);

    assert_eq!(grid.clear_complete_lines(), 4);
    assert_eq!(grid.cell(19, 0), Ok(Some(Color::GREEN)));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_clear_nothing_is_noop() {
    let mut grid = Grid::new();
    grid.set_block(10, 3, Color::RED);
    let before = grid.clone();
    assert_eq!(grid.clear_complete_lines(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_game_over_when_top_row_occupied() {
    let mut grid = Grid::new();
    assert!(!grid.is_game_over());
    grid.set_block(1, 3, Color::RED);
    assert!(!grid.is_game_over());
    grid.set_block(0, 9, Color::RED);
    assert!(grid.is_game_over());

    grid.clear();
    assert!(!grid.is_game_over());
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_custom_size_grid() {
    let mut grid = Grid::with_size(4, 6).unwrap();
    let square = ActivePiece::spawn(Piece::new(PieceKind::O), grid.width());
    assert_eq!(square.x(), 1);
    assert!(grid.can_place(&square));

    fill_row(&mut grid, 5, Color::RED);
    assert_eq!(grid.clear_complete_lines(), 1);
    assert!(Grid::with_size(4, 0).is_err());
}
