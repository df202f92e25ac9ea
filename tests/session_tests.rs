//! Session tests - gravity, locking, scoring and levels through the public API

use blockfall::core::{ActivePiece, Piece, PieceFactory};
use blockfall::engine::{GameConfig, Session, SessionEvent};
use blockfall::types::{Color, PieceKind, PowerUp};

fn started(seed: u32) -> Session {
    let mut session = Session::new(GameConfig::default().with_seed(seed)).unwrap();
    session.initialize_game();
    session
}

/// Fill `row` except for the columns in `gap`
fn fill_with_gap(session: &mut Session, row: i32, gap: std::ops::Range<i32>) {
    let width = session.grid().width() as i32;
    for col in (0..width).filter(|col| !gap.contains(col)) {
        session.grid_mut().set_block(row, col, Color::RED);
    }
}

#[test]
fn test_game_lifecycle() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    assert!(session.current_piece().is_none());

    session.initialize_game();
    assert!(session.current_piece().is_some());
    assert!(!session.is_game_over());

    // Play hard drops until the stack tops out
    let mut drops = 0;
    while !session.is_game_over() {
        session.drop_piece();
        session.update(0.0);
        drops += 1;
        assert!(drops < 1_000, "game should end eventually");
    }
    assert!(session.grid().is_game_over() || session.current_piece().is_some());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = started(99);
    let mut b = started(99);
    for _ in 0..200 {
        a.move_left();
        b.move_left();
        a.update(0.25);
        b.update(0.25);
    }
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.next_piece(), b.next_piece());
}

#[test]
fn test_fall_timer_accumulates_across_ticks() {
    let mut session = started(1);
    let y = session.current_piece().unwrap().y();
    for _ in 0..59 {
        session.update(1.0 / 60.0);
    }
    assert_eq!(session.current_piece().unwrap().y(), y);
    session.update(1.0 / 30.0);
    assert_eq!(session.current_piece().unwrap().y(), y + 1);
}

#[test]
fn test_lock_then_respawn_on_next_tick() {
    let mut session = started(1);
    session.drop_piece();
    assert!(session.current_piece().is_none());

    let queued = session.next_piece().clone();
    session.update(0.5);
    assert_eq!(session.current_piece().unwrap().piece(), &queued);
    assert_eq!(session.fall_timer(), 0.0);
}

#[test]
fn test_multiplier_two_single_line_awards_200() {
    let mut session = started(1);
    fill_with_gap(&mut session, 19, 0..4);
    let golden = PieceFactory::apply_power_up(&Piece::new(PieceKind::I), PowerUp::Golden);
    assert!(session.set_current_piece(ActivePiece::new(golden, 0, 19)));

    session.move_down();
    assert_eq!(session.score(), 200);
    assert_eq!(session.lines_cleared(), 1);
}

#[test]
fn test_multiplier_three_four_lines_awards_2400() {
    let mut session = started(1);
    for row in 16..20 {
        fill_with_gap(&mut session, row, 0..1);
    }
    let rainbow = PieceFactory::apply_power_up(&Piece::new(PieceKind::I), PowerUp::Rainbow);
    let mut bar = ActivePiece::new(rainbow, 0, 16);
    bar.rotate();
    assert!(session.set_current_piece(bar));

    session.move_down();
    assert_eq!(session.score(), 2400);
    assert_eq!(session.lines_cleared(), 4);
    assert_eq!(session.grid().occupied_count(), 0);
}

#[test]
fn test_bomb_scores_like_plain_piece() {
    let mut session = started(1);
    fill_with_gap(&mut session, 19, 0..4);
    session.grid_mut().set_block(18, 9, Color::RED);
    let bomb = PieceFactory::apply_power_up(&Piece::new(PieceKind::I), PowerUp::Bomb);
    assert!(session.set_current_piece(ActivePiece::new(bomb, 0, 19)));

    session.move_down();
    assert_eq!(session.score(), 100);
    // Only the completed row goes; the neighbour row is kept
    assert_eq!(session.grid().occupied_count(), 1);
    assert_eq!(session.grid().cell(19, 9), Ok(Some(Color::RED)));
}

#[test]
fn test_three_line_clear_on_short_grid() {
    let mut session = Session::new(GameConfig::default().with_size(10, 8)).unwrap();
    session.initialize_game();
    for row in 5..8 {
        fill_with_gap(&mut session, row, 0..1);
    }
    let mut bar = ActivePiece::new(Piece::new(PieceKind::I), 0, 4);
    bar.rotate();
    assert!(session.set_current_piece(bar));

    session.move_down();
    assert_eq!(session.score(), 500);
    assert_eq!(session.lines_cleared(), 3);
    // The top cell of the bar drops to the floor
    assert_eq!(session.grid().occupied_count(), 1);
    assert_eq!(session.grid().cell(7, 0), Ok(Some(Color::CYAN)));
}

#[test]
fn test_level_and_speed_progression() {
    let mut session = started(1);
    let mut speeds = vec![session.fall_speed()];

    for cleared in 1..=30u32 {
        fill_with_gap(&mut session, 19, 0..4);
        let bar = ActivePiece::new(Piece::new(PieceKind::I), 0, 19);
        assert!(session.set_current_piece(bar));
        session.move_down();
        assert_eq!(session.lines_cleared(), cleared);
        assert_eq!(session.level(), cleared / 10 + 1);
        if cleared % 10 == 0 {
            speeds.push(session.fall_speed());
        }
    }

    assert_eq!(speeds.len(), 4);
    assert!(speeds.windows(2).all(|pair| pair[1] < pair[0]));
    assert!((speeds[1] - 1.0 / 1.1).abs() < 1e-12);
}

#[test]
fn test_occupied_top_row_is_game_over_after_any_lock() {
    let mut session = started(1);
    fill_with_gap(&mut session, 0, 9..10);
    assert!(session.grid().is_game_over());
    assert!(!session.is_game_over());

    let square = ActivePiece::new(Piece::new(PieceKind::O), 0, 18);
    assert!(session.set_current_piece(square));
    session.move_down();
    assert!(session.is_game_over());
}

#[test]
fn test_spawn_blocked_sets_game_over() {
    let mut session = started(4);
    let spawn_col = (session.grid().width() / 2 - 1) as i32;
    session.drop_piece();
    for col in spawn_col..spawn_col + 3 {
        session.grid_mut().set_block(0, col, Color::RED);
        session.grid_mut().set_block(1, col, Color::RED);
    }

    session.update(0.016);
    assert!(session.is_game_over());
    assert!(matches!(
        session.take_last_event(),
        Some(SessionEvent::SpawnBlocked { .. })
    ));

    // No further updates
    let snapshot = session.grid().clone();
    session.update(5.0);
    assert_eq!(session.grid(), &snapshot);
}

#[test]
fn test_negative_row_spawn_is_placeable() {
    let mut session = started(1);
    let mut bar = ActivePiece::new(Piece::new(PieceKind::I), 0, -3);
    bar.rotate();
    assert!(session.set_current_piece(bar));
    assert!(session.move_down());
    assert_eq!(session.current_piece().unwrap().y(), -2);
}
