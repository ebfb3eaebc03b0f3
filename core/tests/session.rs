use suraido_core::board::{Board, GRID_SIZE, TILE_COUNT};
use suraido_core::catalog::PHOTO_CATALOG;
use suraido_core::session::{ClickOutcome, GameSession};

fn solved_session() -> GameSession {
    GameSession::new(&PHOTO_CATALOG[0])
}

#[test]
fn far_clicks_are_rejected_and_leave_the_board_unchanged() {
    let mut board = Board::solved(GRID_SIZE);
    let before = board.clone();
    assert!(!board.try_move(0));
    assert_eq!(board, before);
}

#[test]
fn diagonal_and_out_of_range_clicks_are_rejected() {
    let mut board = Board::solved(GRID_SIZE);
    let before = board.clone();
    assert!(!board.try_move(10));
    assert!(!board.try_move(TILE_COUNT));
    assert!(!board.try_move(usize::MAX));
    assert_eq!(board, before);
}

#[test]
fn an_adjacent_click_swaps_into_the_empty_slot() {
    let mut board = Board::solved(GRID_SIZE);
    assert!(board.try_move(14));
    assert_eq!(board.empty_slot(), 14);
    assert_eq!(board.tile(15).unwrap().home, 14);
    assert_eq!(board.tile(14).unwrap().home, 15);
}

#[test]
fn a_move_and_its_inverse_restore_the_board() {
    let solved = Board::solved(GRID_SIZE);
    let mut board = solved.clone();
    assert!(board.try_move(14));
    assert!(board.try_move(15));
    assert_eq!(board, solved);
}

#[test]
fn completion_means_every_tile_is_home() {
    assert!(Board::solved(GRID_SIZE).is_complete());

    let mut order: Vec<usize> = (0..TILE_COUNT).collect();
    order.swap(2, 3);
    let board = Board::from_order(&order, GRID_SIZE).unwrap();
    assert!(!board.is_complete());
}

#[test]
fn from_order_rejects_non_permutations() {
    assert!(Board::from_order(&[0; 16], GRID_SIZE).is_none());
    assert!(Board::from_order(&[0, 1, 2], GRID_SIZE).is_none());
}

#[test]
fn clicking_the_empty_slot_is_ignored() {
    let mut session = solved_session();
    assert_eq!(session.handle_click(15), ClickOutcome::Ignored);
    assert!(!session.started());
}

#[test]
fn a_rejected_click_still_marks_the_session_started() {
    let mut session = solved_session();
    assert_eq!(session.handle_click(0), ClickOutcome::Rejected);
    assert!(session.started());
}

#[test]
fn solving_parks_the_empty_slot_and_clears_started() {
    let mut session = solved_session();
    assert_eq!(session.handle_click(11), ClickOutcome::Moved);
    assert!(session.started());
    assert_eq!(session.handle_click(15), ClickOutcome::Solved);
    assert!(!session.started());
    assert!(session.round_over());
    assert_eq!(session.board().empty_slot(), TILE_COUNT);
    assert!(session.board().is_complete());
}

#[test]
fn scrambled_sessions_start_fresh() {
    let session = GameSession::fresh(7, None);
    assert!(!session.started());
    assert!(!session.round_over());
    let mut order = session.board().order();
    order.sort_unstable();
    assert_eq!(order, (0..TILE_COUNT).collect::<Vec<_>>());
}

#[test]
fn replay_picks_a_different_photo() {
    let first = GameSession::fresh(7, None);
    for seed in 0..50u32 {
        let next = GameSession::fresh(seed, Some(first.photo().slug));
        assert_ne!(next.photo().slug, first.photo().slug);
    }
}
