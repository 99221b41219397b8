use super::*;

// ==================== CAPTURE TESTS ====================

#[test]
fn test_jump_over_adjacent_opponent() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 3, 3, Cell::RedMan);
    place_piece(&mut pos, 2, 2, Cell::BlackMan);

    let moves = pos.possible_moves(Square::new(3, 3));

    assert_eq!(sorted(&moves.jumps), squares(&[(1, 1)]));
    // (2,2) is occupied, the only step left is the other diagonal
    assert_eq!(sorted(&moves.steps), squares(&[(2, 4)]));
}

#[test]
fn test_jump_blocked_by_occupied_landing() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 3, 3, Cell::RedMan);
    place_piece(&mut pos, 2, 2, Cell::BlackMan);
    place_piece(&mut pos, 1, 1, Cell::BlackMan);

    let moves = pos.possible_moves(Square::new(3, 3));

    assert!(moves.jumps.is_empty());
}

#[test]
fn test_jump_blocked_by_board_edge() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 2, 1, Cell::RedMan);
    place_piece(&mut pos, 1, 0, Cell::BlackMan);

    let moves = pos.possible_moves(Square::new(2, 1));

    assert!(moves.jumps.is_empty());
    assert_eq!(sorted(&moves.steps), squares(&[(1, 2)]));
}

#[test]
fn test_cannot_jump_own_piece() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 5, 2, Cell::BlackKing);
    place_piece(&mut pos, 4, 3, Cell::BlackMan);

    let moves = pos.possible_moves(Square::new(5, 2));

    assert!(moves.jumps.is_empty());
    assert!(!moves.contains(Square::new(3, 4)));
}

#[test]
fn test_forced_capture_candidates() {
    let pos = board(
        "- . - . - . - .
         . - . - . - . -
         - . - b - . - .
         . - . - r - . -
         - . - . - . - .
         . - . - . - . -
         - r - . - . - .
         . - . - . - . -",
    );

    let valid = pos.all_valid_moves(Side::Black);

    assert!(!valid.simple.is_empty());
    assert_eq!(valid.jumps.len(), 1);
    assert_eq!(valid.candidates(), &[Move::from_coords(2, 3, 4, 5)]);
    assert!(valid.candidates().iter().all(Move::is_jump));
}

#[test]
fn test_candidates_fall_back_to_steps() {
    let pos = Position::starting();
    let valid = pos.all_valid_moves(Side::Red);
    assert_eq!(valid.candidates().len(), valid.simple.len());
}

#[test]
fn test_side_without_moves() {
    let pos = board(
        "- . - . - . - .
         . - . - . - . -
         - . - . - . - .
         . - . - . - . -
         - . - . - . - .
         b - b - b - . -
         - b - b - . - .
         r - r - . - . -",
    );

    assert!(pos.all_valid_moves(Side::Red).is_empty());
    assert!(!pos.has_any_move(Side::Red));
    assert!(pos.has_any_move(Side::Black));
}
