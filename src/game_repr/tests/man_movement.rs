use super::*;

// ==================== MAN MOVEMENT TESTS ====================

#[test]
fn test_lone_red_man_steps_forward() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 5, 2, Cell::RedMan);

    let moves = pos.possible_moves(Square::new(5, 2));

    assert_eq!(sorted(&moves.steps), squares(&[(4, 1), (4, 3)]));
    assert!(moves.jumps.is_empty());
}

#[test]
fn test_lone_black_man_steps_forward() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 2, 3, Cell::BlackMan);

    let moves = pos.possible_moves(Square::new(2, 3));

    assert_eq!(sorted(&moves.steps), squares(&[(3, 2), (3, 4)]));
    assert!(moves.jumps.is_empty());
}

#[test]
fn test_man_on_edge_has_single_step() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 5, 0, Cell::RedMan);

    let moves = pos.possible_moves(Square::new(5, 0));

    assert_eq!(sorted(&moves.steps), squares(&[(4, 1)]));
}

#[test]
fn test_man_never_moves_backward() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 4, 3, Cell::RedMan);
    // Opponent behind the man cannot be captured by a man
    place_piece(&mut pos, 5, 4, Cell::BlackMan);

    let moves = pos.possible_moves(Square::new(4, 3));

    assert_eq!(sorted(&moves.steps), squares(&[(3, 2), (3, 4)]));
    assert!(moves.jumps.is_empty());
}

#[test]
fn test_own_piece_blocks_direction() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 5, 2, Cell::RedMan);
    place_piece(&mut pos, 4, 1, Cell::RedMan);
    // Empty landing behind own piece must not produce a jump
    let moves = pos.possible_moves(Square::new(5, 2));

    assert_eq!(sorted(&moves.steps), squares(&[(4, 3)]));
    assert!(moves.jumps.is_empty());
}

#[test]
fn test_empty_square_has_no_moves() {
    let pos = Position::starting();
    let moves = pos.possible_moves(Square::new(4, 1));
    assert!(moves.is_empty());
}

#[test]
fn test_starting_position_move_counts() {
    let pos = Position::starting();

    let red = pos.all_valid_moves(Side::Red);
    assert_eq!(red.simple.len(), 7);
    assert!(red.jumps.is_empty());

    let black = pos.all_valid_moves(Side::Black);
    assert_eq!(black.simple.len(), 7);
    assert!(black.jumps.is_empty());
}

#[test]
fn test_generation_is_idempotent() {
    let pos = board(
        "- b - b - b - b
         b - . - b - b -
         - b - . - b - b
         . - b - r - . -
         - . - . - . - .
         r - r - . - r -
         - r - r - r - r
         r - r - r - r -",
    );

    for sq in Square::all() {
        assert_eq!(pos.possible_moves(sq), pos.possible_moves(sq));
    }
    assert_eq!(pos.all_valid_moves(Side::Red), pos.all_valid_moves(Side::Red));
}
