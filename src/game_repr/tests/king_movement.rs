use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_in_four_directions() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 4, 3, Cell::RedKing);

    let moves = pos.possible_moves(Square::new(4, 3));

    assert_eq!(
        sorted(&moves.steps),
        squares(&[(3, 2), (3, 4), (5, 2), (5, 4)])
    );
}

#[test]
fn test_king_in_corner() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 7, 0, Cell::BlackKing);

    let moves = pos.possible_moves(Square::new(7, 0));

    assert_eq!(sorted(&moves.steps), squares(&[(6, 1)]));
}

#[test]
fn test_king_captures_backward() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 3, 4, Cell::RedKing);
    place_piece(&mut pos, 4, 5, Cell::BlackMan);

    let moves = pos.possible_moves(Square::new(3, 4));

    assert_eq!(sorted(&moves.jumps), squares(&[(5, 6)]));
    assert!(!moves.steps.contains(&Square::new(4, 5)));
}

#[test]
fn test_king_captures_king() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 6, 1, Cell::BlackKing);
    place_piece(&mut pos, 5, 2, Cell::RedKing);

    let moves = pos.possible_moves(Square::new(6, 1));

    assert_eq!(sorted(&moves.jumps), squares(&[(4, 3)]));
}

#[test]
fn test_kings_counted_in_valid_moves() {
    let mut pos = Position::empty();
    place_piece(&mut pos, 0, 1, Cell::RedKing);
    place_piece(&mut pos, 7, 6, Cell::RedMan);

    let valid = pos.all_valid_moves(Side::Red);

    assert!(has_move(&valid.simple, (0, 1), (1, 0)));
    assert!(has_move(&valid.simple, (0, 1), (1, 2)));
    assert!(has_move(&valid.simple, (7, 6), (6, 5)));
    assert!(has_move(&valid.simple, (7, 6), (6, 7)));
    assert_eq!(valid.len(), 4);
}
